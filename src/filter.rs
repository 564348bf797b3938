// Query filtering for tasks

use crate::models::{Category, Task};

/// Predicate applied by `TaskStore::list`; a task must match every filter given
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Tasks filed under this category
    Category(Category),
    /// Tasks whose done flag equals the value
    Done(bool),
    /// Tasks whose text contains the value (case sensitive)
    TextContains(String),
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::Category(category) => task.category == *category,
            Filter::Done(done) => task.done == *done,
            Filter::TextContains(needle) => task.text.contains(needle.as_str()),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Category(c) => write!(f, "category = {}", c),
            Filter::Done(d) => write!(f, "done = {}", d),
            Filter::TextContains(s) => write!(f, "text contains {:?}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        let mut task = Task::new("Pay bills".to_string(), Category::Office);

        assert!(Filter::Category(Category::Office).matches(&task));
        assert!(!Filter::Category(Category::Home).matches(&task));
        assert!(Filter::Done(false).matches(&task));
        assert!(Filter::TextContains("bills".to_string()).matches(&task));
        assert!(!Filter::TextContains("Bills".to_string()).matches(&task));

        task.done = true;
        assert!(Filter::Done(true).matches(&task));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::Category(Category::Kids).to_string(), "category = Kids");
        assert_eq!(Filter::Done(true).to_string(), "done = true");
        assert_eq!(
            Filter::TextContains("milk".to_string()).to_string(),
            "text contains \"milk\""
        );
    }
}
