// Data models for the to-do list

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::StoreError;

/// Stable synthetic identifier assigned to a task when it is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed set of categories a task can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Home,
    Personal,
    School,
    Kids,
    Office,
    Miscellaneous,
}

impl Category {
    /// Every category, in the order a selection control lists them
    pub const ALL: [Category; 6] = [
        Category::Home,
        Category::Personal,
        Category::School,
        Category::Kids,
        Category::Office,
        Category::Miscellaneous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Personal => "Personal",
            Category::School => "School",
            Category::Kids => "Kids",
            Category::Office => "Office",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Display colour as an (r, g, b) triple
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Category::Home => (161, 185, 138),
            Category::Personal => (232, 189, 125),
            Category::School => (144, 238, 144),
            Category::Kids => (180, 225, 255),
            Category::Office => (147, 112, 219),
            Category::Miscellaneous => (228, 168, 201),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StoreError::BlankCategory);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| StoreError::UnknownCategory(s.to_string()))
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
    pub category: Category,
    pub time_added: DateTime<Local>,
}

impl Task {
    pub(crate) fn new(text: String, category: Category) -> Self {
        Self {
            id: TaskId::generate(),
            text,
            done: false,
            category,
            time_added: Local::now(),
        }
    }
}

/// Point-in-time copy of the store handed to a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_exact_label() {
        assert_eq!("Home".parse::<Category>().unwrap(), Category::Home);
        assert_eq!("  Office ".parse::<Category>().unwrap(), Category::Office);
        assert_eq!(
            "Miscellaneous".parse::<Category>().unwrap(),
            Category::Miscellaneous
        );
    }

    #[test]
    fn test_category_parse_rejects_blank_and_unknown() {
        assert_eq!("".parse::<Category>(), Err(StoreError::BlankCategory));
        assert_eq!("   ".parse::<Category>(), Err(StoreError::BlankCategory));
        assert_eq!(
            "Garden".parse::<Category>(),
            Err(StoreError::UnknownCategory("Garden".to_string()))
        );
        // Labels are case sensitive, like the original selector values
        assert!("home".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_round_trips_all() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("Buy milk".to_string(), Category::Home);
        let b = Task::new("Buy milk".to_string(), Category::Home);
        assert_ne!(a.id, b.id);
        assert!(!a.done);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Kids).unwrap();
        assert_eq!(json, "\"Kids\"");
    }
}
