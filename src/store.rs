// In-memory task store with derived category membership

use crate::error::StoreError;
use crate::filter::Filter;
use crate::models::{Category, StoreSnapshot, Task, TaskId};
use tracing::{debug, info, warn};

/// Owns every task for the lifetime of a session
///
/// Tasks are kept in insertion order. The list of active categories is derived
/// state: after every mutation it is rebuilt by scanning the remaining tasks, so
/// it always holds exactly the distinct categories present, ordered by the first
/// task that carries each one.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<Category>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Categories with at least one task, in first-seen order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a new task
    ///
    /// `text` must contain something other than whitespace and `category` must
    /// name one of `Category::ALL`. The text is stored as given. On error the
    /// store is untouched; callers use the `Ok` to decide whether to notify.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Task, StoreError> {
        if text.trim().is_empty() {
            warn!(category, "Rejected task with blank text");
            return Err(StoreError::BlankText);
        }
        let category = category.parse::<Category>().inspect_err(|e| {
            warn!(error = %e, "Rejected task with invalid category");
        })?;

        let task = Task::new(text.to_string(), category);
        debug!(id = %task.id, category = %category, "Added task");
        self.tasks.push(task.clone());
        self.recompute_categories();

        Ok(task)
    }

    /// Flip the done flag of a task
    ///
    /// Returns false if no task has this id; stale ids are not an error.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                debug!(id = %id, done = task.done, "Toggled task");
                true
            }
            None => {
                debug!(id = %id, "Toggle ignored, task not found");
                false
            }
        }
    }

    /// Remove one task by id, returning it if it was present
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(id = %id, "Delete ignored, task not found");
            return None;
        };

        let task = self.tasks.remove(pos);
        self.recompute_categories();
        debug!(id = %id, category = %task.category, "Deleted task");
        Some(task)
    }

    /// Remove every task in a category, returning how many were removed
    pub fn clear_category(&mut self, category: Category) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.category != category);
        let removed = before - self.tasks.len();
        self.recompute_categories();

        info!(category = %category, removed, "Cleared category");
        removed
    }

    /// Remove every task, returning how many were removed
    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        self.categories.clear();

        info!(removed, "Cleared all tasks");
        removed
    }

    /// Tasks in one category, in insertion order
    pub fn tasks_by_category(&self, category: Category) -> Vec<&Task> {
        self.list(&[Filter::Category(category)])
    }

    /// Tasks matching every filter, in insertion order
    pub fn list(&self, filters: &[Filter]) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| filters.iter().all(|f| f.matches(t)))
            .collect()
    }

    /// Owned copy of the current tasks and active categories
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.tasks.clone(),
            categories: self.categories.clone(),
        }
    }

    fn recompute_categories(&mut self) {
        let mut categories = Vec::with_capacity(Category::ALL.len());
        for task in &self.tasks {
            if !categories.contains(&task.category) {
                categories.push(task.category);
            }
        }

        debug!(?categories, "Recomputed active categories");
        self.categories = categories;
    }
}
