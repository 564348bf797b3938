// TodoList - In-memory categorized to-do list

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use error::StoreError;
pub use filter::Filter;
pub use models::{Category, StoreSnapshot, Task, TaskId};
pub use shell::{Command, Session};
pub use store::TaskStore;
