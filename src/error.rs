// Error types for the task store

use thiserror::Error;

/// Reasons an `add` is rejected. The store is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task text is blank")]
    BlankText,

    #[error("no category selected")]
    BlankCategory,

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
