//! Error types shared across the tracker.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The operation referenced a task id that is not in the catalog.
    #[error("task {0} is not in the catalog")]
    NotFound(u32),

    /// The task was already completed on the given day.
    #[error("task {task_id} is already completed for {day}")]
    AlreadyCompleted { task_id: u32, day: String },

    /// Rejected input: empty name, out-of-range base EXP, unknown season.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The save file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
