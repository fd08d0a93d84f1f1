use thiserror::Error;

/// Error type shared by commands and the queue that runs them
///
/// Errors returned by a command's `execute` or `undo` reach the caller of
/// [`CommandQueue::execute`](crate::engine::CommandQueue::execute) or
/// [`CommandQueue::undo`](crate::engine::CommandQueue::undo) untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The halt sentinel was handed to `enqueue`
    #[error("the halt sentinel is a control signal and cannot be enqueued")]
    HaltEnqueued,

    /// The halt sentinel's own `execute` was invoked
    #[error("the halt sentinel is a control signal and cannot be executed")]
    HaltNotExecutable,

    /// The halt sentinel's own `undo` was invoked
    #[error("the halt sentinel is a control signal and cannot be undone")]
    HaltNotUndoable,

    /// Command execution errors
    #[error("{0}")]
    Execution(String),

    /// Command undo errors
    #[error("{0}")]
    Undo(String),

    /// Configuration related errors
    #[error("{0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("{0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String)
}

impl CommandError {
    /// True for the errors raised by misusing the halt sentinel
    pub fn is_halt_misuse(&self) -> bool {
        matches!(self, CommandError::HaltEnqueued | CommandError::HaltNotExecutable | CommandError::HaltNotUndoable)
    }
}

/// Convert from anyhow::Error
impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        CommandError::Generic(format!("{err:#}"))
    }
}

/// Convert from serde_yaml::Error
impl From<serde_yaml::Error> for CommandError {
    fn from(err: serde_yaml::Error) -> Self {
        CommandError::Serialization(err.to_string())
    }
}
