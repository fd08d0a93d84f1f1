//! # Command Queue
//!
//! A reversible, sequential command engine.
//!
//! This crate provides functionality to:
//! - Queue commands and execute them one at a time, in enqueue order
//! - Thread a single state value from each command's result into the next command
//! - Let a command inject a follow-up command or halt the run early
//! - Undo executed commands newest-first, each with the state its execute received
//! - Observe every lifecycle step through registered listeners
//!
//! ```ignore
//! let mut queue = CommandQueue::<i64>::new();
//! queue.enqueue(Increment)?;
//! queue.enqueue(Increment)?;
//!
//! let result = queue.execute(10, None).await?;
//! assert_eq!(result.into_state(), 12);
//!
//! queue.undo(None).await?;
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod engine;
pub mod port;

// Re-export commonly used types
pub use adapter::{EventLog, HALT, HaltCommand, LoggingListener};
pub use config::QueueConfig;
pub use domain::{CommandError, EventKind, EventRecord, QueueEvent, RunResult};
pub use engine::{CommandQueue, SharedQueue};
pub use port::{Command, ListenerId, Outcome, QueueListener};
