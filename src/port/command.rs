//! Base command trait that all commands must implement
//!
//! A command is a reversible unit of work. The queue hands every command the
//! current run state; whatever [`Outcome`] the command returns decides what the
//! queue does next:
//! 1. `Continue(state)` - `state` becomes the input of the next command
//! 2. `Inject(command)` - `command` runs immediately next, ahead of everything pending
//! 3. `Halt` - the run stops without error
//!
//! `execute` and `undo` have no default bodies: a command that does not
//! provide both is rejected by the compiler.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::error::CommandError;

/// Base trait that all commands must implement
#[async_trait]
pub trait Command<S>: Debug + Send + Sync {
    /// Perform the work for this command
    ///
    /// `state` is the value produced by the previously executed command, or the
    /// initial state handed to the queue for the first step.
    async fn execute(&self, state: &S) -> Result<Outcome<S>, CommandError>;

    /// Reverse the work done by `execute`
    ///
    /// `state` is the exact value the paired `execute` call received, not the
    /// value it returned. The returned value is only reported to listeners.
    async fn undo(&self, state: &S) -> Result<S, CommandError>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// True only for the halt sentinel
    fn is_halt(&self) -> bool {
        false
    }
}

/// Result of a successful [`Command::execute`]
#[derive(Debug)]
pub enum Outcome<S> {
    /// Thread this value into the next command
    Continue(S),
    /// Run this command next; it receives the same state the injecting command did
    Inject(Box<dyn Command<S>>),
    /// Stop the run here
    Halt
}

impl<S> Outcome<S> {
    pub fn inject(command: impl Command<S> + 'static) -> Self {
        Outcome::Inject(Box::new(command))
    }

    /// True for `Halt` and for an injected halt sentinel
    pub fn is_halt(&self) -> bool {
        match self {
            Outcome::Halt => true,
            Outcome::Inject(command) => command.is_halt(),
            Outcome::Continue(_) => false
        }
    }
}

impl<S> From<S> for Outcome<S> {
    fn from(state: S) -> Self {
        Outcome::Continue(state)
    }
}
