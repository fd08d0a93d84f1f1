//! The halt sentinel
//!
//! Returning [`Outcome::Halt`] is the usual way to stop a run. The sentinel
//! exists for commands that want to hand back a command value: injecting
//! [`HALT`] is treated exactly like `Outcome::Halt`. The sentinel itself is
//! never run, so its `execute` and `undo` always fail.

use async_trait::async_trait;

use crate::{
    domain::error::CommandError,
    port::command::{Command, Outcome}
};

/// Control sentinel that stops a run when returned from `execute`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HaltCommand;

/// The process-wide halt sentinel
pub static HALT: HaltCommand = HaltCommand;

#[async_trait]
impl<S: Send + Sync> Command<S> for HaltCommand {
    async fn execute(&self, _state: &S) -> Result<Outcome<S>, CommandError> {
        Err(CommandError::HaltNotExecutable)
    }

    async fn undo(&self, _state: &S) -> Result<S, CommandError> {
        Err(CommandError::HaltNotUndoable)
    }

    fn name(&self) -> &str {
        "halt"
    }

    fn is_halt(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_halt_sentinel_refuses_to_execute() {
        let result = Command::<i64>::execute(&HALT, &1).await;
        assert_eq!(result.unwrap_err(), CommandError::HaltNotExecutable);
    }

    #[tokio::test]
    async fn test_halt_sentinel_refuses_to_undo() {
        let result = Command::<i64>::undo(&HALT, &1).await;
        assert_eq!(result.unwrap_err(), CommandError::HaltNotUndoable);
    }

    #[test]
    fn test_injected_sentinel_counts_as_halt() {
        let outcome: Outcome<i64> = Outcome::inject(HALT);
        assert!(outcome.is_halt());
        assert!(Outcome::<i64>::Halt.is_halt());
        assert!(!Outcome::Continue(3_i64).is_halt());
    }
}
