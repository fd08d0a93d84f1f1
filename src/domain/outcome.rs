/// What a call to [`CommandQueue::execute`](crate::engine::CommandQueue::execute) ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult<S> {
    /// The budget ran out or the pending queue drained; carries the last produced state
    Completed(S),
    /// A command returned the halt signal; carries the state that command was given
    Halted(S)
}

impl<S> RunResult<S> {
    pub fn state(&self) -> &S {
        match self {
            RunResult::Completed(state) | RunResult::Halted(state) => state
        }
    }

    pub fn into_state(self) -> S {
        match self {
            RunResult::Completed(state) | RunResult::Halted(state) => state
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, RunResult::Halted(_))
    }
}
