//! Structured event names for internal monitoring and debugging

/// CommandQueue events
pub mod command_queue {
    pub const QUEUE_CREATED: &str = "queue.created";
    pub const QUEUE_CLEARED: &str = "queue.cleared";
    pub const COMMAND_ENQUEUED: &str = "command.enqueued";
    pub const HALT_REJECTED: &str = "halt.rejected";
    pub const RUN_STARTED: &str = "run.started";
    pub const COMMAND_EXECUTING: &str = "command.executing";
    pub const COMMAND_EXECUTED: &str = "command.executed";
    pub const COMMAND_FAILED: &str = "command.failed";
    pub const COMMAND_INJECTED: &str = "command.injected";
    pub const RUN_HALTED: &str = "run.halted";
    pub const RUN_COMPLETED: &str = "run.completed";
    pub const UNDO_STARTED: &str = "undo.started";
    pub const COMMAND_UNDOING: &str = "command.undoing";
    pub const COMMAND_UNDONE: &str = "command.undone";
    pub const UNDO_FAILED: &str = "undo.failed";
    pub const UNDO_COMPLETED: &str = "undo.completed";
    pub const LISTENER_SUBSCRIBED: &str = "listener.subscribed";
    pub const LISTENER_UNSUBSCRIBED: &str = "listener.unsubscribed";
}

/// SharedQueue events
pub mod shared_queue {
    pub const HANDLE_CREATED: &str = "handle.created";
}

/// Built-in listener events
pub mod listener {
    pub const EVENT_OBSERVED: &str = "event.observed";
}

/// Configuration events
pub mod config {
    pub const CONFIG_LOADED: &str = "config.loaded";
}
