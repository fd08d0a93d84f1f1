use std::fmt::{self, Display};

use uuid::Uuid;

use crate::{domain::event::QueueEvent, engine::queue::CommandQueue};

/// Trait for observing queue lifecycle events
///
/// Listeners are passive: they are called synchronously, in registration
/// order, and cannot influence the run. A listener that panics takes the
/// caller down with it.
pub trait QueueListener<S>: Send + Sync {
    /// Handle an event published by `queue`
    fn on_event(&self, event: &QueueEvent<'_, S>, queue: &CommandQueue<S>);
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
