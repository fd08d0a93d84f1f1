//! Lifecycle events published by the queue
//!
//! [`QueueEvent`] is the borrowed form handed to listeners while the queue is
//! running. [`EventRecord`] is an owned, serializable snapshot of one event for
//! listeners that keep an audit trail.

use std::fmt::{self, Debug, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::port::command::{Command, Outcome};

/// A lifecycle notification, borrowed from the queue for the duration of the callback
pub enum QueueEvent<'a, S> {
    /// A command was appended to the pending queue
    Enqueued { command: &'a dyn Command<S> },
    /// A command is about to execute with `state`
    BeforeExecute { command: &'a dyn Command<S>, state: &'a S },
    /// A command executed successfully and was recorded in history
    AfterExecute { command: &'a dyn Command<S>, outcome: &'a Outcome<S> },
    /// A halt signal stopped the run
    Halted,
    /// A command is about to be undone with the state its execute received
    BeforeUndo { command: &'a dyn Command<S>, state: &'a S },
    /// A command was undone successfully
    AfterUndo { command: &'a dyn Command<S>, result: &'a S }
}

impl<'a, S> QueueEvent<'a, S> {
    pub fn kind(&self) -> EventKind {
        match self {
            QueueEvent::Enqueued { .. } => EventKind::Enqueue,
            QueueEvent::BeforeExecute { .. } => EventKind::BeforeExecute,
            QueueEvent::AfterExecute { .. } => EventKind::AfterExecute,
            QueueEvent::Halted => EventKind::Halted,
            QueueEvent::BeforeUndo { .. } => EventKind::BeforeUndo,
            QueueEvent::AfterUndo { .. } => EventKind::AfterUndo
        }
    }

    /// The command the event is about, if any
    pub fn command(&self) -> Option<&'a dyn Command<S>> {
        match self {
            QueueEvent::Enqueued { command }
            | QueueEvent::BeforeExecute { command, .. }
            | QueueEvent::AfterExecute { command, .. }
            | QueueEvent::BeforeUndo { command, .. }
            | QueueEvent::AfterUndo { command, .. } => Some(*command),
            QueueEvent::Halted => None
        }
    }
}

impl<S: Debug> Debug for QueueEvent<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueEvent::Enqueued { command } => f.debug_struct("Enqueued").field("command", command).finish(),
            QueueEvent::BeforeExecute { command, state } => {
                f.debug_struct("BeforeExecute").field("command", command).field("state", state).finish()
            }
            QueueEvent::AfterExecute { command, outcome } => {
                f.debug_struct("AfterExecute").field("command", command).field("outcome", outcome).finish()
            }
            QueueEvent::Halted => f.write_str("Halted"),
            QueueEvent::BeforeUndo { command, state } => {
                f.debug_struct("BeforeUndo").field("command", command).field("state", state).finish()
            }
            QueueEvent::AfterUndo { command, result } => {
                f.debug_struct("AfterUndo").field("command", command).field("result", result).finish()
            }
        }
    }
}

/// Discriminant of a [`QueueEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Enqueue,
    BeforeExecute,
    AfterExecute,
    Halted,
    BeforeUndo,
    AfterUndo
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Enqueue => "enqueue",
            EventKind::BeforeExecute => "before execute",
            EventKind::AfterExecute => "after execute",
            EventKind::Halted => "halted",
            EventKind::BeforeUndo => "before undo",
            EventKind::AfterUndo => "after undo"
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned snapshot of a lifecycle event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique event identifier
    pub event_id:  String,
    /// Time the listener observed the event
    pub timestamp: DateTime<Utc>,
    /// Event discriminant
    pub kind:      EventKind,
    /// Name of the command involved, `None` for [`EventKind::Halted`]
    pub command:   Option<String>,
    /// Name of the queue that published the event
    pub queue:     String
}

impl EventRecord {
    pub fn new(kind: EventKind, command: Option<String>, queue: impl Into<String>) -> Self {
        Self { event_id: Uuid::new_v4().to_string(), timestamp: Utc::now(), kind, command, queue: queue.into() }
    }

    pub fn from_event<S>(event: &QueueEvent<'_, S>, queue: impl Into<String>) -> Self {
        Self::new(event.kind(), event.command().map(|c| c.name().to_string()), queue)
    }
}
