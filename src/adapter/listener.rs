//! Built-in queue listeners

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{Level, event};

use crate::{
    domain::{
        constant::listener,
        event::{EventKind, EventRecord, QueueEvent}
    },
    engine::queue::CommandQueue,
    port::listener::QueueListener
};

/// Listener that logs every lifecycle event through `tracing`
#[derive(Debug, Default)]
pub struct LoggingListener;

impl LoggingListener {
    pub fn new() -> Self {
        Self
    }
}

impl<S> QueueListener<S> for LoggingListener {
    fn on_event(&self, queue_event: &QueueEvent<'_, S>, queue: &CommandQueue<S>) {
        let command = queue_event.command().map(|c| c.name()).unwrap_or("-");
        event!(Level::INFO, event = listener::EVENT_OBSERVED, queue = %queue.name(),
               kind = %queue_event.kind(), command = %command,
               pending = queue.queue_length(), history = queue.history_length());
    }
}

/// Listener that keeps an owned record of every event it observes
///
/// Useful for telling how far a run got before it failed or halted.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Mutex<Vec<EventRecord>>
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first
    pub fn records(&self) -> Vec<EventRecord> {
        self.lock().clone()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.lock().iter().map(|r| r.kind).collect()
    }

    /// Names of the commands involved in events of `kind`, in order
    pub fn commands_for(&self, kind: EventKind) -> Vec<String> {
        self.lock().iter().filter(|r| r.kind == kind).filter_map(|r| r.command.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EventRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> QueueListener<S> for EventLog {
    fn on_event(&self, event: &QueueEvent<'_, S>, queue: &CommandQueue<S>) {
        self.lock().push(EventRecord::from_event(event, queue.name()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        domain::error::CommandError,
        port::command::{Command, Outcome}
    };

    #[derive(Debug)]
    struct Noop;

    #[async_trait]
    impl Command<i64> for Noop {
        async fn execute(&self, state: &i64) -> Result<Outcome<i64>, CommandError> {
            Ok(Outcome::Continue(*state))
        }

        async fn undo(&self, state: &i64) -> Result<i64, CommandError> {
            Ok(*state)
        }

        fn name(&self) -> &str {
            "noop"
        }
    }

    #[tokio::test]
    async fn test_event_log_records_full_lifecycle() {
        let log = Arc::new(EventLog::new());
        let mut queue = CommandQueue::<i64>::new();
        queue.subscribe(log.clone());

        queue.enqueue(Noop).unwrap();
        queue.execute_all().await.unwrap();
        queue.undo(None).await.unwrap();

        assert_eq!(log.kinds(), vec![
            EventKind::Enqueue,
            EventKind::BeforeExecute,
            EventKind::AfterExecute,
            EventKind::BeforeUndo,
            EventKind::AfterUndo
        ]);
        assert_eq!(log.commands_for(EventKind::AfterUndo), vec!["noop".to_string()]);
        assert!(log.records().iter().all(|r| r.queue == "default"));

        log.clear();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_logging_listener_does_not_disturb_run() {
        let mut queue = CommandQueue::<i64>::new();
        queue.subscribe(Arc::new(LoggingListener::new()));

        queue.enqueue(Noop).unwrap();
        let result = queue.execute(7, None).await.unwrap();

        assert_eq!(result.into_state(), 7);
        assert_eq!(queue.history_length(), 1);
    }
}
