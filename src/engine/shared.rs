//! SharedQueue - a cloneable handle that serializes access to one queue
//!
//! `CommandQueue` is not meant to be driven by several callers at once. The
//! handle holds the lock for the whole of every operation, so concurrent
//! callers are run one after another instead of interleaving mid-run.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{Level, event};

use super::queue::CommandQueue;
use crate::{
    domain::{constant::shared_queue, error::CommandError, outcome::RunResult},
    port::{
        command::Command,
        listener::{ListenerId, QueueListener}
    }
};

/// Cloneable, task-safe handle to a [`CommandQueue`]
pub struct SharedQueue<S> {
    queue: Arc<Mutex<CommandQueue<S>>>
}

impl<S> Clone for SharedQueue<S> {
    fn clone(&self) -> Self {
        Self { queue: self.queue.clone() }
    }
}

impl<S> SharedQueue<S>
where
    S: Clone + Send + Sync + 'static
{
    pub fn new(queue: CommandQueue<S>) -> Self {
        event!(Level::DEBUG, event = shared_queue::HANDLE_CREATED, queue = %queue.name());
        Self { queue: Arc::new(Mutex::new(queue)) }
    }

    /// Exclusive access for a sequence of operations that must not interleave
    pub async fn lock(&self) -> MutexGuard<'_, CommandQueue<S>> {
        self.queue.lock().await
    }

    pub async fn enqueue(&self, command: impl Command<S> + 'static) -> Result<(), CommandError> {
        self.lock().await.enqueue(command)
    }

    pub async fn clear(&self) {
        self.lock().await.clear();
    }

    pub async fn execute(&self, state: S, count: Option<usize>) -> Result<RunResult<S>, CommandError> {
        self.lock().await.execute(state, count).await
    }

    pub async fn execute_step(&self, count: usize, state: S) -> Result<RunResult<S>, CommandError> {
        self.lock().await.execute_step(count, state).await
    }

    pub async fn undo(&self, count: Option<usize>) -> Result<(), CommandError> {
        self.lock().await.undo(count).await
    }

    pub async fn undo_step(&self, count: usize) -> Result<(), CommandError> {
        self.lock().await.undo_step(count).await
    }

    pub async fn queue_length(&self) -> usize {
        self.lock().await.queue_length()
    }

    pub async fn history_length(&self) -> usize {
        self.lock().await.history_length()
    }

    pub async fn subscribe(&self, listener: Arc<dyn QueueListener<S>>) -> ListenerId {
        self.lock().await.subscribe(listener)
    }

    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        self.lock().await.unsubscribe(id)
    }
}

impl<S> From<CommandQueue<S>> for SharedQueue<S>
where
    S: Clone + Send + Sync + 'static
{
    fn from(queue: CommandQueue<S>) -> Self {
        Self::new(queue)
    }
}
