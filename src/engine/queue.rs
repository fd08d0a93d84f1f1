//! CommandQueue - the sequential execute/undo engine
//!
//! Pending commands run one at a time in FIFO order. Each successful execute
//! moves the command into history together with the state it was given, so
//! undo can replay history newest-first with the very same states.

use std::{
    collections::VecDeque,
    fmt::{self, Debug},
    sync::Arc
};

use tracing::{Level, event};

use crate::{
    config::QueueConfig,
    domain::{constant::command_queue, error::CommandError, event::QueueEvent, outcome::RunResult},
    port::{
        command::{Command, Outcome},
        listener::{ListenerId, QueueListener}
    }
};

/// A successfully executed command and the state its execute received
struct HistoryEntry<S> {
    command: Box<dyn Command<S>>,
    state:   S
}

/// Reversible, sequential command queue
pub struct CommandQueue<S> {
    config:    QueueConfig,
    pending:   VecDeque<Box<dyn Command<S>>>,
    history:   Vec<HistoryEntry<S>>,
    listeners: Vec<(ListenerId, Arc<dyn QueueListener<S>>)>
}

impl<S> CommandQueue<S> {
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Number of commands waiting to execute
    pub fn queue_length(&self) -> usize {
        self.pending.len()
    }

    /// Number of executed commands available for undo
    pub fn history_length(&self) -> usize {
        self.history.len()
    }

    /// Pending commands, next to execute first
    pub fn pending(&self) -> impl Iterator<Item = &dyn Command<S>> + '_ {
        self.pending.iter().map(|c| c.as_ref())
    }

    /// History entries, oldest first, with the state each execute received
    pub fn history(&self) -> impl Iterator<Item = (&dyn Command<S>, &S)> + '_ {
        self.history.iter().map(|entry| (entry.command.as_ref(), &entry.state))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<S> CommandQueue<S>
where
    S: Clone + Send + Sync + 'static
{
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Self {
        event!(Level::DEBUG, event = command_queue::QUEUE_CREATED, queue = %config.name);
        Self { config, pending: VecDeque::new(), history: Vec::new(), listeners: Vec::new() }
    }

    /// Register a listener; listeners are notified in registration order
    pub fn subscribe(&mut self, listener: Arc<dyn QueueListener<S>>) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.push((id, listener));
        event!(Level::DEBUG, event = command_queue::LISTENER_SUBSCRIBED, queue = %self.config.name, listener = %id);
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            event!(Level::DEBUG, event = command_queue::LISTENER_UNSUBSCRIBED, queue = %self.config.name,
                   listener = %id);
        }
        removed
    }

    /// Append a command so it runs after everything currently pending
    pub fn enqueue(&mut self, command: impl Command<S> + 'static) -> Result<(), CommandError> {
        self.enqueue_boxed(Box::new(command))
    }

    pub fn enqueue_boxed(&mut self, command: Box<dyn Command<S>>) -> Result<(), CommandError> {
        if command.is_halt() {
            event!(Level::WARN, event = command_queue::HALT_REJECTED, queue = %self.config.name);
            return Err(CommandError::HaltEnqueued);
        }

        event!(Level::DEBUG, event = command_queue::COMMAND_ENQUEUED, queue = %self.config.name,
               command = %command.name(), pending = self.pending.len() + 1);
        self.pending.push_back(command);

        if let Some(command) = self.pending.back() {
            self.emit(&QueueEvent::Enqueued { command: command.as_ref() });
        }
        Ok(())
    }

    /// Drop every pending command; history is left alone
    pub fn clear(&mut self) {
        event!(Level::DEBUG, event = command_queue::QUEUE_CLEARED, queue = %self.config.name,
               dropped = self.pending.len());
        self.pending.clear();
    }

    /// Execute up to `count` pending commands, threading `state` through them
    ///
    /// `None` means every command pending at the time of the call. A command
    /// injected by `Outcome::Inject` does not use up the budget: it runs in
    /// addition to the `count` commands requested. The run stops early when a
    /// command fails (the error is returned unchanged and the command is not
    /// recorded) or returns the halt signal.
    pub async fn execute(&mut self, state: S, count: Option<usize>) -> Result<RunResult<S>, CommandError> {
        let mut remaining = count.unwrap_or(self.pending.len());
        let mut state = state;

        event!(Level::DEBUG, event = command_queue::RUN_STARTED, queue = %self.config.name,
               budget = remaining, pending = self.pending.len());

        while remaining > 0 {
            let Some(command) = self.pending.pop_front() else {
                break;
            };

            event!(Level::DEBUG, event = command_queue::COMMAND_EXECUTING, queue = %self.config.name,
                   command = %command.name());
            self.emit(&QueueEvent::BeforeExecute { command: command.as_ref(), state: &state });

            let outcome = match command.execute(&state).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    event!(Level::ERROR, event = command_queue::COMMAND_FAILED, queue = %self.config.name,
                           command = %command.name(), error = %e);
                    return Err(e);
                }
            };

            event!(Level::DEBUG, event = command_queue::COMMAND_EXECUTED, queue = %self.config.name,
                   command = %command.name());
            self.history.push(HistoryEntry { command, state: state.clone() });
            if let Some(entry) = self.history.last() {
                self.emit(&QueueEvent::AfterExecute { command: entry.command.as_ref(), outcome: &outcome });
            }

            match outcome {
                Outcome::Continue(next) => state = next,
                Outcome::Inject(next) if !next.is_halt() => {
                    event!(Level::DEBUG, event = command_queue::COMMAND_INJECTED, queue = %self.config.name,
                           command = %next.name());
                    self.pending.push_front(next);
                    // the injected command runs on top of the requested budget
                    continue;
                }
                Outcome::Inject(_) | Outcome::Halt => {
                    event!(Level::DEBUG, event = command_queue::RUN_HALTED, queue = %self.config.name,
                           pending = self.pending.len());
                    self.emit(&QueueEvent::Halted);
                    return Ok(RunResult::Halted(state));
                }
            }

            remaining -= 1;
        }

        event!(Level::DEBUG, event = command_queue::RUN_COMPLETED, queue = %self.config.name,
               pending = self.pending.len(), history = self.history.len());
        Ok(RunResult::Completed(state))
    }

    /// Execute `count` steps starting from `state`
    pub async fn execute_step(&mut self, count: usize, state: S) -> Result<RunResult<S>, CommandError> {
        self.execute(state, Some(count)).await
    }

    /// Execute everything pending, starting from the default state
    pub async fn execute_all(&mut self) -> Result<RunResult<S>, CommandError>
    where
        S: Default
    {
        self.execute(S::default(), None).await
    }

    /// Undo up to `count` executed commands, newest first
    ///
    /// `None` means the whole history. Each command's `undo` receives the state
    /// its `execute` received. On failure the error is returned unchanged and
    /// the failing entry stays removed from history.
    pub async fn undo(&mut self, count: Option<usize>) -> Result<(), CommandError> {
        let mut remaining = count.unwrap_or(self.history.len());

        event!(Level::DEBUG, event = command_queue::UNDO_STARTED, queue = %self.config.name,
               budget = remaining, history = self.history.len());

        while remaining > 0 {
            let Some(HistoryEntry { command, state }) = self.history.pop() else {
                break;
            };

            event!(Level::DEBUG, event = command_queue::COMMAND_UNDOING, queue = %self.config.name,
                   command = %command.name());
            self.emit(&QueueEvent::BeforeUndo { command: command.as_ref(), state: &state });

            let result = match command.undo(&state).await {
                Ok(result) => result,
                Err(e) => {
                    event!(Level::ERROR, event = command_queue::UNDO_FAILED, queue = %self.config.name,
                           command = %command.name(), error = %e);
                    return Err(e);
                }
            };

            event!(Level::DEBUG, event = command_queue::COMMAND_UNDONE, queue = %self.config.name,
                   command = %command.name());
            self.emit(&QueueEvent::AfterUndo { command: command.as_ref(), result: &result });

            remaining -= 1;
        }

        event!(Level::DEBUG, event = command_queue::UNDO_COMPLETED, queue = %self.config.name,
               history = self.history.len());
        Ok(())
    }

    /// Undo the `count` most recently executed commands
    pub async fn undo_step(&mut self, count: usize) -> Result<(), CommandError> {
        self.undo(Some(count)).await
    }

    fn emit(&self, queue_event: &QueueEvent<'_, S>) {
        for (_, listener) in &self.listeners {
            listener.on_event(queue_event, self);
        }
    }
}

impl<S> Default for CommandQueue<S>
where
    S: Clone + Send + Sync + 'static
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Debug for CommandQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandQueue")
            .field("name", &self.config.name)
            .field("pending", &self.pending.len())
            .field("history", &self.history.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
