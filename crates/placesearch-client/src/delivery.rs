//! Background execution of one query and single delivery of its outcome.
//!
//! [`spawn_query`] moves the pipeline onto a Tokio task. The task reports a
//! `Began` event before it touches the network, then exactly one `Finished`
//! event carrying the [`OperationOutcome`]. The returned [`QueryTask`] is the
//! caller's end: awaiting [`QueryTask::deliver`] runs the callbacks on the
//! caller's own task, in order, once each.
//!
//! Dropping a `QueryTask` does not cancel the work; the outcome is simply
//! discarded when it arrives.

use std::future::Future;

use tokio::sync::mpsc;

use crate::error::{OperationOutcome, PlacesError, TransportError};

/// Lifecycle of a single query. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    Started,
    Succeeded,
    Failed,
    Delivered,
}

impl TaskState {
    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub fn can_advance_to(self, next: TaskState) -> bool {
        matches!(
            (self, next),
            (TaskState::Idle, TaskState::Started)
                | (TaskState::Started, TaskState::Succeeded | TaskState::Failed)
                | (TaskState::Succeeded | TaskState::Failed, TaskState::Delivered)
        )
    }
}

enum TaskEvent<T> {
    Began,
    Finished(OperationOutcome<T>),
}

/// Caller-side handle of a query running in the background. Single use.
pub struct QueryTask<T> {
    label: &'static str,
    events: mpsc::UnboundedReceiver<TaskEvent<T>>,
    state: TaskState,
}

/// Runs `work` on a background Tokio task and returns the handle its
/// outcome will be delivered through.
///
/// `work` is not polled until the began signal has been sent.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn spawn_query<T, Fut>(label: &'static str, work: Fut) -> QueryTask<T>
where
    T: Send + 'static,
    Fut: Future<Output = OperationOutcome<T>> + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let _ = tx.send(TaskEvent::Began);
        let outcome = work.await;
        if tx.send(TaskEvent::Finished(outcome)).is_err() {
            tracing::debug!(task = label, "query handle dropped; discarding outcome");
        }
    });
    QueryTask {
        label,
        events: rx,
        state: TaskState::Idle,
    }
}

impl<T> QueryTask<T> {
    #[must_use]
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Waits for the query and hands its result to the callbacks.
    ///
    /// `on_begin` fires exactly once, before `on_complete`; `on_complete`
    /// fires exactly once with the outcome, whether it succeeded or not.
    /// Returns the final state, always [`TaskState::Delivered`].
    pub async fn deliver<B, C>(mut self, on_begin: B, on_complete: C) -> TaskState
    where
        B: FnOnce(),
        C: FnOnce(OperationOutcome<T>),
    {
        let outcome = self.receive(on_begin).await;
        on_complete(outcome);
        self.advance(TaskState::Delivered);
        self.state
    }

    /// Waits for the query and returns its outcome directly.
    ///
    /// # Errors
    ///
    /// Returns the query's [`PlacesError`] when it failed, or
    /// [`TransportError::TaskAborted`] if the background task ended without
    /// an outcome.
    pub async fn outcome(mut self) -> OperationOutcome<T> {
        let outcome = self.receive(|| {}).await;
        self.advance(TaskState::Delivered);
        outcome
    }

    async fn receive<B: FnOnce()>(&mut self, on_begin: B) -> OperationOutcome<T> {
        let mut on_begin = Some(on_begin);
        let outcome = loop {
            match self.events.recv().await {
                Some(TaskEvent::Began) => self.fire_began(&mut on_begin),
                Some(TaskEvent::Finished(outcome)) => break outcome,
                None => {
                    tracing::error!(task = self.label, "query task ended without an outcome");
                    break Err(PlacesError::Transport(TransportError::TaskAborted(format!(
                        "{} task ended without an outcome",
                        self.label
                    ))));
                }
            }
        };

        // The terminal signal never overtakes the began signal.
        self.fire_began(&mut on_begin);
        self.advance(if outcome.is_ok() {
            TaskState::Succeeded
        } else {
            TaskState::Failed
        });
        outcome
    }

    fn fire_began<B: FnOnce()>(&mut self, on_begin: &mut Option<B>) {
        if let Some(on_begin) = on_begin.take() {
            self.advance(TaskState::Started);
            on_begin();
        }
    }

    fn advance(&mut self, next: TaskState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal query state transition {:?} -> {next:?}",
            self.state
        );
        self.state = next;
    }
}
