use crate::core::actions::render::completion::CompletionCounter;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::events::RenderSummary;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct RenderState {
    pub(crate) generation: u64,
    pub(crate) size: u32,
    pub(crate) started: Instant,
    pub(crate) counter: CompletionCounter,
    failure: Mutex<Option<RenderError>>,
    finished: Mutex<Option<RenderSummary>>,
    wake: Condvar,
}

impl RenderState {
    pub(crate) fn new(generation: u64, size: u32) -> Self {
        Self {
            generation,
            size,
            started: Instant::now(),
            counter: CompletionCounter::new(size),
            failure: Mutex::new(None),
            finished: Mutex::new(None),
            wake: Condvar::new(),
        }
    }

    /// Keeps the first failure; later ones are only logged by the caller.
    pub(crate) fn record_failure(&self, error: RenderError) {
        let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);

        if failure.is_none() {
            *failure = Some(error);
        }
    }

    pub(crate) fn complete(&self, summary: RenderSummary) {
        *self.finished.lock().unwrap_or_else(PoisonError::into_inner) = Some(summary);
        self.wake.notify_all();
    }

    fn outcome(&self, summary: RenderSummary) -> Result<RenderSummary, RenderError> {
        match self.failure.lock().unwrap_or_else(PoisonError::into_inner).clone() {
            Some(error) => Err(error),
            None => Ok(summary),
        }
    }
}

/// Tracks one render started by the scheduler.
///
/// Dropping the handle does not stop the render; rows always run to completion.
#[derive(Debug, Clone)]
pub struct RenderHandle {
    pub(crate) state: Arc<RenderState>,
}

impl RenderHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    #[must_use]
    pub fn rows_remaining(&self) -> u32 {
        self.state.counter.remaining()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state
            .finished
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Blocks until every row has been written.
    pub fn wait(&self) -> Result<RenderSummary, RenderError> {
        let guard = self.state.finished.lock().unwrap_or_else(PoisonError::into_inner);
        let guard = self
            .state
            .wake
            .wait_while(guard, |finished| finished.is_none())
            .unwrap_or_else(PoisonError::into_inner);

        let summary = (*guard).expect("wait_while only returns once the render finished");
        drop(guard);

        self.state.outcome(summary)
    }

    /// Like [`RenderHandle::wait`], but gives up after `timeout` and returns `None`.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Result<RenderSummary, RenderError>> {
        let guard = self.state.finished.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = self
            .state
            .wake
            .wait_timeout_while(guard, timeout, |finished| finished.is_none())
            .unwrap_or_else(PoisonError::into_inner);

        let summary = (*guard)?;
        drop(guard);

        Some(self.state.outcome(summary))
    }
}
