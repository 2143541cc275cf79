use std::sync::atomic::{AtomicU32, Ordering};

/// Counts outstanding row tasks.
///
/// Each task calls [`CompletionCounter::row_done`] once. Exactly one of those
/// calls, the one that takes the count to zero, returns `true`, whatever
/// order the rows finish in. The decrement is `AcqRel`, so everything every
/// row wrote before its decrement is visible to whoever sees `true`.
#[derive(Debug)]
pub struct CompletionCounter {
    remaining: AtomicU32,
}

impl CompletionCounter {
    #[must_use]
    pub fn new(rows: u32) -> Self {
        Self {
            remaining: AtomicU32::new(rows),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    /// Returns `true` only for the decrement that finishes the render.
    /// Calls after the count hit zero are ignored and return `false`.
    pub fn row_done(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok_and(|previous| previous == 1)
    }
}
