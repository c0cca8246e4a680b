//! Per-stack usage counters
//!
//! Plain integers: a stack is never shared between threads without external
//! locking, so there is nothing to make atomic.

use core::fmt;

/// Lifetime counters for one stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackStats {
    pushes: u64,
    pops: u64,
    grows: u64,
    high_water_mark: usize,
}

impl StackStats {
    /// Successful pushes
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    /// Elements popped
    #[must_use]
    pub fn pops(&self) -> u64 {
        self.pops
    }

    /// Reallocations performed by growth
    #[must_use]
    pub fn grows(&self) -> u64 {
        self.grows
    }

    /// Largest size the stack has reached
    #[must_use]
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    pub(crate) fn record_push(&mut self, size: usize) {
        self.pushes += 1;
        self.high_water_mark = self.high_water_mark.max(size);
    }

    pub(crate) fn record_pop(&mut self) {
        self.pops += 1;
    }

    pub(crate) fn record_grow(&mut self) {
        self.grows += 1;
    }
}

impl fmt::Display for StackStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StackStats {{ pushes: {}, pops: {}, grows: {}, high_water_mark: {} }}",
            self.pushes, self.pops, self.grows, self.high_water_mark
        )
    }
}
