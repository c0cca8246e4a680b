//! Stack configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{StackError, StackResult};

/// Capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration for a [`Stack`](crate::Stack)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackConfig {
    /// Number of element slots allocated at creation.
    ///
    /// For a static stack this is the capacity for its whole lifetime; a
    /// dynamic stack doubles from here.
    pub initial_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StackConfig {
    /// Configuration with the given initial capacity
    #[must_use]
    pub const fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Small stacks - the default 16 slots
    #[must_use]
    pub const fn small() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Large stacks - fewer reallocations for deep workloads
    #[must_use]
    pub const fn large() -> Self {
        Self::new(1024)
    }

    /// Set the initial capacity
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Validate configuration for element type `T`
    ///
    /// Capacity must be positive, and the whole buffer must fit in an
    /// allocation (at most `isize::MAX` bytes).
    pub fn validate<T>(&self) -> StackResult<()> {
        if self.initial_capacity == 0 {
            return Err(StackError::invalid_config(
                "initial_capacity must be greater than zero",
            ));
        }

        let elem = size_of::<T>();
        match elem.checked_mul(self.initial_capacity) {
            Some(bytes) if bytes <= isize::MAX.unsigned_abs() => Ok(()),
            _ => Err(StackError::invalid_config(&format!(
                "initial_capacity {} of {elem}-byte elements does not fit in an allocation",
                self.initial_capacity
            ))),
        }
    }
}
