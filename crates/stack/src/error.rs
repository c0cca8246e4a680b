//! Standalone error types for strata-stack
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.
//!
//! Only recoverable failures live here. Contract violations (popping an
//! empty stack, touching a destroyed one) are caller bugs and panic instead.

use core::alloc::Layout;
use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::{error, warn};

// ============================================================================
// Main Error Type
// ============================================================================

/// Stack operation errors
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack allocation failed: {size} bytes with {align} byte alignment")]
    AllocationFailed { size: usize, align: usize },

    #[error("Size overflow during operation: {operation}")]
    SizeOverflow { operation: String },

    #[error("Stack capacity exceeded: all {capacity} slots are in use")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl StackError {
    /// Check if error is retryable
    ///
    /// An allocation may succeed with a smaller request, and a full static
    /// stack accepts pushes again once something is popped.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::AllocationFailed { .. } | Self::CapacityExceeded { .. }
        )
    }

    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AllocationFailed { .. } => "STACK:ALLOC:FAILED",
            Self::SizeOverflow { .. } => "STACK:ALLOC:OVERFLOW",
            Self::CapacityExceeded { .. } => "STACK:CAPACITY:EXCEEDED",
            Self::InvalidConfig { .. } => "STACK:CONFIG:INVALID",
        }
    }

    // ------------------------------------------------------------------------
    // Convenience constructors
    // ------------------------------------------------------------------------

    /// Create allocation failed error
    pub fn allocation_failed(size: usize, align: usize) -> Self {
        #[cfg(feature = "logging")]
        error!(size, align, "stack allocation failed");

        Self::AllocationFailed { size, align }
    }

    /// Create allocation failed error from layout
    pub fn allocation_failed_with_layout(layout: Layout) -> Self {
        Self::allocation_failed(layout.size(), layout.align())
    }

    /// Create size overflow error
    pub fn size_overflow(operation: &str) -> Self {
        Self::SizeOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create capacity exceeded error
    pub fn capacity_exceeded(capacity: usize) -> Self {
        #[cfg(feature = "logging")]
        warn!(capacity, "push rejected: static stack is full");

        Self::CapacityExceeded { capacity }
    }

    /// Create invalid config error
    pub fn invalid_config(reason: &str) -> Self {
        Self::InvalidConfig {
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result type for stack operations
pub type StackResult<T> = core::result::Result<T, StackError>;

/// Generic result type alias
pub type Result<T> = StackResult<T>;
