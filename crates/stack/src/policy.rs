//! Capacity policies
//!
//! The mode of a stack is part of its type: `Stack<T, Static>` never
//! reallocates, `Stack<T, Dynamic>` doubles its storage when a push would
//! overflow it. Both markers are zero-sized, so the policy costs nothing at
//! runtime.
//!
//! [`GrowthPolicy`] is sealed. Downstream crates can name it in bounds but
//! cannot add policies of their own, which keeps the capacity invariants of
//! [`Stack`](crate::Stack) closed over the two modes below.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod private {
    /// Private sealing trait - cannot be named or implemented outside this module
    pub trait Sealed {}

    impl Sealed for super::Static {}
    impl Sealed for super::Dynamic {}
}

/// Runtime view of a stack's capacity policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Capacity is fixed at creation
    Static,
    /// Capacity doubles when a push would exceed it
    Dynamic,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Capacity growth contract for a stack type
///
/// This trait is **sealed**; see the module docs.
pub trait GrowthPolicy: private::Sealed {
    /// Mode this policy represents
    const MODE: Mode;

    /// What to do when a push finds all `current` slots in use.
    fn next_capacity(current: usize) -> Growth;
}

/// Answer of a [`GrowthPolicy`] to a full stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// The policy forbids growth
    Fixed,
    /// Reallocate to this many slots
    To(usize),
    /// Growth is allowed but the next capacity does not fit in `usize`
    Overflow,
}

/// Fixed-capacity policy (the default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Static;

/// Doubling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dynamic;

impl GrowthPolicy for Static {
    const MODE: Mode = Mode::Static;

    #[inline]
    fn next_capacity(_current: usize) -> Growth {
        Growth::Fixed
    }
}

impl GrowthPolicy for Dynamic {
    const MODE: Mode = Mode::Dynamic;

    #[inline]
    fn next_capacity(current: usize) -> Growth {
        current.checked_mul(2).map_or(Growth::Overflow, Growth::To)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_never_grows() {
        assert_eq!(Static::next_capacity(16), Growth::Fixed);
        assert_eq!(Static::next_capacity(usize::MAX), Growth::Fixed);
    }

    #[test]
    fn test_dynamic_doubles() {
        assert_eq!(Dynamic::next_capacity(16), Growth::To(32));
        assert_eq!(Dynamic::next_capacity(32), Growth::To(64));
        assert_eq!(Dynamic::next_capacity(1), Growth::To(2));
    }

    #[test]
    fn test_dynamic_overflow() {
        assert_eq!(Dynamic::next_capacity(usize::MAX / 2 + 1), Growth::Overflow);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Static::MODE.to_string(), "static");
        assert_eq!(Dynamic::MODE.to_string(), "dynamic");
    }
}
