//! # strata-stack
//!
//! Allocation-controlled LIFO stacks for low-level code.
//!
//! A [`Stack<T, P>`](Stack) stores values of any `T` in one contiguous block
//! from the system allocator. The capacity policy `P` is chosen in the type:
//! - [`Static`] (default): capacity is fixed at creation, and a push onto a
//!   full stack is rejected with [`StackError::CapacityExceeded`]
//! - [`Dynamic`]: a push onto a full stack first doubles the storage
//!   (16 → 32 → 64 → …); storage never shrinks
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_stack::prelude::*;
//!
//! // Growable stack with the default capacity of 16
//! let mut names: DynamicStack<String> = DynamicStack::new()?;
//! for i in 0..40 {
//!     names.push(format!("item {i}"))?;
//! }
//! assert_eq!(names.capacity(), 64);
//! assert_eq!(names.pop(), "item 39");
//!
//! // Fixed-capacity stack
//! let mut ints = StaticStack::with_capacity(32)?;
//! ints.push_all([8, 100, 1, 3, 4])?;
//! assert_eq!(ints.pop(), 4);
//! assert_eq!(ints.pop(), 3);
//! assert_eq!(ints.size(), 3);
//! # Ok::<(), StackError>(())
//! ```
//!
//! ## Features
//!
//! - `logging` (default): `tracing` events for creation, growth, destruction
//!   and errors
//! - `stats`: per-stack counters via [`Stack::stats`]
//! - `serde`: `Serialize`/`Deserialize` for [`StackConfig`] and [`Mode`]
//! - `full`: all of the above
//!
//! ## Contract violations
//!
//! Popping or peeking an empty stack and using a stack after
//! [`Stack::destroy`] are caller bugs. They panic rather than return errors;
//! [`Stack::try_pop`] and [`Stack::try_peek`] are the non-panicking forms.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(unsafe_code)] // Raw storage management requires unsafe
#![warn(rust_2018_idioms)]

// Error types
pub mod error;

// Core modules
pub mod config;
pub mod policy;
mod raw;
pub mod stack;
#[cfg(feature = "stats")]
#[cfg_attr(docsrs, doc(cfg(feature = "stats")))]
pub mod stats;
pub mod visitor;

pub use crate::config::{DEFAULT_CAPACITY, StackConfig};
pub use crate::error::{StackError, StackResult};
pub use crate::policy::{Dynamic, GrowthPolicy, Mode, Static};
pub use crate::stack::{DynamicStack, PushOutcome, Stack, State, StaticStack};
#[cfg(feature = "stats")]
pub use crate::stats::StackStats;
pub use crate::visitor::Visitor;

pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::config::{DEFAULT_CAPACITY, StackConfig};
    pub use crate::error::{StackError, StackResult};
    pub use crate::policy::{Dynamic, GrowthPolicy, Mode, Static};
    pub use crate::stack::{DynamicStack, PushOutcome, Stack, State, StaticStack};
    pub use crate::visitor::Visitor;
}
