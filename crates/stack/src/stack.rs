//! The LIFO container
//!
//! # Safety
//!
//! `Stack` keeps its elements in a [`RawBuf`] and tracks how many leading
//! slots are initialized in `len`:
//! - slots `0..len` hold live values owned by the stack
//! - slots `len..capacity` are uninitialized and never read
//! - `len <= capacity` at all times, and `len == 0` once destroyed
//!
//! `pop` moves the top value out after shrinking `len`, so the vacated slot
//! is treated as uninitialized again and never dropped twice.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use core::slice;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

use crate::config::StackConfig;
use crate::error::{StackError, StackResult};
use crate::policy::{Dynamic, Growth, GrowthPolicy, Mode, Static};
use crate::raw::RawBuf;
#[cfg(feature = "stats")]
use crate::stats::StackStats;
use crate::visitor::Visitor;

/// Fixed-capacity stack
pub type StaticStack<T> = Stack<T, Static>;

/// Stack whose capacity doubles on demand
pub type DynamicStack<T> = Stack<T, Dynamic>;

/// What a successful push did to the storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The value fit in the existing storage
    Pushed,
    /// The storage was reallocated before the value was stored
    GrewTo {
        /// Capacity after growth
        capacity: usize,
    },
}

impl PushOutcome {
    /// Whether this push reallocated the storage
    #[must_use]
    pub fn grew(&self) -> bool {
        matches!(self, Self::GrewTo { .. })
    }
}

/// Lifecycle state of a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Storage is allocated; every operation is available
    Live,
    /// Storage has been released by [`Stack::destroy`]
    Destroyed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// LIFO stack over `T` with capacity policy `P`
///
/// # Example
/// ```
/// use strata_stack::{DynamicStack, StaticStack, StackError};
///
/// let mut stack = DynamicStack::new()?;
/// for i in 0..40 {
///     stack.push(i)?;
/// }
/// assert_eq!(stack.capacity(), 64);
/// assert_eq!(stack.pop(), 39);
///
/// let mut fixed = StaticStack::with_capacity(2)?;
/// fixed.push('a')?;
/// fixed.push('b')?;
/// assert!(matches!(fixed.push('c'), Err(StackError::CapacityExceeded { capacity: 2 })));
/// # Ok::<(), StackError>(())
/// ```
pub struct Stack<T, P: GrowthPolicy = Static> {
    buf: RawBuf<T>,
    len: usize,
    #[cfg(feature = "stats")]
    stats: StackStats,
    _policy: PhantomData<P>,
}

impl<T, P: GrowthPolicy> Stack<T, P> {
    /// Create a stack with the default capacity of 16
    pub fn new() -> StackResult<Self> {
        Self::with_config(StackConfig::default())
    }

    /// Create a stack with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> StackResult<Self> {
        Self::with_config(StackConfig::new(capacity))
    }

    /// Create a stack from a configuration
    pub fn with_config(config: StackConfig) -> StackResult<Self> {
        config.validate::<T>()?;
        let buf = RawBuf::allocate(config.initial_capacity)?;

        #[cfg(feature = "logging")]
        debug!(mode = %P::MODE, capacity = config.initial_capacity, "stack created");

        Ok(Self {
            buf,
            len: 0,
            #[cfg(feature = "stats")]
            stats: StackStats::default(),
            _policy: PhantomData,
        })
    }

    /// Drop every live element and release the storage
    ///
    /// Idempotent. Afterwards the stack reports [`State::Destroyed`], size
    /// and capacity read zero, and `push`/`pop`/`peek`/`for_each` panic.
    /// Take ownership of anything you still need (via `pop`, or by
    /// swapping it out in `for_each`) before calling this.
    pub fn destroy(&mut self) {
        if !self.buf.is_allocated() {
            return;
        }

        self.clear();
        self.buf.release();

        #[cfg(feature = "logging")]
        debug!(mode = %P::MODE, "stack destroyed");
    }

    /// Push `value` on top
    ///
    /// A dynamic stack that is full first doubles its storage; a static one
    /// rejects the value with [`StackError::CapacityExceeded`]. On error the
    /// stack is left exactly as it was.
    ///
    /// # Panics
    ///
    /// If the stack has been destroyed.
    pub fn push(&mut self, value: T) -> StackResult<PushOutcome> {
        self.assert_live("push");

        let mut outcome = PushOutcome::Pushed;
        if self.is_full() {
            let capacity = self.buf.capacity();
            match P::next_capacity(capacity) {
                Growth::Fixed => return Err(StackError::capacity_exceeded(capacity)),
                Growth::Overflow => return Err(StackError::size_overflow("stack growth")),
                Growth::To(new_capacity) => {
                    self.buf.grow(new_capacity)?;

                    #[cfg(feature = "logging")]
                    trace!(from = capacity, to = new_capacity, "stack storage grown");
                    #[cfg(feature = "stats")]
                    self.stats.record_grow();

                    outcome = PushOutcome::GrewTo {
                        capacity: new_capacity,
                    };
                }
            }
        }

        let base = self.live_ptr("push");
        // SAFETY: len < capacity after the growth check, so slot `len` is in
        // bounds and uninitialized.
        unsafe { base.as_ptr().add(self.len).write(value) };
        self.len += 1;

        #[cfg(feature = "stats")]
        self.stats.record_push(self.len);

        Ok(outcome)
    }

    /// Push every value from `values`, bottom first
    ///
    /// Stops at the first error; values pushed before it stay on the stack.
    /// Returns the last growth that happened, or [`PushOutcome::Pushed`].
    pub fn push_all<I>(&mut self, values: I) -> StackResult<PushOutcome>
    where
        I: IntoIterator<Item = T>,
    {
        let mut outcome = PushOutcome::Pushed;
        for value in values {
            let pushed = self.push(value)?;
            if pushed.grew() {
                outcome = pushed;
            }
        }
        Ok(outcome)
    }

    /// Remove and return the top element
    ///
    /// # Panics
    ///
    /// If the stack is empty or destroyed.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        self.assert_live("pop");
        match self.try_pop() {
            Some(value) => value,
            None => panic!("pop called on an empty stack"),
        }
    }

    /// Remove and return the top element, or `None` when empty
    pub fn try_pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let base = self.buf.ptr()?;
        self.len -= 1;

        #[cfg(feature = "stats")]
        self.stats.record_pop();

        // SAFETY: slot `len` held the initialized top element; len has
        // already been lowered, so ownership moves to the caller.
        Some(unsafe { base.as_ptr().add(self.len).read() })
    }

    /// Borrow the top element
    ///
    /// # Panics
    ///
    /// If the stack is empty or destroyed.
    #[track_caller]
    pub fn peek(&self) -> &T {
        self.assert_live("peek");
        match self.try_peek() {
            Some(top) => top,
            None => panic!("peek called on an empty stack"),
        }
    }

    /// Borrow the top element, or `None` when empty
    pub fn try_peek(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutably borrow the top element, or `None` when empty
    pub fn try_peek_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of live elements; same as [`len`](Self::len)
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Index of the top element, `-1` when empty
    #[inline]
    pub fn top(&self) -> isize {
        self.len as isize - 1
    }

    /// Number of element slots currently allocated
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `size == capacity`: the next push grows a dynamic stack and is
    /// rejected by a static one
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.capacity()
    }

    /// Capacity policy of this stack type
    #[inline]
    pub fn mode(&self) -> Mode {
        P::MODE
    }

    #[inline]
    pub fn state(&self) -> State {
        if self.buf.is_allocated() {
            State::Live
        } else {
            State::Destroyed
        }
    }

    /// Whether the stack still owns storage
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.buf.is_allocated()
    }

    /// Drop all live elements, keeping the storage
    pub fn clear(&mut self) {
        let live = ptr::from_mut(self.as_mut_slice());
        self.len = 0;
        // SAFETY: `live` covers exactly the initialized slots. len is zero
        // before dropping so a panicking Drop cannot cause a double drop.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Live elements, bottom first
    pub fn as_slice(&self) -> &[T] {
        match self.buf.ptr() {
            // SAFETY: the first len slots are initialized and owned by self
            Some(base) => unsafe { slice::from_raw_parts(base.as_ptr(), self.len) },
            None => &[],
        }
    }

    /// Live elements, bottom first
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.buf.ptr() {
            // SAFETY: as in as_slice; &mut self guarantees exclusivity
            Some(base) => unsafe { slice::from_raw_parts_mut(base.as_ptr(), self.len) },
            None => &mut [],
        }
    }

    /// Iterate bottom to top
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate bottom to top with mutable access
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Call `visitor` on every element, bottom first, passing `context` along
    ///
    /// Every element is visited; there is no early exit. The visitor may
    /// modify elements in place.
    ///
    /// # Panics
    ///
    /// If the stack has been destroyed.
    ///
    /// # Example
    /// ```
    /// use strata_stack::StaticStack;
    ///
    /// let mut stack = StaticStack::with_capacity(8)?;
    /// stack.push_all([1, 2, 3])?;
    ///
    /// let mut seen = Vec::new();
    /// stack.for_each(&mut seen, |item, seen| {
    ///     seen.push(*item);
    ///     *item *= 10;
    /// });
    ///
    /// assert_eq!(seen, [1, 2, 3]);
    /// assert_eq!(*stack.peek(), 30);
    /// # Ok::<(), strata_stack::StackError>(())
    /// ```
    #[track_caller]
    pub fn for_each<C, F>(&mut self, context: &mut C, mut visitor: F)
    where
        C: ?Sized,
        F: FnMut(&mut T, &mut C),
    {
        self.visit(context, &mut visitor);
    }

    /// Like [`for_each`](Self::for_each), for a named [`Visitor`]
    #[track_caller]
    pub fn visit<C, V>(&mut self, context: &mut C, visitor: &mut V)
    where
        C: ?Sized,
        V: Visitor<T, C> + ?Sized,
    {
        self.assert_live("for_each");
        for item in self.as_mut_slice() {
            visitor.visit(item, context);
        }
    }

    /// Usage counters for this stack
    #[cfg(feature = "stats")]
    #[cfg_attr(docsrs, doc(cfg(feature = "stats")))]
    pub fn stats(&self) -> &StackStats {
        &self.stats
    }

    #[inline]
    #[track_caller]
    fn assert_live(&self, operation: &str) {
        assert!(
            self.buf.is_allocated(),
            "{operation} called on a destroyed stack"
        );
    }

    #[inline]
    #[track_caller]
    fn live_ptr(&self, operation: &str) -> NonNull<T> {
        match self.buf.ptr() {
            Some(base) => base,
            None => panic!("{operation} called on a destroyed stack"),
        }
    }
}

impl<T, P: GrowthPolicy> Drop for Stack<T, P> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T: fmt::Debug, P: GrowthPolicy> fmt::Debug for Stack<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("mode", &P::MODE)
            .field("state", &self.state())
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<'a, T, P: GrowthPolicy> IntoIterator for &'a Stack<T, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: GrowthPolicy> IntoIterator for &'a mut Stack<T, P> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
