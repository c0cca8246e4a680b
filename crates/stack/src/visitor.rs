//! Per-element visitors for [`Stack::visit`](crate::Stack::visit)

/// Called once per live element, bottom of the stack first
///
/// The visitor gets exclusive access to one slot at a time together with a
/// caller-owned context. It must not keep the reference past the call; the
/// borrow checker enforces this.
///
/// Any `FnMut(&mut T, &mut C)` is a visitor, so most callers pass a closure
/// to [`Stack::for_each`](crate::Stack::for_each). Implement the trait by
/// hand when the visitor carries its own state.
///
/// # Example
/// ```
/// use strata_stack::{DynamicStack, Visitor};
///
/// struct Sum;
///
/// impl Visitor<u32, u64> for Sum {
///     fn visit(&mut self, item: &mut u32, total: &mut u64) {
///         *total += u64::from(*item);
///     }
/// }
///
/// let mut stack = DynamicStack::<u32>::new()?;
/// stack.push_all([1, 2, 3])?;
///
/// let mut total = 0_u64;
/// stack.visit(&mut total, &mut Sum);
/// assert_eq!(total, 6);
/// # Ok::<(), strata_stack::StackError>(())
/// ```
pub trait Visitor<T, C: ?Sized> {
    /// Visit one element
    fn visit(&mut self, item: &mut T, context: &mut C);
}

impl<T, C, F> Visitor<T, C> for F
where
    C: ?Sized,
    F: FnMut(&mut T, &mut C),
{
    #[inline]
    fn visit(&mut self, item: &mut T, context: &mut C) {
        self(item, context);
    }
}
