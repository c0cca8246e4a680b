//! Owned element buffer over the system allocator
//!
//! # Safety
//!
//! `RawBuf<T>` owns one block from `std::alloc` sized for exactly `cap`
//! values of `T`. It never reads or drops the values it holds; tracking
//! which slots are initialized is the owner's job.
//!
//! ## Safety Contracts
//!
//! - `ptr` is `Some` while the buffer is live and `None` once released.
//! - A live `ptr` was returned by `alloc`/`realloc` with
//!   `Layout::array::<T>(cap)`, or is dangling when that layout is zero-sized
//!   (zero-sized `T`). Zero-sized layouts are never passed to the allocator.
//! - `grow` keeps the first `cap` slots bit-for-bit (realloc contract) and
//!   leaves the block untouched when the allocator refuses.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;
use std::alloc;

use crate::error::{StackError, StackResult};

pub(crate) struct RawBuf<T> {
    ptr: Option<NonNull<T>>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its block, same as Vec<T>. Sending or sharing
// it is exactly as safe as sending or sharing the T values stored in it.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: see above; &RawBuf only hands out *const access.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Allocate room for exactly `cap` elements
    pub(crate) fn allocate(cap: usize) -> StackResult<Self> {
        let layout = Self::layout(cap)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has non-zero size
            let raw = unsafe { alloc::alloc(layout) };
            NonNull::new(raw.cast::<T>())
                .ok_or_else(|| StackError::allocation_failed_with_layout(layout))?
        };

        Ok(Self {
            ptr: Some(ptr),
            cap,
            _marker: PhantomData,
        })
    }

    /// Resize the block to `new_cap` elements, preserving existing contents
    ///
    /// On error the buffer is unchanged. A released buffer is allocated
    /// afresh.
    pub(crate) fn grow(&mut self, new_cap: usize) -> StackResult<()> {
        debug_assert!(new_cap >= self.cap, "RawBuf never shrinks");

        let Some(old_ptr) = self.ptr else {
            *self = Self::allocate(new_cap)?;
            return Ok(());
        };

        let new_layout = Self::layout(new_cap)?;
        if new_layout.size() == 0 {
            self.cap = new_cap;
            return Ok(());
        }

        let old_layout = Self::layout(self.cap)?;
        let raw = if old_layout.size() == 0 {
            // SAFETY: new_layout has non-zero size
            unsafe { alloc::alloc(new_layout) }
        } else {
            // SAFETY: old_ptr came from the allocator with old_layout, and
            // new_layout.size() is non-zero and fits isize (Layout::array).
            unsafe { alloc::realloc(old_ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };

        let new_ptr = NonNull::new(raw.cast::<T>())
            .ok_or_else(|| StackError::allocation_failed_with_layout(new_layout))?;

        self.ptr = Some(new_ptr);
        self.cap = new_cap;
        Ok(())
    }

    /// Return the block to the allocator. Safe to call repeatedly.
    pub(crate) fn release(&mut self) {
        let Some(ptr) = self.ptr.take() else {
            return;
        };

        if let Ok(layout) = Layout::array::<T>(self.cap) {
            if layout.size() != 0 {
                // SAFETY: ptr was allocated with this exact layout and is
                // dropped from self.ptr above, so it cannot be freed twice.
                unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
            }
        }
        self.cap = 0;
    }

    #[inline]
    pub(crate) fn ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.ptr.is_some()
    }

    fn layout(cap: usize) -> StackResult<Layout> {
        Layout::array::<T>(cap).map_err(|_| StackError::size_overflow("stack buffer layout"))
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
