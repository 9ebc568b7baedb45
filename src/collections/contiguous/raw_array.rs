use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A plane of uninitialized slots, sized at runtime. Tracks an allocation and a capacity and
/// nothing else: which slots hold live values is entirely the owner's concern, including dropping
/// them before this deallocates.
pub(crate) struct RawArray<T> {
    pub ptr: NonNull<MaybeUninit<T>>,
    pub cap: usize,
    pub _phantom: PhantomData<T>,
}

impl<T> RawArray<T> {
    /// Creates a plane with no slots and no allocation behind it.
    pub const fn new() -> RawArray<T> {
        RawArray {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a plane with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RawArray<T> {
        let layout = Self::make_layout(cap);

        RawArray {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// Builds the [`Layout`] for `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap)
            .map_err(|_| CapacityOverflow)
            .throw()
    }

    /// Allocates for the provided [`Layout`], returning a dangling pointer for a zero-sized one.
    /// An allocator failure is reported through [`alloc::handle_alloc_error`] rather than a
    /// panic, to avoid allocating on the way out.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() },
            )
            .unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// Resizes the plane to exactly `new_cap` slots, preserving the contents of the slots which
    /// survive. Slots are moved bitwise: values boxed behind the slots never move.
    ///
    /// # Panics
    /// Panics if the new memory layout size would exceed [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        let new_ptr = match (self.cap, new_cap) {
            (_, _) if size_of::<T>() == 0 => {
                // Nothing is ever allocated for zero-sized slots, so the dangling pointer
                // serves every capacity.
                self.ptr
            },
            (old, new) if old == new => return,
            (0, _) => Self::make_ptr(Self::make_layout(new_cap)),
            (_, 0) => {
                // SAFETY: The capacity is non-zero for a non-ZST, so the plane was allocated
                // with this exact layout.
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap));
                }

                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.cap);
                let new_layout = Self::make_layout(new_cap);

                // SAFETY: The plane was allocated in the global allocator with old_layout, and
                // the new size is non-zero and fits an isize.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl<T> Drop for RawArray<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: The plane was allocated in the global allocator with this layout.
            // Zero-sized layouts were never allocated and are guarded against deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}
