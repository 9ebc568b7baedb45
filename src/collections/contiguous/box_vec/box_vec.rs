use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use super::{Iter, IterMut};
use crate::collections::contiguous::raw_array::RawArray;
use crate::owned::OwnedPtr;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A growable collection which stores every element in its own heap box and keeps the handles in
/// a contiguous plane.
///
/// Growth reallocates the handle plane only: the handles are copied bitwise into the larger
/// plane and the boxed elements stay exactly where they are. The address of an element is
/// therefore stable from the moment it is pushed until it is removed, which makes it safe to
/// hold raw pointers to elements across pushes. The cost is one extra indirection per access
/// and one small allocation per element.
///
/// The plane starts at a capacity of 2 on the first push and doubles from there.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `cap` | O(1) |
/// | `get`, `replace` | O(1) |
/// | `push_back` | O(1) amortized, O(n) when growing |
/// | `push_front` | O(n) |
/// | `pop_back` | O(1) |
/// | `pop_front` | O(n) |
/// | `remove` | O(n - i) |
///
/// Here n is the number of elements and i the index operated on. The O(n) costs move handles,
/// one pointer each, never the elements themselves.
///
/// # Examples
///
/// ```rust
/// use containers::collections::contiguous::BoxVec;
///
/// let mut vec = BoxVec::new();
/// vec.push_back(String::from("anchored"));
/// let stable = vec.get(0) as *const String;
///
/// for i in 0..100 {
///     vec.push_back(format!("extra {i}"));
/// }
///
/// // The handle plane has grown several times over, but the element never moved.
/// assert_eq!(vec.get(0) as *const String, stable);
/// ```
pub struct BoxVec<T> {
    pub(crate) buf: RawArray<OwnedPtr<T>>,
    pub(crate) len: usize,
}

impl<T> BoxVec<T> {
    /// Creates a new BoxVec with length and capacity 0. The plane is allocated on the first
    /// push.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::BoxVec;
    /// let vec: BoxVec<u8> = BoxVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> BoxVec<T> {
        BoxVec {
            buf: RawArray::new(),
            len: 0,
        }
    }

    /// Creates a new BoxVec with capacity exactly equal to the provided value.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::BoxVec;
    /// let mut vec: BoxVec<u8> = BoxVec::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> BoxVec<T> {
        BoxVec {
            buf: RawArray::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the BoxVec.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BoxVec contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the handle plane. The capacity is always exactly what
    /// the size and growth rules produce, never rounded up behind the caller's back.
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Appends the provided element, returning a reference to its permanent home.
    ///
    /// # Panics
    /// Panics if the memory layout of the grown plane would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::BoxVec;
    /// let mut vec = BoxVec::new();
    /// for i in 0..3 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(vec.get(2), &2);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn push_back(&mut self, value: T) -> &mut T {
        // Box the element first: its address is final from here, wherever its handle lands.
        let handle = OwnedPtr::new(value);

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: The capacity was just ensured, so the slot at len is within the plane and
        // unoccupied.
        unsafe {
            self.buf.ptr.add(self.len).write(MaybeUninit::new(handle));
        }
        self.len += 1;

        let index = self.len - 1;
        self.handles_mut()[index].as_mut()
    }

    /// Adds the provided element at the front, shifting every handle up one slot, and returns a
    /// reference to the element's permanent home.
    ///
    /// # Panics
    /// Panics if the memory layout of the grown plane would exceed [`isize::MAX`].
    pub fn push_front(&mut self, value: T) -> &mut T {
        let handle = OwnedPtr::new(value);

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: There is room for one more handle, so the occupied prefix can move up one
        // slot before the new handle takes slot zero.
        unsafe {
            ptr::copy(self.buf.ptr.as_ptr(), self.buf.ptr.as_ptr().add(1), self.len);
            self.buf.ptr.write(MaybeUninit::new(handle));
        }
        self.len += 1;

        self.handles_mut()[0].as_mut()
    }

    /// Returns a reference to the element at the provided index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`BoxVec::try_get`])
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided index, or an error if the index is
    /// out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.handles()[index].as_ref())
    }

    /// Returns a mutable reference to the element at the provided index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`BoxVec::try_get_mut`])
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided index, or an error if the
    /// index is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.handles_mut()[index].as_mut())
    }

    /// Replaces the element at the provided index, returning the previous value.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`BoxVec::try_replace`])
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Replaces the element at the provided index, returning the previous value, or an error if
    /// the index is out of bounds. The new value moves into the existing box, so the element's
    /// address carries over.
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(self.handles_mut()[index].as_mut(), value))
    }

    /// Removes and returns the element at the provided index, shifting the handles after it
    /// down one slot.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`BoxVec::try_remove`])
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at the provided index, or an error if the index is out
    /// of bounds, in which case nothing changes.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index is below len, so the slot holds a handle, and it is read out exactly
        // once: the copy closes the gap before len shrinks past it.
        let handle = unsafe {
            let handle = self.buf.ptr.add(index).read().assume_init();

            ptr::copy(
                self.buf.ptr.as_ptr().add(index + 1),
                self.buf.ptr.as_ptr().add(index),
                self.len - index - 1,
            );

            handle
        };
        self.len -= 1;

        Ok(handle.into_inner())
    }

    /// Removes and returns the first element, unless the BoxVec is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.try_remove(0).ok()
    }

    /// Removes and returns the last element, unless the BoxVec is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.try_remove(self.len.checked_sub(1)?).ok()
    }

    /// Returns a reference to the first element, unless the BoxVec is empty.
    pub fn front(&self) -> Option<&T> {
        self.try_get(0).ok()
    }

    /// Returns a mutable reference to the first element, unless the BoxVec is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut(0).ok()
    }

    /// Returns a reference to the last element, unless the BoxVec is empty.
    pub fn back(&self) -> Option<&T> {
        self.try_get(self.len.checked_sub(1)?).ok()
    }

    /// Returns a mutable reference to the last element, unless the BoxVec is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut(self.len.checked_sub(1)?).ok()
    }

    /// Drops every element along with its box. The handle plane keeps its capacity for reuse.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: Slots below len hold live handles, and each is dropped exactly once
            // because len is zeroed immediately after.
            unsafe {
                self.buf.ptr.add(i).as_mut().assume_init_drop();
            }
        }

        self.len = 0;
    }

    /// Ensures there is capacity for `extra` elements beyond the current length, reallocating
    /// the plane at most once.
    ///
    /// # Panics
    /// Panics if the required capacity or its memory layout size would overflow.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() {
            return;
        }

        self.buf.realloc(new_cap);
    }

    /// Shrinks the handle plane so its capacity equals the length exactly.
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Doubles the plane so at least one more handle fits, allocating the first two slots for a
    /// previously empty plane.
    ///
    /// # Panics
    /// Panics if the new memory layout size would exceed [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.buf.realloc(cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP));
    }

    /// Confirms that the provided index refers to an element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// The occupied prefix of the handle plane, as a slice of handles.
    pub(crate) fn handles(&self) -> &[OwnedPtr<T>] {
        // SAFETY: Slots below len always hold live handles, and MaybeUninit<OwnedPtr<T>> has
        // the same layout as OwnedPtr<T>. The borrow rules keep the plane unchanged while the
        // slice is out.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len) }
    }

    /// The occupied prefix of the handle plane, as a mutable slice of handles.
    pub(crate) fn handles_mut(&mut self) -> &mut [OwnedPtr<T>] {
        // SAFETY: As for handles, with exclusivity coming from the &mut borrow.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T: Eq> BoxVec<T> {
    /// Returns true if the BoxVec contains the provided value.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first element equal to the provided value, if there is one.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Drop for BoxVec<T> {
    fn drop(&mut self) {
        self.clear();
        // buf's own drop returns the slot plane to the allocator.
    }
}

impl<T> Default for BoxVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BoxVec<T> {
    /// Clones every element into a box of its own within a fresh plane of the same capacity.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push_back(value.clone());
        }

        vec
    }
}

impl<T> FromIterator<T> for BoxVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = BoxVec::with_cap(iter.size_hint().0);

        for value in iter {
            vec.push_back(value);
        }

        vec
    }
}

impl<T> Extend<T> for BoxVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> Index<usize> for BoxVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for BoxVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<T: PartialEq> PartialEq for BoxVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoxVec<T> {}

impl<T: Hash> Hash for BoxVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);

        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for BoxVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxVec")
            .field(
                "contents",
                &DebugWith(|f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()),
            )
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for BoxVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// SAFETY: A BoxVec exclusively owns the slot plane and each boxed element, so moving it to
// another thread moves the whole structure.
unsafe impl<T: Send> Send for BoxVec<T> {}
// SAFETY: BoxVec's safe API follows the borrow rules with no interior mutability, so shared
// references only ever read.
unsafe impl<T: Sync> Sync for BoxVec<T> {}
