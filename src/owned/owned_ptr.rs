use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

// NOTE: Box is still used as the underlying allocation mechanism here, because it guarantees the
// same layout contract everywhere an OwnedPtr is created or reclaimed. The value of the wrapper is
// the release / from_raw pair, which Box only offers through raw pointers.

/// An exclusive owner of a single heap-allocated value.
///
/// An OwnedPtr always points at a live allocation; there is no null state. Use
/// `Option<OwnedPtr<T>>` where a slot may be vacant - the niche of [`NonNull`] keeps that the same
/// size as the pointer itself.
///
/// # Ownership
/// The owned value is dropped and its allocation freed exactly once, when the OwnedPtr is dropped.
/// Because the type doesn't implement [`Clone`], the allocation can never be aliased by safe code,
/// and moving an OwnedPtr statically ends the previous binding's access to it.
///
/// The escape hatch is [`release`](OwnedPtr::release), which hands the raw allocation to the
/// caller. It exists for the hand-over moment in which a freshly allocated value gets linked into
/// a longer-lived owner: allocate through an OwnedPtr, perform the linking steps that may fail,
/// and only release once the value is reachable from its new owner. Any failure before the release
/// unwinds through the OwnedPtr and frees the allocation.
pub struct OwnedPtr<T> {
    ptr: NonNull<T>,
    _phantom: PhantomData<T>,
}

impl<T> OwnedPtr<T> {
    /// Moves `value` onto the heap and takes ownership of the allocation.
    ///
    /// # Examples
    /// ```
    /// # use containers::owned::OwnedPtr;
    /// let ptr = OwnedPtr::new(5_u8);
    /// assert_eq!(*ptr, 5);
    /// ```
    pub fn new(value: T) -> OwnedPtr<T> {
        // SAFETY: Box::into_raw never returns a null pointer.
        let ptr = unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(value))) };

        OwnedPtr {
            ptr,
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of an existing allocation.
    ///
    /// # Safety
    /// `ptr` must point at an initialized `T` allocated with the layout [`Box`] would use, and no
    /// other owner may free it. Passing a pointer currently owned elsewhere results in a double
    /// free.
    ///
    /// # Examples
    /// ```
    /// # use containers::owned::OwnedPtr;
    /// let raw = OwnedPtr::new(5_u8).release();
    /// // SAFETY: raw was just released, so reclaiming it here restores the single owner.
    /// let ptr = unsafe { OwnedPtr::from_raw(raw) };
    /// assert_eq!(*ptr, 5);
    /// ```
    pub const unsafe fn from_raw(ptr: NonNull<T>) -> OwnedPtr<T> {
        OwnedPtr {
            ptr,
            _phantom: PhantomData,
        }
    }

    /// Relinquishes ownership of the allocation without destroying it, returning the raw pointer.
    ///
    /// After this call the value is no longer dropped automatically; the caller (or whichever
    /// structure now links to the allocation) is responsible for reclaiming it, usually via
    /// [`OwnedPtr::from_raw`].
    pub fn release(self) -> NonNull<T> {
        let ptr = self.ptr;
        mem::forget(self);
        ptr
    }

    /// Moves the owned value off the heap, freeing the allocation.
    ///
    /// # Examples
    /// ```
    /// # use containers::owned::OwnedPtr;
    /// let ptr = OwnedPtr::new(String::from("contents"));
    /// assert_eq!(ptr.into_inner(), "contents");
    /// ```
    pub fn into_inner(self) -> T {
        let ptr = self.ptr;
        mem::forget(self);

        // SAFETY: ptr originates from Box::into_raw (via new or from_raw's contract) and self has
        // been forgotten, so this is the only remaining owner.
        *unsafe { Box::from_raw(ptr.as_ptr()) }
    }
}

impl<T> Drop for OwnedPtr<T> {
    fn drop(&mut self) {
        // SAFETY: ptr originates from Box::into_raw and ownership is exclusive, so the value is
        // dropped and freed exactly once.
        drop(unsafe { Box::from_raw(self.ptr.as_ptr()) });
    }
}

impl<T> Deref for OwnedPtr<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr always refers to a live, initialized T and the borrow checker prevents
        // mutation while this borrow exists.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> DerefMut for OwnedPtr<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: ptr always refers to a live, initialized T and the borrow checker enforces
        // exclusivity through the &mut self receiver.
        unsafe { self.ptr.as_mut() }
    }
}

impl<T> AsRef<T> for OwnedPtr<T> {
    fn as_ref(&self) -> &T {
        self.deref()
    }
}

impl<T> AsMut<T> for OwnedPtr<T> {
    fn as_mut(&mut self) -> &mut T {
        self.deref_mut()
    }
}

// SAFETY: An OwnedPtr is the unique owner of its allocation, so sending it between threads moves
// the value exactly as sending a T by value would.
unsafe impl<T: Send> Send for OwnedPtr<T> {}
// SAFETY: Shared access to an OwnedPtr only ever produces &T, with no interior mutability of its
// own, so sharing is as safe as sharing the T directly.
unsafe impl<T: Sync> Sync for OwnedPtr<T> {}

impl<T: PartialEq> PartialEq for OwnedPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for OwnedPtr<T> {}

impl<T: Hash> Hash for OwnedPtr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for OwnedPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}

impl<T: Display> Display for OwnedPtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self, f)
    }
}
