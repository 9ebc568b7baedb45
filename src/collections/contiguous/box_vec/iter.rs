use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use super::BoxVec;
use crate::owned::OwnedPtr;

/// An owning iterator over the elements of a BoxVec, which unboxes each element as it goes.
pub struct IntoIter<T> {
    pub(crate) vec: BoxVec<T>,
    pub(crate) front: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.vec.len {
            return None;
        }

        // SAFETY: front is below len and advances past each slot exactly once, so the handle
        // here is moved out exactly once and the final drop skips it.
        let handle = unsafe { self.vec.buf.ptr.add(self.front).read().assume_init() };
        self.front += 1;

        Some(handle.into_inner())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.vec.len - self.front;
        (left, Some(left))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.vec.len {
            None
        } else {
            self.vec.pop_back()
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let left = self.vec.len - self.front;

        // SAFETY: Slots in front..len still hold live handles. Moving them to the start of
        // the plane, with len adjusted to match, hands them to the BoxVec's own drop.
        unsafe {
            ptr::copy(
                self.vec.buf.ptr.as_ptr().add(self.front),
                self.vec.buf.ptr.as_ptr(),
                left,
            );
        }
        self.vec.len = left;
        self.front = 0;
    }
}

impl<T> IntoIterator for BoxVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            vec: self,
            front: 0,
        }
    }
}

/// An iterator over mutable references to the elements of a BoxVec, walking the handle plane.
pub struct IterMut<'a, T> {
    pub(crate) handles: slice::IterMut<'a, OwnedPtr<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.handles.next().map(|handle| handle.as_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.handles.next_back().map(|handle| handle.as_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a mut BoxVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        IterMut {
            handles: self.handles_mut().iter_mut(),
        }
    }
}

/// An iterator over references to the elements of a BoxVec, walking the handle plane.
pub struct Iter<'a, T> {
    pub(crate) handles: slice::Iter<'a, OwnedPtr<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.handles.next().map(|handle| handle.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.handles.next_back().map(|handle| handle.as_ref())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoxVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter {
            handles: self.handles().iter(),
        }
    }
}
