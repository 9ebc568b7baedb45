use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{FastList, Link, ListState};

impl<T> IntoIterator for FastList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An iterator over the elements of a [`FastList`], by value.
pub struct IntoIter<T> {
    // There is no point rewriting the unlinking logic when the iterator can just hold the list
    // and pop from the front.
    pub(crate) list: FastList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a mut FastList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            link: match &self.state {
                Empty => None,
                Full(contents) => Some(contents.head),
            },
            left: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a [`FastList`]. Walks the chain
/// directly, because handing out mutable borrows can't go through the shared cursor.
pub struct IterMut<'a, T> {
    pub(crate) link: Link<T>,
    /// Elements left to yield, for length reporting.
    pub(crate) left: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.link?;
        self.link = *node.next();
        self.left -= 1;

        Some(node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.left
    }
}

impl<'a, T> IntoIterator for &'a FastList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            index: 0,
        }
    }
}

/// An iterator over references to the elements of a [`FastList`]. Resolves one index after
/// another through the list itself, so it rides the cursor and counts towards
/// [`FastList::hops`] at one hop per element.
pub struct Iter<'a, T> {
    pub(crate) list: &'a FastList<T>,
    pub(crate) index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.try_get(self.index).ok()?;
        self.index += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.list.len() - self.index
    }
}
