use std::cell::Cell;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Cursor, Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::owned::OwnedPtr;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};

/// A singly linked list which remembers the last position it resolved, making sequential access
/// by index cheap.
///
/// # Cursor
///
/// Every positional operation leaves behind a cursor: the node it resolved and the index it was
/// found at. A later lookup at an index at or past the cursor resumes walking from the cursor
/// instead of the head, so a full ascending sweep over `get` costs O(n) links in total rather
/// than O(n²). Lookups before the cursor restart from the head.
///
/// The cursor is repaired or discarded whenever the list changes shape, so it never points at a
/// node which has left the chain or sits at a different index than recorded. It is an
/// acceleration detail only: no operation changes its result based on the cursor, just its cost.
/// Shared references refresh the cursor too, which is why `FastList` can be sent to another
/// thread but not shared between threads.
///
/// [`FastList::hops`] reports how many links have been traversed in total, which makes the
/// amortization observable.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `is_empty` | O(1) |
/// | `front`, `back` | O(1) |
/// | `push_front`, `push_back` | O(1) |
/// | `pop_front` | O(1) |
/// | `pop_back` | O(n) |
/// | `get`, `replace` | O(i - c), O(i) without a usable cursor |
/// | `remove` | O(i - c), O(i) without a usable cursor |
///
/// Here i is the index operated on and c is the cursor's index when it lies at or before i.
/// Repeating a positional method at ascending indexes is amortized O(1) per call.
///
/// # Examples
///
/// ```rust
/// use containers::collections::linked::FastList;
///
/// let list: FastList<usize> = (0..100).collect();
/// for i in 0..100 {
///     assert_eq!(list.get(i), &i);
/// }
///
/// // The ascending sweep walked each link once.
/// assert_eq!(list.hops(), 99);
/// ```
pub struct FastList<T> {
    pub(crate) state: ListState<T>,
    /// The most recently resolved position. Interior mutability lets lookups through shared
    /// references refresh it.
    pub(crate) cursor: Cell<Option<Cursor<T>>>,
    /// Total links traversed by seeks over the life of the list.
    pub(crate) hops: Cell<u64>,
    pub(crate) _phantom: PhantomData<T>,
}

/// The state of a [`FastList`]: either empty or tracking its contents. Keeping the two apart
/// structurally means a non-empty list always has a head, a tail and a non-zero length.
#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> ListState<T> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }
}

impl<T> FastList<T> {
    /// Creates a new, empty `FastList`.
    pub const fn new() -> FastList<T> {
        FastList {
            state: Empty,
            cursor: Cell::new(None),
            hops: Cell::new(0),
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the total number of links traversed by positional lookups over the life of the
    /// list. Pushes and pops at the ends don't traverse links and leave this untouched.
    pub fn hops(&self) -> u64 {
        self.hops.get()
    }

    /// Returns a reference to the first element of the list, unless it is empty.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element of the list, unless it is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element of the list, unless it is empty.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element of the list, unless it is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Appends the provided element to the back of the list, returning a reference to its new
    /// home. No existing position changes, so the cursor is left alone.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containers::collections::linked::FastList;
    ///
    /// let mut list = FastList::new();
    /// list.push_back('a');
    /// list.push_back('b');
    ///
    /// assert_eq!(list.front(), Some(&'a'));
    /// assert_eq!(list.back(), Some(&'b'));
    /// ```
    pub fn push_back(&mut self, value: T) -> &mut T {
        match &mut self.state {
            Empty => self.wrap_first(value).value_mut(),
            Full(contents) => {
                // The fresh node stays owned until it is linked below, so the length arithmetic
                // panicking frees the allocation on the way out.
                let node = OwnedPtr::new(Node { value, next: None });
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let mut node = NodePtr::from_owned(node);
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;

                node.value_mut()
            },
        }
    }

    /// Adds the provided element to the front of the list, linking it to the previous head, and
    /// returns a reference to its new home. Every existing element moves up one position, so a
    /// live cursor has its recorded index bumped to keep pointing at the same element.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containers::collections::linked::FastList;
    ///
    /// let mut list = FastList::new();
    /// list.push_back('b');
    /// list.push_front('a');
    ///
    /// assert_eq!(list.get(0), &'a');
    /// assert_eq!(list.get(1), &'b');
    /// ```
    pub fn push_front(&mut self, value: T) -> &mut T {
        let value = match &mut self.state {
            Empty => self.wrap_first(value).value_mut(),
            Full(contents) => {
                let node = OwnedPtr::new(Node {
                    value,
                    next: Some(contents.head),
                });
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let mut node = NodePtr::from_owned(node);
                contents.head = node;

                node.value_mut()
            },
        };

        if let Some(mut spot) = self.cursor.get() {
            spot.index += 1;
            self.cursor.set(Some(spot));
        }

        value
    }

    /// Returns a reference to the element at the provided index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`FastList::try_get`])
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided index, or an error if the index is out
    /// of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`FastList::try_get_mut`])
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided index, or an error if the
    /// index is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Replaces the element at the provided index, returning the previous value.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`FastList::try_replace`])
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Replaces the element at the provided index, returning the previous value, or an error if
    /// the index is out of bounds. The node itself stays put, so the cursor and all other
    /// positions survive unchanged.
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.checked_seek(index)?.value_mut(), value))
    }

    /// Removes and returns the element at the provided index, relinking its predecessor to its
    /// successor.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. ([`FastList::try_remove`])
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at the provided index, or an error if the index is out of
    /// bounds, in which case the list is left untouched.
    ///
    /// Removal seeks the predecessor and leaves the cursor on it, so removing at ascending
    /// indexes (or repeatedly at the same index) stays amortized O(1) per call. Removing the
    /// head has no predecessor to stand on, so the cursor is cleared instead.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index(index)?;

        if index == 0 {
            return Ok(self.unlink_head());
        }

        // Seeking before unlinking doubles as the cursor repositioning: it lands on the
        // predecessor, which keeps its index after the removal.
        let pred = self.seek(contents, index - 1);

        // SAFETY: index is in bounds, so the node before it has a successor.
        let node = unsafe { pred.next().unwrap_unchecked() }.take_node();
        *pred.next_mut() = node.next;

        match &mut self.state {
            // The bounds check above ruled the empty list out.
            Empty => unreachable!(),
            Full(contents) => {
                if node.next.is_none() {
                    contents.tail = pred;
                }
                // SAFETY: At least two elements were present, so the length stays non-zero.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };
            },
        }

        Ok(node.value)
    }

    /// Removes and returns the element at the front of the list, unless it is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.try_remove(0).ok()
    }

    /// Removes and returns the element at the back of the list, unless it is empty. Walks to the
    /// new tail, as a singly linked list cannot step backwards from the old one.
    pub fn pop_back(&mut self) -> Option<T> {
        self.try_remove(self.len().checked_sub(1)?).ok()
    }

    /// Removes all elements from the list and discards the cursor. Traversal counts are kept.
    pub fn clear(&mut self) {
        self.cursor.set(None);

        let mut curr = match mem::take(&mut self.state) {
            Empty => None,
            Full(contents) => Some(contents.head),
        };

        while let Some(ptr) = curr {
            let node = ptr.take_node();
            curr = node.next;
        }
    }

    /// Returns an iterator over references to the elements of the list. Iteration resolves each
    /// index in turn, so it rides the cursor and costs one hop per element.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements of the list.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Wraps the sole element of a previously empty list, returning a handle to its node.
    fn wrap_first(&mut self, value: T) -> NodePtr<T> {
        let node = NodePtr::from_owned(OwnedPtr::new(Node { value, next: None }));
        self.state = Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
        });
        node
    }

    /// Unlinks and reclaims the head node of a list known to be non-empty. The removed position
    /// has no predecessor, so the cursor is cleared.
    fn unlink_head(&mut self) -> T {
        self.cursor.set(None);

        match &mut self.state {
            // Callers have already rejected the empty list.
            Empty => unreachable!(),
            Full(contents) => {
                let node = contents.head.take_node();

                match contents.len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The length was at least two, so the removed head had a
                        // successor.
                        contents.head = unsafe { node.next.unwrap_unchecked() };
                        contents.len = new_len;
                    },
                    None => self.state = Empty,
                }

                node.value
            },
        }
    }

    /// Returns the list's contents if the provided index is within bounds.
    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Bounds-checks the provided index, then resolves its node.
    fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index(index)?;
        Ok(self.seek(contents, index))
    }

    /// Resolves the node at `index`, which the caller has bounds-checked, walking forwards from
    /// the cursor when it sits at or before the target and from the head otherwise. Leaves the
    /// cursor on the resolved node and adds the links walked to the hop count.
    #[allow(clippy::unwrap_used)]
    fn seek(&self, contents: &ListContents<T>, index: usize) -> NodePtr<T> {
        let (mut node, start) = match self.cursor.get() {
            Some(spot) if spot.index <= index => (spot.node, spot.index),
            _ => (contents.head, 0),
        };

        for _ in start..index {
            // UNWRAP: index is within bounds, so every node before it has a successor.
            node = node.next().unwrap();
        }

        self.hops.set(self.hops.get() + (index - start) as u64);
        self.cursor.set(Some(Cursor { node, index }));

        node
    }

    /// Walks the whole chain, asserting that the length, tail and cursor agree with it.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn check_invariants(&self) {
        match &self.state {
            Empty => assert!(self.cursor.get().is_none(), "Empty list should have no cursor!"),
            Full(contents) => {
                let mut count = 1;
                let mut curr = contents.head;

                while let Some(next) = curr.next() {
                    curr = *next;
                    count += 1;
                }

                assert_eq!(count, contents.len.get(), "Chain length should match recorded length!");
                assert!(curr == contents.tail, "Last reachable node should be the tail!");

                if let Some(spot) = self.cursor.get() {
                    assert!(spot.index < contents.len.get(), "Cursor index should be in bounds!");

                    let mut node = contents.head;
                    for _ in 0..spot.index {
                        node = node.next().unwrap();
                    }

                    assert!(node == spot.node, "Cursor node should sit at the cursor index!");
                }
            },
        }
    }
}

impl<T: Eq> FastList<T> {
    /// Returns true if the list contains the provided value.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first element equal to the provided value, if there is one.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Drop for FastList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for FastList<T> {
    fn default() -> Self {
        FastList::new()
    }
}

impl<T: Clone> Clone for FastList<T> {
    /// Clones the list by cloning every element, front to back, into a fresh chain. The clone
    /// starts with no cursor and a zero hop count.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for FastList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = FastList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for FastList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> Index<usize> for FastList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for FastList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut own = Some(self.head);
        let mut their = Some(other.head);

        while let (Some(a), Some(b)) = (own, their) {
            if a.value() != b.value() {
                return false;
            }

            own = *a.next();
            their = *b.next();
        }

        true
    }
}

impl<T: PartialEq> PartialEq for FastList<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (Empty, Empty) => true,
            (Full(own), Full(their)) => own == their,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for FastList<T> {}

impl<T: Hash> Hash for FastList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);

        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for FastList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastList")
            .field(
                "contents",
                &DebugWith(|f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()),
            )
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for FastList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;

        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first:?}")?;
            for value in iter {
                write!(f, ") -> ({value:?}")?;
            }
        }

        write!(f, ")")
    }
}

// SAFETY: FastList owns its nodes exclusively, so moving it to another thread moves the whole
// chain with it. The cursor and hop cells keep it from being Sync, which is what makes their
// interior mutability sound.
unsafe impl<T: Send> Send for FastList<T> {}
