use std::ptr::NonNull;

use crate::owned::OwnedPtr;

/// A link to another node in the chain, if any.
pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A copyable handle to a heap-allocated node.
///
/// `NodePtr` is deliberately `Copy`: the next-links, the tail and the cursor all refer to the
/// same nodes, and which link owns a node is a structural rule (the head link, transitively)
/// rather than something the type system tracks. [`OwnedPtr`] is the exclusive owner at the
/// moments a node enters or leaves the chain.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Adopts a freshly constructed node, releasing it from its owner so that the chain's links
    /// take over.
    pub fn from_owned(node: OwnedPtr<Node<T>>) -> NodePtr<T> {
        NodePtr(node.release())
    }

    /// Reclaims the node, moving it off the heap and freeing its allocation. Any other `NodePtr`
    /// referring to this node must no longer be used.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: take_node is only called on nodes being unlinked from the chain, at which
        // point this handle is the last one in use, making ownership safe to reclaim.
        unsafe { OwnedPtr::from_raw(self.0) }.into_inner()
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr always refers to a node which is alive and reachable from its
        // list's head. The list restricts the unbounded lifetime to that of the borrow which
        // produced this handle.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value, with exclusivity provided by the mutable list borrow.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value_mut. Links are only rewritten while the list is mutably
        // borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

/// A node in the chain, holding one element and the link onwards.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
