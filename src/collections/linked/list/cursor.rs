use super::NodePtr;

/// The most recently resolved position: a node and the index it was found at.
///
/// A cursor is only ever stored for a node still in the chain, with `index` matching its current
/// position. Operations which move or remove nodes repair or clear the stored cursor to keep
/// that true.
pub(crate) struct Cursor<T> {
    pub node: NodePtr<T>,
    pub index: usize,
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}
