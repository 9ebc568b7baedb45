//! Strongly typed errors shared by the collection types.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided index doesn't refer to an element of the collection.
///
/// Carries enough context to produce a useful message without the caller having to re-query the
/// collection.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// A length or capacity computation exceeded the maximum a collection can represent.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Combined error for operations which can fail with either an invalid index or an overflowing
/// capacity.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
