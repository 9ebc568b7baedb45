//! General-purpose collection types.
//!
//! # Purpose
//! Both collections here put their elements on the heap one by one, which buys each a property
//! the std equivalent doesn't have: [`FastList`](linked::FastList) tracks where its last access
//! landed so nearby accesses don't start over, and [`BoxVec`](contiguous::BoxVec) keeps every
//! element at a fixed address for its whole life, no matter how the plane of handles grows.
//!
//! # Method
//! Nodes and boxed elements are owned through [`OwnedPtr`](crate::owned::OwnedPtr) rather than
//! raw pointers, so every allocation has exactly one owner at any moment, including halfway
//! through a fallible insertion.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
