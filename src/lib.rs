//! A small library of containers which give every element its own heap allocation, so that
//! element addresses stay stable and every link in a structure has exactly one owner.
//!
//! # Purpose
//! This crate collects container behaviour I kept wanting and std deliberately doesn't offer: a
//! linked list that doesn't punish indexed loops ([`FastList`](collections::linked::FastList)), a
//! growable array whose elements never move once pushed ([`BoxVec`](collections::contiguous::BoxVec)),
//! and the ownership primitive both are built on ([`OwnedPtr`](owned::OwnedPtr)). There is also a
//! small reader for numeric case files ([`read_cases`](input::read_cases)), because every set of
//! test inputs I generate ends up in the same line format.
//!
//! # Method
//! Both containers commit to per-element allocation and make it pay for itself.
//! [`FastList`](collections::linked::FastList) remembers where its last access landed, which turns
//! the usual "never index a linked list" advice into amortized O(1) for the ascending loops people
//! actually write. [`BoxVec`](collections::contiguous::BoxVec) keeps a contiguous plane of handles
//! to boxed elements, so growth copies pointers instead of values and nothing an element reference
//! (or raw pointer) points at ever moves.
//!
//! Every allocation is owned through [`OwnedPtr`](owned::OwnedPtr) during the moments ownership is
//! in flight: a node or box is created owned, the fallible linking steps run, and only then is the
//! allocation released into the structure. Any panic in between unwinds through the owner and
//! frees the value, so neither container can leak on a failure path.
//!
//! # Error Handling
//! Fallible operations come in pairs: `try_x` returns a strongly typed error (structs and enums
//! implementing [`Error`](std::error::Error), carrying the offending index and length where that
//! helps), and `x` is the panicking convenience for callers who have already checked their
//! indexes. The indexing operators panic, matching [`std`]'s containers. Allocation failure is not
//! surfaced as a value; it aborts through [`handle_alloc_error`](std::alloc::handle_alloc_error)
//! the way [`std`]'s own containers fail.
//!
//! # Dependencies
//! The containers are written from raw parts on purpose; this library doesn't use [`Vec`] at all,
//! and [`Box`] appears only inside [`OwnedPtr`](owned::OwnedPtr) to pin down the allocation
//! layout. The derive macros from `derive_more` cover the error types and state enums, which would
//! otherwise be some very repetitive programming.
//!
//! # Potential Future Additions
//! - `insert(index, value)` for both containers
//! - A doubly linked `FastList` so descending scans can ride the cursor too
//! - A slot-arena backing for the list, trading pointer chasing for handle indirection

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "input")]
pub mod input;
#[cfg(feature = "owned")]
pub mod owned;

pub(crate) mod util;
