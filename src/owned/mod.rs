//! Exclusive ownership primitives. Revolves around [`OwnedPtr`], the single-owner heap pointer
//! which the collection types build their node and slot management on.

mod owned_ptr;

pub use owned_ptr::*;
