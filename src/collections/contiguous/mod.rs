//! Contiguous collection types. Revolves around [`BoxVec`], whose plane of handles is contiguous
//! while the elements themselves stay boxed in place.

pub mod box_vec;

pub(crate) mod raw_array;

#[doc(inline)]
pub use box_vec::BoxVec;
