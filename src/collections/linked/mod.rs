//! Linked collection types. Revolves around [`FastList`] and the access cursor it carries.

pub mod list;

#[doc(inline)]
pub use list::FastList;
