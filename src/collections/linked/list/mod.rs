mod cursor;
mod fast_list;
mod iter;
mod length;
mod node;
mod tests;

pub(crate) use cursor::*;
pub use fast_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
