mod box_vec;
mod iter;

pub use box_vec::*;
pub use iter::*;
