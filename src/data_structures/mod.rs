mod any_vec;
mod component_mask;

pub use component_mask::*;

pub(crate) use any_vec::*;
