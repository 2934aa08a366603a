mod signature;
mod component_vec;

pub use signature::*;
pub use component_vec::*;
