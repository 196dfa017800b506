pub use miller::*;

pub mod miller;
