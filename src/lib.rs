//! Conversion of atomic systems (box, periodic boundaries and per-atom data)
//! into atom collections such as a [chemfiles] `Frame`, together with
//! crystallographic index helpers working on the same simulation box.
//!
//! [chemfiles]: https://chemfiles.org

pub mod convert;
pub mod defaults;
pub mod error;
pub mod settings;
pub mod system;
pub mod tools;

pub use convert::*;
pub use error::Error;
pub use settings::{initialize_logger, Settings, Tolerance};
pub use system::*;
