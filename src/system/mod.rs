pub use atoms::*;
pub use simbox::*;

pub mod atoms;
pub mod elements;
pub mod simbox;

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// An atomic configuration: simulation box, periodic boundary flags and atoms.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct System {
    pub simbox: SimulationBox,
    pub pbc: [bool; 3],
    pub atoms: Atoms,
}

impl System {
    pub fn new(simbox: SimulationBox, pbc: [bool; 3], atoms: Atoms) -> System {
        System { simbox, pbc, atoms }
    }

    pub fn natoms(&self) -> usize {
        self.atoms.natoms()
    }

    /// Names of all per-atom properties, including `atype` and `pos`.
    pub fn atoms_prop_names(&self) -> Vec<String> {
        self.atoms.prop_names()
    }

    /// Full per-atom array of the named property.
    pub fn atoms_prop(&self, name: &str) -> Option<AtomsProperty> {
        self.atoms.prop(name)
    }

    pub fn set_atoms_prop<P: Into<AtomsProperty>>(&mut self, name: &str, value: P) -> Result<(), Error> {
        self.atoms.set_prop(name, value)
    }
}
