pub use collection::*;
pub use frame::*;

pub mod collection;
pub mod frame;

use crate::defaults::RESERVED_PROPERTIES;
use crate::error::Error;
use crate::system::{AtomsProperty, System};
use hashbrown::HashMap;
use log::{debug, trace, warn};
use ndarray::prelude::*;

/// Extra per-atom properties that are not part of the atom collection.
pub type Properties = HashMap<String, AtomsProperty>;

/// Constructor of an external atom collection.
pub trait AtomsBackend {
    type Atoms;

    /// Name reported when the backend is not available.
    const NAME: &'static str;

    fn build(
        &self,
        symbols: &[String],
        positions: ArrayView2<f64>,
        pbc: [bool; 3],
        cell: ArrayView2<f64>,
    ) -> Result<Self::Atoms, Error>;
}

/// Handle to an atom collection backend, resolved once at startup.
/// An unavailable capability refuses every conversion.
pub struct Capability<B> {
    backend: Option<B>,
}

impl<B> Capability<B> {
    pub fn available(backend: B) -> Self {
        Capability {
            backend: Some(backend),
        }
    }

    pub fn unavailable() -> Self {
        Capability {
            backend: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }
}

impl<B: AtomsBackend> Capability<B> {
    pub fn backend(&self) -> Result<&B, Error> {
        self.backend
            .as_ref()
            .ok_or(Error::CapabilityUnavailable(B::NAME))
    }
}

impl Capability<CollectionBackend> {
    pub fn load() -> Self {
        Capability::available(CollectionBackend)
    }
}

impl Capability<FrameBackend> {
    /// The chemfiles backend only works if the crate was compiled with the
    /// `chemfiles` feature.
    pub fn load() -> Self {
        if cfg!(feature = "chemfiles") {
            Capability::available(FrameBackend)
        } else {
            warn!("chemfiles support was not compiled in, conversions to frames are disabled");
            Capability::unavailable()
        }
    }
}

/// Converts a [System] and the list of element symbols belonging to its atom
/// types into an atom collection of the given backend. All per-atom properties
/// except `atype` and `pos` are returned separately.
///
/// `elements[i]` is the symbol of atom type `i + 1`.
pub fn dump<B, S>(
    capability: &Capability<B>,
    system: &System,
    elements: &[S],
) -> Result<(B::Atoms, Properties), Error>
where
    B: AtomsBackend,
    S: AsRef<str>,
{
    let backend: &B = capability.backend()?;

    // box/cell information
    let cell: ArrayView2<f64> = system.simbox.vects.view();
    let pbc: [bool; 3] = system.pbc;

    // element information
    let symbols: Vec<String> = resolve_symbols(system.atoms.atype.view(), elements)?;

    // atomic information
    let positions: ArrayView2<f64> = system.atoms.pos.view();
    let mut prop: Properties = Properties::new();
    for name in system.atoms_prop_names() {
        if RESERVED_PROPERTIES.contains(&name.as_str()) {
            continue;
        }
        if let Some(values) = system.atoms_prop(&name) {
            trace!("extra per-atom property '{}' with {} entries", name, values.len());
            prop.insert(name, values);
        }
    }

    let atoms: B::Atoms = backend.build(&symbols, positions, pbc, cell)?;
    debug!(
        "converted {} atoms into a {} atom collection ({} extra properties)",
        symbols.len(),
        B::NAME,
        prop.len()
    );
    Ok((atoms, prop))
}

/// Looks up the element symbol of every atom. Type indices are 1-based, so a
/// type of 0 or one larger than the number of elements is an error.
pub fn resolve_symbols<S: AsRef<str>>(
    atype: ArrayView1<usize>,
    elements: &[S],
) -> Result<Vec<String>, Error> {
    atype
        .iter()
        .enumerate()
        .map(|(atom, &t)| {
            t.checked_sub(1)
                .and_then(|index| elements.get(index))
                .map(|symbol| symbol.as_ref().to_string())
                .ok_or(Error::TypeIndex {
                    atom,
                    atype: t,
                    n_elements: elements.len(),
                })
        })
        .collect()
}
