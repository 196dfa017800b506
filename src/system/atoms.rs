use crate::defaults::{ATYPE_KEY, POS_KEY, RESERVED_PROPERTIES};
use crate::error::Error;
use hashbrown::HashMap;
use itertools::Itertools;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Per-atom data. The first axis always runs over the atoms, further axes hold
/// vector or tensor components.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum AtomsProperty {
    Int(ArrayD<i64>),
    Float(ArrayD<f64>),
}

impl AtomsProperty {
    /// Number of atoms covered by this property.
    pub fn len(&self) -> usize {
        let shape: &[usize] = match self {
            AtomsProperty::Int(values) => values.shape(),
            AtomsProperty::Float(values) => values.shape(),
        };
        shape.first().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ndim(&self) -> usize {
        match self {
            AtomsProperty::Int(values) => values.ndim(),
            AtomsProperty::Float(values) => values.ndim(),
        }
    }
}

impl<D: Dimension> From<Array<f64, D>> for AtomsProperty {
    fn from(values: Array<f64, D>) -> Self {
        AtomsProperty::Float(values.into_dyn())
    }
}

impl<D: Dimension> From<Array<i64, D>> for AtomsProperty {
    fn from(values: Array<i64, D>) -> Self {
        AtomsProperty::Int(values.into_dyn())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "AtomsData")]
pub struct Atoms {
    /// 1-based type index of every atom
    pub atype: Array1<usize>,
    /// cartesian positions, one row per atom
    pub pos: Array2<f64>,
    extra: HashMap<String, AtomsProperty>,
}

/// Unchecked serialized form of [Atoms]. Deserialization goes through
/// [Atoms::new] and [Atoms::set_prop] so the shape checks always apply.
#[derive(Serialize, Deserialize)]
struct AtomsData {
    atype: Array1<usize>,
    pos: Array2<f64>,
    #[serde(default)]
    extra: HashMap<String, AtomsProperty>,
}

impl TryFrom<AtomsData> for Atoms {
    type Error = Error;

    fn try_from(data: AtomsData) -> Result<Self, Self::Error> {
        let mut atoms: Atoms = Atoms::new(data.atype, data.pos)?;
        for (name, value) in data.extra {
            atoms.set_prop(&name, value)?;
        }
        Ok(atoms)
    }
}

impl Atoms {
    pub fn new(atype: Array1<usize>, pos: Array2<f64>) -> Result<Self, Error> {
        if pos.dim() != (atype.len(), 3) {
            return Err(Error::shape(format!(
                "positions of {} atoms must have shape ({}, 3), got {:?}",
                atype.len(),
                atype.len(),
                pos.shape()
            )));
        }
        Ok(Atoms {
            atype,
            pos,
            extra: HashMap::new(),
        })
    }

    pub fn natoms(&self) -> usize {
        self.atype.len()
    }

    /// Number of distinct atom types, taken as the largest type index.
    pub fn natypes(&self) -> usize {
        self.atype.iter().copied().max().unwrap_or(0)
    }

    /// Adds or replaces an extra per-atom property.
    pub fn set_prop<P: Into<AtomsProperty>>(&mut self, name: &str, value: P) -> Result<(), Error> {
        if RESERVED_PROPERTIES.contains(&name) {
            return Err(Error::ReservedProperty(name.to_string()));
        }
        let value: AtomsProperty = value.into();
        if value.ndim() == 0 || value.len() != self.natoms() {
            return Err(Error::shape(format!(
                "property '{}' must have one entry per atom ({}), got {}",
                name,
                self.natoms(),
                value.len()
            )));
        }
        self.extra.insert(name.to_string(), value);
        Ok(())
    }

    pub fn remove_prop(&mut self, name: &str) -> Option<AtomsProperty> {
        self.extra.remove(name)
    }

    /// Names of all per-atom properties: `atype` and `pos` first, then the
    /// extra properties in alphabetical order.
    pub fn prop_names(&self) -> Vec<String> {
        RESERVED_PROPERTIES
            .iter()
            .map(|name| name.to_string())
            .chain(self.extra.keys().sorted().cloned())
            .collect()
    }

    /// Full per-atom array of a property. `atype` is reported as an integer
    /// array and `pos` as an (N, 3) float array.
    pub fn prop(&self, name: &str) -> Option<AtomsProperty> {
        match name {
            ATYPE_KEY => Some(AtomsProperty::from(self.atype.mapv(|t| t as i64))),
            POS_KEY => Some(AtomsProperty::from(self.pos.clone())),
            _ => self.extra.get(name).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_atoms() -> Atoms {
        Atoms::new(array![1, 2], array![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]]).unwrap()
    }

    #[test]
    fn positions_must_match_types() {
        assert!(Atoms::new(array![1, 2, 1], array![[0.0, 0.0, 0.0]]).is_err());
        assert!(Atoms::new(array![1], array![[0.0, 0.0]]).is_err());
    }

    #[test]
    fn reserved_names_are_rejected() {
        let mut atoms: Atoms = two_atoms();
        let result = atoms.set_prop("pos", array![1.0, 2.0]);
        assert!(matches!(result, Err(Error::ReservedProperty(ref name)) if name == "pos"));
        assert!(atoms.set_prop(ATYPE_KEY, array![1_i64, 1]).is_err());
    }

    #[test]
    fn property_length_must_match_atoms() {
        let mut atoms: Atoms = two_atoms();
        assert!(atoms.set_prop("charge", array![0.1, -0.1, 0.0]).is_err());
        assert!(atoms.set_prop("charge", Array::from_elem(IxDyn(&[]), 0.1)).is_err());
        assert!(atoms.set_prop("charge", array![0.1, -0.1]).is_ok());
    }

    #[test]
    fn names_list_reserved_then_sorted_extras() {
        let mut atoms: Atoms = two_atoms();
        atoms.set_prop("velocity", Array2::<f64>::zeros((2, 3))).unwrap();
        atoms.set_prop("charge", array![0.1, -0.1]).unwrap();
        assert_eq!(atoms.prop_names(), vec!["atype", "pos", "charge", "velocity"]);
        assert!(atoms.remove_prop("velocity").is_some());
        assert_eq!(atoms.prop_names(), vec!["atype", "pos", "charge"]);
    }

    #[test]
    fn reserved_properties_are_readable() {
        let atoms: Atoms = two_atoms();
        assert_eq!(atoms.prop("atype"), Some(AtomsProperty::from(array![1_i64, 2])));
        let pos: AtomsProperty = atoms.prop("pos").unwrap();
        assert_eq!(pos.len(), 2);
        assert_eq!(pos.ndim(), 2);
        assert!(atoms.prop("charge").is_none());
        assert_eq!(atoms.natypes(), 2);
    }

    #[test]
    fn deserialized_atoms_keep_their_positions() {
        let atoms: Atoms = two_atoms();
        let config_string: String = toml::to_string(&atoms).unwrap();
        let restored: Atoms = toml::from_str(&config_string).unwrap();
        assert_eq!(restored, atoms);
    }

    #[test]
    fn deserialization_checks_shapes() {
        let data: AtomsData = AtomsData {
            atype: array![1, 2, 2],
            pos: array![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
            extra: HashMap::new(),
        };
        let config_string: String = toml::to_string(&data).unwrap();
        assert!(toml::from_str::<Atoms>(&config_string).is_err());
    }
}
