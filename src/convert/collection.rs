use crate::convert::AtomsBackend;
use crate::error::Error;
use crate::system::elements::atomic_number;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// Plain atom collection: element symbols and positions of the atoms together
/// with the cell vectors (rows) and the periodic boundary flags.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AtomCollection {
    symbols: Vec<String>,
    positions: Array2<f64>,
    cell: Array2<f64>,
    pbc: [bool; 3],
}

impl AtomCollection {
    pub fn new(
        symbols: Vec<String>,
        positions: Array2<f64>,
        pbc: [bool; 3],
        cell: Array2<f64>,
    ) -> Result<AtomCollection, Error> {
        if positions.dim() != (symbols.len(), 3) {
            return Err(Error::shape(format!(
                "positions of {} atoms must have shape ({}, 3), got {:?}",
                symbols.len(),
                symbols.len(),
                positions.shape()
            )));
        }
        if cell.dim() != (3, 3) {
            return Err(Error::shape(format!(
                "cell must be 3x3, got {:?}",
                cell.shape()
            )));
        }
        Ok(AtomCollection {
            symbols,
            positions,
            cell,
            pbc,
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn positions(&self) -> ArrayView2<f64> {
        self.positions.view()
    }

    pub fn cell(&self) -> ArrayView2<f64> {
        self.cell.view()
    }

    pub fn pbc(&self) -> [bool; 3] {
        self.pbc
    }

    /// Atomic numbers of all atoms, 0 for symbols that are not elements.
    pub fn numbers(&self) -> Vec<u8> {
        self.symbols
            .iter()
            .map(|symbol| atomic_number(symbol))
            .collect()
    }
}

/// Builds [AtomCollection]s. Always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollectionBackend;

impl AtomsBackend for CollectionBackend {
    type Atoms = AtomCollection;

    const NAME: &'static str = "atom collection";

    fn build(
        &self,
        symbols: &[String],
        positions: ArrayView2<f64>,
        pbc: [bool; 3],
        cell: ArrayView2<f64>,
    ) -> Result<AtomCollection, Error> {
        AtomCollection::new(symbols.to_vec(), positions.to_owned(), pbc, cell.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inconsistent_lengths_are_rejected() {
        let symbols: Vec<String> = vec!["Fe".to_string(), "O".to_string()];
        let result = CollectionBackend.build(
            &symbols,
            Array2::zeros((3, 3)).view(),
            [true; 3],
            Array2::eye(3).view(),
        );
        assert!(matches!(result, Err(Error::Shape(_))));
    }

    #[test]
    fn cell_must_be_square() {
        let result = AtomCollection::new(Vec::new(), Array2::zeros((0, 3)), [false; 3], Array2::zeros((3, 2)));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_symbols_have_number_zero() {
        let collection: AtomCollection = AtomCollection::new(
            vec!["Si".to_string(), "X".to_string()],
            Array2::zeros((2, 3)),
            [true, false, true],
            Array2::eye(3),
        )
        .unwrap();
        assert_eq!(collection.numbers(), vec![14, 0]);
        assert_eq!(collection.pbc(), [true, false, true]);
    }
}
