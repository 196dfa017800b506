/// Builds [chemfiles] frames. Only usable when the crate is compiled with the
/// `chemfiles` feature, see [Capability::load](crate::Capability). Without it
/// every conversion is refused with [Error::CapabilityUnavailable](crate::Error).
///
/// The cell vectors are always kept. chemfiles has no per-axis periodicity,
/// so the flags are stored as the `pbc_x`, `pbc_y` and `pbc_z` frame properties.
///
/// [chemfiles]: https://chemfiles.org
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameBackend;

/// Stand-in for `chemfiles::Frame` in builds without chemfiles. It has no
/// values, so no conversion can ever produce one.
#[cfg(not(feature = "chemfiles"))]
#[derive(Clone, Copy, Debug)]
pub enum MissingFrame {}

#[cfg(not(feature = "chemfiles"))]
mod missing_frame {
    use super::{FrameBackend, MissingFrame};
    use crate::convert::AtomsBackend;
    use crate::error::Error;
    use ndarray::prelude::*;

    impl AtomsBackend for FrameBackend {
        type Atoms = MissingFrame;

        const NAME: &'static str = "chemfiles";

        fn build(
            &self,
            _symbols: &[String],
            _positions: ArrayView2<f64>,
            _pbc: [bool; 3],
            _cell: ArrayView2<f64>,
        ) -> Result<MissingFrame, Error> {
            Err(Error::CapabilityUnavailable(Self::NAME))
        }
    }

}

#[cfg(feature = "chemfiles")]
mod chemfiles_frame {
    use super::FrameBackend;
    use crate::convert::AtomsBackend;
    use crate::defaults::PBC_PROPERTY_NAMES;
    use crate::error::Error;
    use chemfiles::{Atom, Frame, Property, UnitCell};
    use ndarray::prelude::*;

    impl AtomsBackend for FrameBackend {
        type Atoms = Frame;

        const NAME: &'static str = "chemfiles";

        fn build(
            &self,
            symbols: &[String],
            positions: ArrayView2<f64>,
            pbc: [bool; 3],
            cell: ArrayView2<f64>,
        ) -> Result<Frame, Error> {
            if positions.dim() != (symbols.len(), 3) || cell.dim() != (3, 3) {
                return Err(Error::shape(format!(
                    "{} symbols with positions of shape {:?} and a cell of shape {:?}",
                    symbols.len(),
                    positions.shape(),
                    cell.shape()
                )));
            }

            let mut frame = Frame::new();
            for (symbol, position) in symbols.iter().zip(positions.outer_iter()) {
                // chemfiles guesses the element from the atom name
                let atom = Atom::new(symbol.as_str());
                frame.add_atom(&atom, [position[0], position[1], position[2]], None::<[f64; 3]>);
            }

            // chemfiles stores the cell vectors as columns
            let mut matrix: [[f64; 3]; 3] = [[0.0; 3]; 3];
            for i in 0..3 {
                for j in 0..3 {
                    matrix[i][j] = cell[[j, i]];
                }
            }
            let unit_cell: UnitCell = UnitCell::from_matrix(matrix);
            frame.set_cell(&unit_cell);

            for (name, &periodic) in PBC_PROPERTY_NAMES.iter().zip(pbc.iter()) {
                frame.set(name, Property::Bool(periodic));
            }
            Ok(frame)
        }
    }

}
