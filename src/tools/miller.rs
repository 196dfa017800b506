//! Conversions between crystallographic index notations.
//!
//! Every function accepts arrays of any dimension whose last axis holds the
//! index terms, i.e. `(..., 3)` Miller or `(..., 4)` Miller-Bravais indices,
//! and transforms each of these lanes independently.

use crate::error::Error;
use crate::settings::Tolerance;
use crate::system::SimulationBox;
use ndarray::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Conventional cell setting relative to a primitive cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeSetting {
    /// primitive
    P,
    /// side-centered on the a face
    A,
    /// side-centered on the b face
    B,
    /// side-centered on the c face
    C,
    /// body-centered
    I,
    /// face-centered
    F,
}

impl FromStr for LatticeSetting {
    type Err = Error;

    fn from_str(setting: &str) -> Result<Self, Self::Err> {
        match setting {
            "p" => Ok(LatticeSetting::P),
            "a" => Ok(LatticeSetting::A),
            "b" => Ok(LatticeSetting::B),
            "c" => Ok(LatticeSetting::C),
            "i" => Ok(LatticeSetting::I),
            "f" => Ok(LatticeSetting::F),
            _ => Err(Error::UnknownSetting(setting.to_string())),
        }
    }
}

impl fmt::Display for LatticeSetting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            LatticeSetting::P => "p",
            LatticeSetting::A => "a",
            LatticeSetting::B => "b",
            LatticeSetting::C => "c",
            LatticeSetting::I => "i",
            LatticeSetting::F => "f",
        };
        write!(f, "{}", name)
    }
}

impl LatticeSetting {
    /// Primitive cell vectors (rows) in units of the conventional cell.
    fn primitive_vectors(&self) -> Array2<f64> {
        match self {
            LatticeSetting::P => Array2::eye(3),
            LatticeSetting::A => array![[1.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.0, -0.5, 0.5]],
            LatticeSetting::B => array![[0.5, 0.0, 0.5], [0.0, 1.0, 0.0], [-0.5, 0.0, 0.5]],
            LatticeSetting::C => array![[0.5, 0.5, 0.0], [-0.5, 0.5, 0.0], [0.0, 0.0, 1.0]],
            LatticeSetting::I => array![[0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, 0.5]],
            LatticeSetting::F => array![[0.5, 0.5, 0.0], [0.5, 0.0, 0.5], [0.0, 0.5, 0.5]],
        }
    }

    /// Conventional cell vectors (rows) in units of the primitive cell.
    fn conventional_vectors(&self) -> Array2<f64> {
        match self {
            LatticeSetting::P => Array2::eye(3),
            LatticeSetting::A => array![[1.0, 0.0, 0.0], [0.0, 1.0, -1.0], [0.0, 1.0, 1.0]],
            LatticeSetting::B => array![[1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 1.0]],
            LatticeSetting::C => array![[1.0, -1.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            LatticeSetting::I => array![[0.0, -1.0, -1.0], [1.0, 1.0, 0.0], [1.0, 0.0, 1.0]],
            LatticeSetting::F => array![[1.0, 1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, 1.0, 1.0]],
        }
    }
}

/// Converts (hkl) plane indices to hexagonal (hkil) Miller-Bravais indices.
pub fn plane3to4<D: Dimension>(indices: ArrayView<f64, D>) -> Result<Array<f64, D>, Error> {
    transform_lanes(indices, 3, 4, |hkl, mut hkil| {
        hkil[0] = hkl[0];
        hkil[1] = hkl[1];
        hkil[2] = -(hkl[0] + hkl[1]);
        hkil[3] = hkl[2];
        Ok(())
    })
}

/// Converts hexagonal (hkil) Miller-Bravais plane indices to (hkl) indices.
/// Fails if h + k + i != 0.
pub fn plane4to3<D: Dimension>(
    indices: ArrayView<f64, D>,
    tol: &Tolerance,
) -> Result<Array<f64, D>, Error> {
    transform_lanes(indices, 4, 3, |hkil, mut hkl| {
        check_sum(hkil, "h+k+i", tol)?;
        hkl[0] = hkil[0];
        hkl[1] = hkil[1];
        hkl[2] = hkil[3];
        Ok(())
    })
}

/// Converts [uvw] direction indices to hexagonal [uvtw] Miller-Bravais indices.
pub fn vector3to4<D: Dimension>(indices: ArrayView<f64, D>) -> Result<Array<f64, D>, Error> {
    transform_lanes(indices, 3, 4, |uvw, mut uvtw| {
        uvtw[0] = (2.0 * uvw[0] - uvw[1]) / 3.0;
        uvtw[1] = (2.0 * uvw[1] - uvw[0]) / 3.0;
        uvtw[2] = -(uvtw[0] + uvtw[1]);
        uvtw[3] = uvw[2];
        Ok(())
    })
}

/// Converts hexagonal [uvtw] Miller-Bravais direction indices to [uvw]
/// indices. Fails if u + v + t != 0.
pub fn vector4to3<D: Dimension>(
    indices: ArrayView<f64, D>,
    tol: &Tolerance,
) -> Result<Array<f64, D>, Error> {
    transform_lanes(indices, 4, 3, |uvtw, mut uvw| {
        check_sum(uvtw, "u+v+t", tol)?;
        uvw[0] = 2.0 * uvtw[0] + uvtw[1];
        uvw[1] = 2.0 * uvtw[1] + uvtw[0];
        uvw[2] = uvtw[3];
        Ok(())
    })
}

/// Converts [uvw] or hexagonal [uvtw] crystal indices into Cartesian vectors
/// of the given box. Four-term indices require a hexagonal box.
pub fn vector_crystal_to_cartesian<D: Dimension>(
    indices: ArrayView<f64, D>,
    simbox: &SimulationBox,
    tol: &Tolerance,
) -> Result<Array<f64, D>, Error> {
    let indices: Array<f64, D> = if indices.shape().last() == Some(&4) {
        if !simbox.is_hexagonal(tol) {
            return Err(Error::NonHexagonalBox);
        }
        vector4to3(indices, tol)?
    } else {
        indices.to_owned()
    };

    let vects: ArrayView2<f64> = simbox.vects.view();
    transform_lanes(indices.view(), 3, 3, |uvw, mut xyz| {
        xyz.assign(&uvw.dot(&vects));
        Ok(())
    })
}

/// Converts [uvw] indices relative to a primitive cell into indices relative
/// to the conventional cell of the given setting.
pub fn vector_primitive_to_conventional<D: Dimension>(
    indices: ArrayView<f64, D>,
    setting: LatticeSetting,
) -> Result<Array<f64, D>, Error> {
    let lattice: Array2<f64> = setting.primitive_vectors();
    transform_lanes(indices, 3, 3, |uvw, mut converted| {
        converted.assign(&uvw.dot(&lattice));
        Ok(())
    })
}

/// Converts [uvw] indices relative to the conventional cell of the given
/// setting into indices relative to the primitive cell.
pub fn vector_conventional_to_primitive<D: Dimension>(
    indices: ArrayView<f64, D>,
    setting: LatticeSetting,
) -> Result<Array<f64, D>, Error> {
    let lattice: Array2<f64> = setting.conventional_vectors();
    transform_lanes(indices, 3, 3, |uvw, mut converted| {
        converted.assign(&uvw.dot(&lattice));
        Ok(())
    })
}

fn index_axis<D: Dimension>(indices: &ArrayView<f64, D>, terms: usize) -> Result<Axis, Error> {
    match indices.shape().last() {
        Some(&n) if n == terms => Ok(Axis(indices.ndim() - 1)),
        _ => Err(Error::shape(format!(
            "invalid index dimensions {:?}, expected (..., {})",
            indices.shape(),
            terms
        ))),
    }
}

fn check_sum(lane: ArrayView1<f64>, terms: &'static str, tol: &Tolerance) -> Result<(), Error> {
    let sum: f64 = lane[0] + lane[1] + lane[2];
    if tol.is_close(sum, 0.0) {
        Ok(())
    } else {
        Err(Error::NonZeroIndexSum { terms, sum })
    }
}

fn transform_lanes<D, F>(
    indices: ArrayView<f64, D>,
    from: usize,
    to: usize,
    transform: F,
) -> Result<Array<f64, D>, Error>
where
    D: Dimension,
    F: Fn(ArrayView1<f64>, ArrayViewMut1<f64>) -> Result<(), Error>,
{
    let axis: Axis = index_axis(&indices, from)?;
    let mut dim: D = indices.raw_dim();
    dim[axis.index()] = to;
    let mut transformed: Array<f64, D> = Array::zeros(dim);
    for (old, new) in indices.lanes(axis).into_iter().zip(transformed.lanes_mut(axis)) {
        transform(old, new)?;
    }
    Ok(transformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn plane_indices_three_to_four() {
        let hkil: Array1<f64> = plane3to4(array![1.0, 1.0, 1.0].view()).unwrap();
        assert_eq!(hkil, array![1.0, 1.0, -2.0, 1.0]);
    }

    #[test]
    fn plane_indices_four_to_three() {
        let tol: Tolerance = Tolerance::default();
        let hkl: Array2<f64> =
            plane4to3(array![[1.0, 0.0, -1.0, 0.0], [1.0, 1.0, -2.0, 3.0]].view(), &tol).unwrap();
        assert_eq!(hkl, array![[1.0, 0.0, 0.0], [1.0, 1.0, 3.0]]);
    }

    #[test]
    fn plane_indices_must_sum_to_zero() {
        let result = plane4to3(array![1.0, 1.0, 1.0, 0.0].view(), &Tolerance::default());
        assert!(matches!(result, Err(Error::NonZeroIndexSum { terms: "h+k+i", .. })));
    }

    #[test]
    fn direction_indices_three_to_four() {
        let uvtw: Array1<f64> = vector3to4(array![1.0, 0.0, 0.0].view()).unwrap();
        assert_abs_diff_eq!(uvtw, array![2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn direction_indices_four_to_three() {
        let tol: Tolerance = Tolerance::default();
        let uvw: Array1<f64> =
            vector4to3(array![2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 0.0].view(), &tol).unwrap();
        assert_abs_diff_eq!(uvw, array![1.0, 0.0, 0.0], epsilon = 1e-12);
        assert!(vector4to3(array![1.0, 0.0, 0.0, 1.0].view(), &tol).is_err());
    }

    #[test]
    fn wrong_number_of_terms_is_rejected() {
        let tol: Tolerance = Tolerance::default();
        assert!(matches!(plane3to4(array![1.0, 0.0].view()), Err(Error::Shape(_))));
        assert!(plane4to3(array![1.0, 0.0, -1.0].view(), &tol).is_err());
        assert!(vector3to4(Array2::<f64>::zeros((2, 4)).view()).is_err());
        assert!(vector4to3(Array::from_elem((), 1.0).view(), &tol).is_err());
    }

    #[test]
    fn leading_dimensions_are_kept() {
        let indices: Array3<f64> = Array3::ones((2, 5, 3));
        let converted: Array3<f64> = plane3to4(indices.view()).unwrap();
        assert_eq!(converted.shape(), &[2, 5, 4]);
        assert_eq!(converted.slice(s![1, 3, ..]), array![1.0, 1.0, -2.0, 1.0]);
    }

    #[test]
    fn crystal_to_cartesian_in_cubic_box() {
        let simbox: SimulationBox = SimulationBox::cubic(4.0);
        let xyz: Array2<f64> = vector_crystal_to_cartesian(
            array![[1.0, 0.0, 0.0], [1.0, 1.0, 1.0]].view(),
            &simbox,
            &Tolerance::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(xyz, array![[4.0, 0.0, 0.0], [4.0, 4.0, 4.0]], epsilon = 1e-12);
    }

    #[test]
    fn crystal_to_cartesian_with_hexagonal_indices() {
        let tol: Tolerance = Tolerance::default();
        let simbox: SimulationBox =
            SimulationBox::from_parameters(2.5, 2.5, 4.0, 90.0, 90.0, 120.0).unwrap();
        let a: Array1<f64> = vector_crystal_to_cartesian(
            array![2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 0.0].view(),
            &simbox,
            &tol,
        )
        .unwrap();
        assert_abs_diff_eq!(a, array![2.5, 0.0, 0.0], epsilon = 1e-12);

        let c: Array1<f64> =
            vector_crystal_to_cartesian(array![0.0, 0.0, 0.0, 1.0].view(), &simbox, &tol).unwrap();
        assert_abs_diff_eq!(c, array![0.0, 0.0, 4.0], epsilon = 1e-12);
    }

    #[test]
    fn hexagonal_indices_need_hexagonal_box() {
        let result = vector_crystal_to_cartesian(
            array![1.0, 0.0, -1.0, 0.0].view(),
            &SimulationBox::cubic(1.0),
            &Tolerance::default(),
        );
        assert!(matches!(result, Err(Error::NonHexagonalBox)));
    }

    #[test]
    fn primitive_and_conventional_settings() {
        let fcc: Array1<f64> =
            vector_primitive_to_conventional(array![1.0, 0.0, 0.0].view(), LatticeSetting::F).unwrap();
        assert_abs_diff_eq!(fcc, array![0.5, 0.5, 0.0], epsilon = 1e-12);

        let bcc: Array1<f64> =
            vector_primitive_to_conventional(array![1.0, 0.0, 0.0].view(), LatticeSetting::I).unwrap();
        assert_abs_diff_eq!(bcc, array![0.5, 0.5, 0.5], epsilon = 1e-12);

        let primitive: Array1<f64> =
            vector_conventional_to_primitive(array![0.5, 0.5, 0.5].view(), LatticeSetting::I).unwrap();
        assert_abs_diff_eq!(primitive, array![1.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn settings_are_inverse_of_each_other() {
        let uvw: Array2<f64> = array![[1.0, 2.0, 3.0], [-1.0, 0.5, 2.0]];
        for name in ["p", "a", "b", "c", "i", "f"].iter() {
            let setting: LatticeSetting = name.parse().unwrap();
            assert_eq!(setting.to_string(), *name);
            let conventional: Array2<f64> =
                vector_primitive_to_conventional(uvw.view(), setting).unwrap();
            let primitive: Array2<f64> =
                vector_conventional_to_primitive(conventional.view(), setting).unwrap();
            assert_abs_diff_eq!(primitive, uvw, epsilon = 1e-12);
        }
    }

    #[test]
    fn unknown_setting_is_rejected() {
        let result = "r".parse::<LatticeSetting>();
        assert!(matches!(result, Err(Error::UnknownSetting(ref name)) if name == "r"));
    }
}
