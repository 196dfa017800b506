use crate::error::Error;
use crate::settings::Tolerance;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// Simulation box given by three cell vectors (rows of `vects`) and an origin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationBox {
    pub vects: Array2<f64>,
    pub origin: Array1<f64>,
}

impl Default for SimulationBox {
    fn default() -> Self {
        SimulationBox {
            vects: Array2::eye(3),
            origin: Array1::zeros(3),
        }
    }
}

impl SimulationBox {
    pub fn new(vects: Array2<f64>) -> Result<Self, Error> {
        if vects.dim() != (3, 3) {
            return Err(Error::shape(format!(
                "box vectors must be 3x3, got {:?}",
                vects.shape()
            )));
        }
        Ok(SimulationBox {
            vects,
            origin: Array1::zeros(3),
        })
    }

    pub fn with_origin(mut self, origin: Array1<f64>) -> Result<Self, Error> {
        if origin.len() != 3 {
            return Err(Error::shape(format!(
                "box origin must have 3 components, got {}",
                origin.len()
            )));
        }
        self.origin = origin;
        Ok(self)
    }

    pub fn cubic(a: f64) -> Self {
        SimulationBox {
            vects: Array2::eye(3) * a,
            origin: Array1::zeros(3),
        }
    }

    /// Builds the box from lattice lengths and angles (in degrees). The a vector
    /// points along x and the b vector lies in the xy plane.
    pub fn from_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self, Error> {
        let (cos_alpha, cos_beta) = (alpha.to_radians().cos(), beta.to_radians().cos());
        let (sin_gamma, cos_gamma) = gamma.to_radians().sin_cos();

        let cx: f64 = c * cos_beta;
        let cy: f64 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let cz_squared: f64 = c * c - cx * cx - cy * cy;
        if !(cz_squared > 0.0) || sin_gamma.abs() < f64::EPSILON {
            return Err(Error::shape(format!(
                "lattice parameters ({}, {}, {}, {}, {}, {}) do not span a volume",
                a, b, c, alpha, beta, gamma
            )));
        }

        let vects: Array2<f64> = array![
            [a, 0.0, 0.0],
            [b * cos_gamma, b * sin_gamma, 0.0],
            [cx, cy, cz_squared.sqrt()]
        ];
        Self::new(vects)
    }

    pub fn avect(&self) -> ArrayView1<f64> {
        self.vects.row(0)
    }

    pub fn bvect(&self) -> ArrayView1<f64> {
        self.vects.row(1)
    }

    pub fn cvect(&self) -> ArrayView1<f64> {
        self.vects.row(2)
    }

    pub fn a(&self) -> f64 {
        norm(self.avect())
    }

    pub fn b(&self) -> f64 {
        norm(self.bvect())
    }

    pub fn c(&self) -> f64 {
        norm(self.cvect())
    }

    /// Angle between the b and c vectors in degrees.
    pub fn alpha(&self) -> f64 {
        angle(self.bvect(), self.cvect())
    }

    /// Angle between the a and c vectors in degrees.
    pub fn beta(&self) -> f64 {
        angle(self.avect(), self.cvect())
    }

    /// Angle between the a and b vectors in degrees.
    pub fn gamma(&self) -> f64 {
        angle(self.avect(), self.bvect())
    }

    pub fn volume(&self) -> f64 {
        let (a, b, c) = (self.avect(), self.bvect(), self.cvect());
        let cross: [f64; 3] = [
            b[1] * c[2] - b[2] * c[1],
            b[2] * c[0] - b[0] * c[2],
            b[0] * c[1] - b[1] * c[0],
        ];
        (a[0] * cross[0] + a[1] * cross[1] + a[2] * cross[2]).abs()
    }

    /// A box is hexagonal if a == b, alpha == beta == 90 and gamma == 120.
    pub fn is_hexagonal(&self, tol: &Tolerance) -> bool {
        tol.is_close(self.a(), self.b())
            && tol.is_close(self.alpha(), 90.0)
            && tol.is_close(self.beta(), 90.0)
            && tol.is_close(self.gamma(), 120.0)
    }
}

fn norm(v: ArrayView1<f64>) -> f64 {
    v.dot(&v).sqrt()
}

fn angle(v: ArrayView1<f64>, w: ArrayView1<f64>) -> f64 {
    let cosine: f64 = v.dot(&w) / (norm(v) * norm(w));
    cosine.max(-1.0).min(1.0).acos().to_degrees()
}
