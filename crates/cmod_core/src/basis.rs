//! Polynomial bases and range normalization used by the model.

use crate::traits::Scalar;
use serde::{Deserialize, Serialize};

/// A nominal calibration range used to rescale an input onto `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NominalRange {
    pub min: f64,
    pub max: f64,
}

/// Incidence angles (degrees) the Chebyshev terms were fitted over.
pub const INCIDENCE_RANGE: NominalRange = NominalRange {
    min: 18.0,
    max: 58.0,
};

/// Wind speeds (m/s) the Chebyshev terms were fitted over.
pub const WIND_SPEED_RANGE: NominalRange = NominalRange {
    min: 3.0,
    max: 25.0,
};

impl NominalRange {
    /// Maps `x` affinely so that `min -> -1` and `max -> 1`.
    /// Values outside the range are extrapolated, not clamped.
    pub fn normalize<T: Scalar>(&self, x: T) -> T {
        let two = T::constant(2.0);
        let sum = T::constant(self.min + self.max);
        let width = T::constant(self.max - self.min);
        (two * x - sum) / width
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Legendre polynomials P1, P2, P3 at `x`.
pub fn legendre3<T: Scalar>(x: T) -> [T; 3] {
    let one = T::one();
    let two = T::constant(2.0);
    let x_sq = x * x;
    let p2 = (T::constant(3.0) * x_sq - one) / two;
    let p3 = (T::constant(5.0) * x_sq - T::constant(3.0)) * x / two;
    [x, p2, p3]
}

/// Fills `out` with Chebyshev polynomials of the first kind T0..T(n-1) at `x`.
pub fn chebyshev<T: Scalar>(x: T, out: &mut [T]) {
    let two = T::constant(2.0);
    for n in 0..out.len() {
        out[n] = match n {
            0 => T::one(),
            1 => x,
            _ => two * x * out[n - 1] - out[n - 2],
        };
    }
}
