use crate::basis::{chebyshev, legendre3, INCIDENCE_RANGE, WIND_SPEED_RANGE};
use crate::coefficients::{CoefficientTable, CMOD_IFR2_COEFFICIENTS};
use crate::traits::{ForwardModel, Scalar};

/// Reference incidence angle (degrees) of the Legendre expansion.
const REFERENCE_INCIDENCE: f64 = 36.0;
/// Half-width (degrees) of the Legendre expansion in incidence.
const INCIDENCE_SCALE: f64 = 19.0;

/// The CMOD-IFR2 geophysical model function.
///
/// Stateless: every evaluation reads the shared, immutable coefficient table,
/// so a single instance can be used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct CmodIfr2 {
    coefficients: &'static CoefficientTable,
}

impl Default for CmodIfr2 {
    fn default() -> Self {
        Self::new()
    }
}

/// Intermediate terms of one CMOD-IFR2 evaluation.
///
/// `nrcs = b0 * (1 + b1 * cos(phi) + tanh(b2) * cos(2 phi))`
/// with `b0 = 10^(alpha + beta * sqrt(v))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTerms<T> {
    pub alpha: T,
    pub beta: T,
    pub b0: T,
    pub b1: T,
    pub b2: T,
    pub cos_dir: T,
    pub cos_2dir: T,
}

impl<T: Scalar> ModelTerms<T> {
    pub fn nrcs(&self) -> T {
        self.b0 * (T::one() + self.b1 * self.cos_dir + self.b2.tanh() * self.cos_2dir)
    }
}

impl CmodIfr2 {
    pub const fn new() -> Self {
        Self {
            coefficients: &CMOD_IFR2_COEFFICIENTS,
        }
    }

    pub fn coefficients(&self) -> &CoefficientTable {
        self.coefficients
    }

    /// Evaluates every intermediate term of the model.
    ///
    /// No input is validated. A negative wind speed gives a NaN `b0`, and inputs
    /// outside the nominal ranges are extrapolated through the polynomial bases.
    pub fn terms<T: Scalar>(&self, wind_speed: T, wind_dir: T, inc_angle: T) -> ModelTerms<T> {
        let c = |i: usize| T::constant(self.coefficients[i]);

        // Amplitude: Legendre expansion around the reference incidence
        let tetai =
            (inc_angle - T::constant(REFERENCE_INCIDENCE)) / T::constant(INCIDENCE_SCALE);
        let [p1, p2, p3] = legendre3(tetai);
        let alpha = c(1) + c(2) * p1 + c(3) * p2 + c(4) * p3;
        let beta = c(5) + c(6) * p1 + c(7) * p2;

        let cos_dir = wind_dir.to_radians().cos();
        let cos_2dir = T::constant(2.0) * cos_dir * cos_dir - T::one();

        // Harmonics: Chebyshev expansions in normalized speed and incidence
        let mut pv = [T::zero(); 4];
        chebyshev(WIND_SPEED_RANGE.normalize(wind_speed), &mut pv);
        let mut pt = [T::zero(); 3];
        chebyshev(INCIDENCE_RANGE.normalize(inc_angle), &mut pt);

        let b1 = c(8)
            + c(9) * pv[1]
            + (c(10) + c(11) * pv[1]) * pt[1]
            + (c(12) + c(13) * pv[1]) * pt[2];
        let b2 = c(14)
            + c(15) * pt[1]
            + c(16) * pt[2]
            + (c(17) + c(18) * pt[1] + c(19) * pt[2]) * pv[1]
            + (c(20) + c(21) * pt[1] + c(22) * pt[2]) * pv[2]
            + (c(23) + c(24) * pt[1] + c(25) * pt[2]) * pv[3];

        let b0 = T::constant(10.0).powf(alpha + beta * wind_speed.sqrt());

        ModelTerms {
            alpha,
            beta,
            b0,
            b1,
            b2,
            cos_dir,
            cos_2dir,
        }
    }
}

impl<T: Scalar> ForwardModel<T> for CmodIfr2 {
    fn nrcs(&self, wind_speed: T, wind_dir: T, inc_angle: T) -> T {
        self.terms(wind_speed, wind_dir, inc_angle).nrcs()
    }
}

/// Simulated NRCS (linear) for a wind speed (m/s), wind direction relative to
/// the look azimuth (deg) and incidence angle (deg).
pub fn cmod_ifr2(wind_speed: f64, wind_dir: f64, inc_angle: f64) -> f64 {
    CmodIfr2::new().nrcs(wind_speed, wind_dir, inc_angle)
}

pub fn linear_to_db<T: Scalar>(value: T) -> T {
    T::constant(10.0) * value.log10()
}

pub fn db_to_linear<T: Scalar>(value: T) -> T {
    T::constant(10.0).powf(value / T::constant(10.0))
}
