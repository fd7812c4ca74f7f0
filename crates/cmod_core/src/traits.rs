use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types the forward model can be evaluated in.
/// Must support basic arithmetic, the elementary functions, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {
    /// Converts a model constant into this scalar type.
    fn constant(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A geophysical model function mapping a wind vector and viewing geometry to backscatter.
pub trait ForwardModel<T: Scalar> {
    /// Evaluates the normalized radar cross section (linear units).
    /// wind_speed: wind speed in m/s
    /// wind_dir: wind direction relative to the antenna look azimuth, in degrees
    /// inc_angle: incidence angle in degrees
    fn nrcs(&self, wind_speed: T, wind_dir: T, inc_angle: T) -> T;
}
