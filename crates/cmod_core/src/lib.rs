pub mod basis;
pub mod broadcast;
pub mod coefficients;
pub mod error;
pub mod model;
pub mod table;
/// The `cmod_core` crate provides the CMOD-IFR2 geophysical model function: the
/// simulated ocean-surface radar backscatter (NRCS, linear units) for a given wind
/// speed, wind direction relative to the antenna look azimuth, and incidence angle.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `ForwardModel` (the seam inversion code programs against).
/// - **Model**: `CmodIfr2`, evaluated in `f64` or `f32`, with its intermediate terms exposed.
/// - **Broadcast**: elementwise evaluation over `ndarray` inputs of broadcast-compatible shapes.
/// - **Table**: regular (speed, direction, incidence) lookup tables for retrieval pipelines.
///
/// The crate emits `tracing` events and leaves subscriber setup to the host application.
pub mod traits;

pub use broadcast::{evaluate_array, evaluate_array_with};
pub use error::ModelError;
pub use model::{cmod_ifr2, CmodIfr2};
pub use traits::{ForwardModel, Scalar};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
