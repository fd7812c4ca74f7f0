//! Regular lookup tables of the forward model over (speed, direction, incidence).

use crate::broadcast::evaluate_array;
use crate::error::ModelError;
use crate::model::linear_to_db;
use anyhow::{Context, Result};
use ndarray::{Array1, Array3, Axis, Ix3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Evenly spaced samples over `[min, max]`, endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl AxisSpec {
    pub fn new(min: f64, max: f64, samples: usize) -> Self {
        Self { min, max, samples }
    }

    pub fn validate(&self, axis: &'static str) -> Result<(), ModelError> {
        let invalid = |reason: &str| ModelError::InvalidAxis {
            axis,
            reason: reason.to_string(),
        };
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if self.max < self.min {
            return Err(invalid("max must not be below min"));
        }
        if self.samples == 0 {
            return Err(invalid("at least one sample is required"));
        }
        Ok(())
    }

    /// Sample positions; a single sample sits at `min`.
    pub fn values(&self) -> Array1<f64> {
        if self.samples <= 1 {
            return Array1::from_elem(self.samples, self.min);
        }
        let step = (self.max - self.min) / (self.samples - 1) as f64;
        let mut values = Array1::from_shape_fn(self.samples, |i| self.min + step * i as f64);
        values[self.samples - 1] = self.max;
        values
    }
}

/// Sampling of the three model inputs for a lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Wind speed axis (m/s).
    pub wind_speed: AxisSpec,
    /// Relative wind direction axis (degrees).
    pub wind_dir: AxisSpec,
    /// Incidence angle axis (degrees).
    pub inc_angle: AxisSpec,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            wind_speed: AxisSpec::new(0.2, 50.0, 250),
            // The model is even in direction, so half a turn covers it.
            wind_dir: AxisSpec::new(0.0, 180.0, 181),
            inc_angle: AxisSpec::new(17.0, 50.0, 34),
        }
    }
}

/// Forward model values on a regular grid, indexed `[speed, direction, incidence]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NrcsTable {
    pub wind_speed: Array1<f64>,
    pub wind_dir: Array1<f64>,
    pub inc_angle: Array1<f64>,
    pub values: Array3<f64>,
}

impl NrcsTable {
    pub fn build(settings: &TableSettings) -> Result<Self> {
        settings.wind_speed.validate("wind speed")?;
        settings.wind_dir.validate("wind direction")?;
        settings.inc_angle.validate("incidence angle")?;

        let wind_speed = settings.wind_speed.values();
        let wind_dir = settings.wind_dir.values();
        let inc_angle = settings.inc_angle.values();
        debug!(
            speeds = wind_speed.len(),
            directions = wind_dir.len(),
            incidences = inc_angle.len(),
            "building NRCS lookup table"
        );

        let speed_grid = wind_speed.view().insert_axis(Axis(1)).insert_axis(Axis(2));
        let dir_grid = wind_dir.view().insert_axis(Axis(1));
        let values = evaluate_array(&speed_grid, &dir_grid, &inc_angle)?
            .into_dimensionality::<Ix3>()
            .context("Lookup table evaluation did not produce a 3-D grid.")?;

        Ok(Self {
            wind_speed,
            wind_dir,
            inc_angle,
            values,
        })
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        self.values.dim()
    }

    pub fn nrcs_at(&self, speed: usize, dir: usize, inc: usize) -> Option<f64> {
        self.values.get((speed, dir, inc)).copied()
    }

    /// The same table with values converted to decibels.
    pub fn to_db(&self) -> Array3<f64> {
        self.values.mapv(linear_to_db)
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisSpec, NrcsTable, TableSettings};
    use crate::error::ModelError;
    use crate::model::cmod_ifr2;

    fn assert_err_contains<T: std::fmt::Debug>(result: anyhow::Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    fn small_settings() -> TableSettings {
        TableSettings {
            wind_speed: AxisSpec::new(5.0, 15.0, 3),
            wind_dir: AxisSpec::new(0.0, 180.0, 5),
            inc_angle: AxisSpec::new(20.0, 50.0, 4),
        }
    }

    #[test]
    fn axis_values_include_endpoints() {
        let values = AxisSpec::new(0.2, 50.0, 250).values();
        assert_eq!(values.len(), 250);
        assert_eq!(values[0], 0.2);
        assert_eq!(values[249], 50.0);
        assert!((values[1] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn single_sample_axis_sits_at_min() {
        let values = AxisSpec::new(36.0, 36.0, 1).values();
        assert_eq!(values.to_vec(), vec![36.0]);
    }

    #[test]
    fn axis_validation_rejects_malformed_ranges() {
        assert!(matches!(
            AxisSpec::new(1.0, 0.0, 3).validate("wind speed"),
            Err(ModelError::InvalidAxis { axis: "wind speed", .. })
        ));
        assert!(AxisSpec::new(f64::NAN, 1.0, 3).validate("x").is_err());
        assert!(AxisSpec::new(0.0, f64::INFINITY, 3).validate("x").is_err());
        assert!(AxisSpec::new(0.0, 1.0, 0).validate("x").is_err());
        assert!(AxisSpec::new(2.0, 2.0, 1).validate("x").is_ok());
    }

    #[test]
    fn build_rejects_invalid_axes() {
        let mut settings = small_settings();
        settings.inc_angle.samples = 0;
        assert_err_contains(NrcsTable::build(&settings), "invalid incidence angle axis");
    }

    #[test]
    fn table_matches_pointwise_evaluation() {
        let table = NrcsTable::build(&small_settings()).expect("table should build");
        assert_eq!(table.shape(), (3, 5, 4));
        for (i, &v) in table.wind_speed.iter().enumerate() {
            for (j, &phi) in table.wind_dir.iter().enumerate() {
                for (k, &theta) in table.inc_angle.iter().enumerate() {
                    assert_eq!(table.nrcs_at(i, j, k), Some(cmod_ifr2(v, phi, theta)));
                }
            }
        }
        assert_eq!(table.nrcs_at(3, 0, 0), None);
    }

    #[test]
    fn decibel_table_matches_linear() {
        let table = NrcsTable::build(&small_settings()).expect("table should build");
        let db = table.to_db();
        let linear = table.values[(1, 2, 3)];
        assert!((db[(1, 2, 3)] - 10.0 * linear.log10()).abs() < 1e-12);
    }

    #[test]
    fn default_settings_cover_nominal_geometry() {
        let settings = TableSettings::default();
        assert_eq!(settings.wind_speed.samples, 250);
        assert_eq!(settings.wind_dir.values()[180], 180.0);
        assert_eq!(settings.inc_angle.values().to_vec()[0], 17.0);
    }

    #[test]
    fn settings_load_from_json_with_defaults() {
        let json = r#"{ "wind_speed": { "min": 1.0, "max": 2.0, "samples": 2 } }"#;
        let settings: TableSettings = serde_json::from_str(json).expect("settings should parse");
        assert_eq!(settings.wind_speed, AxisSpec::new(1.0, 2.0, 2));
        assert_eq!(settings.wind_dir, TableSettings::default().wind_dir);
        assert_eq!(settings.inc_angle, TableSettings::default().inc_angle);
    }

    #[test]
    fn table_serializes_to_json() {
        let table = NrcsTable::build(&small_settings()).expect("table should build");
        let json = serde_json::to_string(&table).expect("table should serialize");
        let restored: NrcsTable = serde_json::from_str(&json).expect("table should deserialize");
        assert_eq!(restored.shape(), table.shape());
        assert_eq!(restored.wind_dir, table.wind_dir);
    }
}
