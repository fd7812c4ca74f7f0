//! Lookup-table runner.

use crate::init_panic_hook;
use cmod_core::table::{NrcsTable, TableSettings};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct TableOutput {
    wind_speed: Vec<f64>,
    wind_dir: Vec<f64>,
    inc_angle: Vec<f64>,
    shape: [usize; 3],
    /// Row-major over `[speed, direction, incidence]`.
    values: Vec<f64>,
}

impl From<NrcsTable> for TableOutput {
    fn from(table: NrcsTable) -> Self {
        let (ns, nd, ni) = table.shape();
        Self {
            wind_speed: table.wind_speed.to_vec(),
            wind_dir: table.wind_dir.to_vec(),
            inc_angle: table.inc_angle.to_vec(),
            shape: [ns, nd, ni],
            values: table.values.iter().copied().collect(),
        }
    }
}

/// Builds an NRCS lookup table. `settings` may be `undefined` for the default grid.
#[wasm_bindgen]
pub fn nrcs_table(settings: JsValue) -> Result<JsValue, JsValue> {
    init_panic_hook();

    let settings: TableSettings = if settings.is_undefined() || settings.is_null() {
        TableSettings::default()
    } else {
        from_value(settings).map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?
    };

    let table = NrcsTable::build(&settings)
        .map_err(|e| JsValue::from_str(&format!("Lookup table failed: {:#}", e)))?;

    to_value(&TableOutput::from(table)).map_err(|e| JsValue::from_str(&e.to_string()))
}
