//! WASM bindings for the CMOD-IFR2 forward model.

mod table;

use cmod_core::evaluate_array;
use js_sys::Float64Array;
use ndarray::ArrayView1;
use std::sync::Once;
use wasm_bindgen::prelude::*;

pub use table::nrcs_table;

static PANIC_HOOK: Once = Once::new();

/// Routes Rust panics to the browser console; every entry point calls this first.
pub(crate) fn init_panic_hook() {
    PANIC_HOOK.call_once(console_error_panic_hook::set_once);
}

#[cfg(test)]
pub(crate) fn panic_hook_installed() -> bool {
    PANIC_HOOK.is_completed()
}

#[wasm_bindgen]
pub fn version() -> String {
    init_panic_hook();
    cmod_core::VERSION.to_string()
}

/// Simulated NRCS (linear) for one wind speed (m/s), relative wind direction (deg)
/// and incidence angle (deg).
#[wasm_bindgen]
pub fn cmod_ifr2(wind_speed: f64, wind_dir: f64, inc_angle: f64) -> f64 {
    init_panic_hook();
    cmod_core::cmod_ifr2(wind_speed, wind_dir, inc_angle)
}

/// Elementwise NRCS over flat arrays. Each array must have the common length or length 1.
#[wasm_bindgen]
pub fn cmod_ifr2_array(
    wind_speed: &[f64],
    wind_dir: &[f64],
    inc_angle: &[f64],
) -> Result<Float64Array, JsValue> {
    init_panic_hook();

    let values = evaluate_array(
        &ArrayView1::from(wind_speed),
        &ArrayView1::from(wind_dir),
        &ArrayView1::from(inc_angle),
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let flat: Vec<f64> = values.iter().copied().collect();
    Ok(Float64Array::from(flat.as_slice()))
}
