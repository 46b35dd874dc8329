// crates/evaploss-ffi-wasm/src/lib.rs
//
// WASM bindings: strict, defaulting, and diagnostic loss exports.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;

use evaploss_solver as solver;

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* --------------------------- Shared DTOs (JS) --------------------------- */

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JsInput {
    pub vpd_psi: f64,
    pub nozzle_64ths: u32,
    pub pressure_psi: f64,
    pub wind_mph: f64,
}
impl From<JsInput> for solver::Input {
    fn from(i: JsInput) -> Self {
        solver::Input {
            vpd_psi: i.vpd_psi,
            nozzle_64ths: i.nozzle_64ths,
            pressure_psi: i.pressure_psi,
            wind_mph: i.wind_mph,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsDiagnostics {
    pub valid: bool,
    pub loss_pct: Option<f64>,
    pub error: Option<String>,
    pub out_of_range: bool,
}

/* ------------------------------- exports -------------------------------- */

/// Evaporation loss [%]; rejects out-of-domain inputs with an error string.
#[wasm_bindgen]
pub fn evaporation_loss_js(input: JsValue) -> Result<f64, JsValue> {
    let inp: JsInput = swb::from_value(input)?;
    solver::evaporation_loss(&inp.into()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Evaporation loss [%], or `default_pct` when the input is out of domain.
#[wasm_bindgen]
pub fn evaporation_loss_or_js(input: JsValue, default_pct: f64) -> Result<f64, JsValue> {
    let inp: JsInput = swb::from_value(input)?;
    Ok(solver::evaporation_loss_or(&inp.into(), default_pct))
}

/// Full diagnostics object: validity, loss, error text, nominal-band flag.
#[wasm_bindgen]
pub fn diagnose_js(input: JsValue) -> Result<JsValue, JsValue> {
    let inp: JsInput = swb::from_value(input)?;
    let d = solver::diagnose(&inp.into());

    let out = JsDiagnostics {
        valid: d.valid,
        loss_pct: d.loss_pct,
        error: d.error,
        out_of_range: d.out_of_range,
    };

    swb::to_value(&out).map_err(|e| e.into())
}

/// Valid parameter ranges as display text (for form tooltips).
#[wasm_bindgen]
pub fn parameter_ranges_js() -> String {
    solver::parameter_ranges()
}
