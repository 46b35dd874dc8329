//! evaploss-solver
//!
//! Validated front end for the Trimmer (1987) sprinkler evaporation-loss
//! chart in `evaploss-nomograph`.
//! - Input domains are the ranges printed on the chart's scales; anything
//!   outside them is rejected before the chart is touched.
//! - `evaporation_loss` fails on out-of-domain inputs.
//! - `evaporation_loss_or` substitutes a caller default instead of failing.
//! - `diagnose` reports validity, the loss, and whether the reading landed
//!   outside the chart's nominal 0-40 % output band (a data-quality flag,
//!   not an error).
//!
//! Conventions: VPD in psi, nozzle diameter in 64ths of an inch, pressure in
//! psi, wind in mph (the units the original chart is printed in). Metric
//! callers convert via `evaploss-core`.
//!
//! All three call shapes run the same shared chart; none of them keeps its
//! own copy of the scale data.

use evaploss_nomograph::Nomograph;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/* ------------------------------- domains -------------------------------- */

pub const VPD_MIN_PSI: f64 = 0.0;
pub const VPD_MAX_PSI: f64 = 1.0;
pub const NOZZLE_MIN_64THS: u32 = 8;
pub const NOZZLE_MAX_64THS: u32 = 64;
pub const PRESSURE_MIN_PSI: f64 = 20.0;
pub const PRESSURE_MAX_PSI: f64 = 80.0;
pub const WIND_MIN_MPH: f64 = 0.0;
pub const WIND_MAX_MPH: f64 = 15.0;

/// Nominal output band of the chart. Readings outside it are flagged by
/// `diagnose`, never rejected.
pub const LOSS_NOMINAL_MIN_PCT: f64 = 0.0;
pub const LOSS_NOMINAL_MAX_PCT: f64 = 40.0;

/* -------------------------------- inputs -------------------------------- */

/// Inputs for one loss evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Input {
    /// Vapor-pressure deficit [psi]
    pub vpd_psi: f64,
    /// Nozzle diameter [64ths inch]
    pub nozzle_64ths: u32,
    /// Nozzle pressure [psi]
    pub pressure_psi: f64,
    /// Wind velocity [mph]
    pub wind_mph: f64,
}

impl Default for Input {
    /// Mid-chart conditions: the worked example from the 1987 paper.
    fn default() -> Self {
        Self { vpd_psi: 0.6, nozzle_64ths: 12, pressure_psi: 40.0, wind_mph: 5.0 }
    }
}

/// An input field outside the domain printed on its chart scale.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("vpd {value} psi outside {min} to {max} psi")]
    Vpd { value: f64, min: f64, max: f64 },
    #[error("nozzle diameter {value}/64 in outside {min}/64 to {max}/64 in")]
    Nozzle { value: u32, min: u32, max: u32 },
    #[error("pressure {value} psi outside {min} to {max} psi")]
    Pressure { value: f64, min: f64, max: f64 },
    #[error("wind {value} mph outside {min} to {max} mph")]
    Wind { value: f64, min: f64, max: f64 },
}

impl Input {
    /// Check every field against its chart domain; the first offender wins.
    /// NaN fails the range checks like any other out-of-domain value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(VPD_MIN_PSI..=VPD_MAX_PSI).contains(&self.vpd_psi) {
            return Err(ValidationError::Vpd {
                value: self.vpd_psi,
                min: VPD_MIN_PSI,
                max: VPD_MAX_PSI,
            });
        }
        if !(NOZZLE_MIN_64THS..=NOZZLE_MAX_64THS).contains(&self.nozzle_64ths) {
            return Err(ValidationError::Nozzle {
                value: self.nozzle_64ths,
                min: NOZZLE_MIN_64THS,
                max: NOZZLE_MAX_64THS,
            });
        }
        if !(PRESSURE_MIN_PSI..=PRESSURE_MAX_PSI).contains(&self.pressure_psi) {
            return Err(ValidationError::Pressure {
                value: self.pressure_psi,
                min: PRESSURE_MIN_PSI,
                max: PRESSURE_MAX_PSI,
            });
        }
        if !(WIND_MIN_MPH..=WIND_MAX_MPH).contains(&self.wind_mph) {
            return Err(ValidationError::Wind {
                value: self.wind_mph,
                min: WIND_MIN_MPH,
                max: WIND_MAX_MPH,
            });
        }
        Ok(())
    }
}

/* ------------------------------ call shapes ------------------------------ */

/// Evaporation loss [%] for validated inputs.
pub fn evaporation_loss(input: &Input) -> Result<f64, ValidationError> {
    input.validate()?;
    Ok(Nomograph::shared().evaluate(
        input.vpd_psi,
        f64::from(input.nozzle_64ths),
        input.pressure_psi,
        input.wind_mph,
    ))
}

/// Like `evaporation_loss`, but substitutes `default_pct` when validation
/// fails. Never fails.
pub fn evaporation_loss_or(input: &Input, default_pct: f64) -> f64 {
    evaporation_loss(input).unwrap_or(default_pct)
}

/// Outcome of `diagnose`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    pub valid: bool,
    pub loss_pct: Option<f64>,
    pub error: Option<String>,
    /// Set only for valid inputs whose reading fell outside the nominal
    /// 0-40 % band; the chart was queried near the edge of its validated
    /// domain.
    pub out_of_range: bool,
}

/// Loss plus validity and output-band information in one pass.
pub fn diagnose(input: &Input) -> Diagnostics {
    match evaporation_loss(input) {
        Ok(loss) => Diagnostics {
            valid: true,
            loss_pct: Some(loss),
            error: None,
            out_of_range: !(LOSS_NOMINAL_MIN_PCT..=LOSS_NOMINAL_MAX_PCT).contains(&loss),
        },
        Err(e) => Diagnostics {
            valid: false,
            loss_pct: None,
            error: Some(e.to_string()),
            out_of_range: false,
        },
    }
}

/// Human-readable domain summary, for demo/CLI help output.
pub fn parameter_ranges() -> String {
    format!(
        "Valid parameter ranges:\n\
         - vapor-pressure deficit: {VPD_MIN_PSI} to {VPD_MAX_PSI} psi\n\
         - nozzle diameter: {NOZZLE_MIN_64THS} to {NOZZLE_MAX_64THS} (64ths of an inch)\n\
         - nozzle pressure: {PRESSURE_MIN_PSI} to {PRESSURE_MAX_PSI} psi\n\
         - wind velocity: {WIND_MIN_MPH} to {WIND_MAX_MPH} mph\n\
         - expected evaporation loss: {LOSS_NOMINAL_MIN_PCT} to {LOSS_NOMINAL_MAX_PCT} %"
    )
}

/* -------------------------------- tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_input_matches_the_worked_example() {
        let loss = evaporation_loss(&Input::default()).unwrap();
        assert_abs_diff_eq!(loss, 8.314, epsilon = 0.01);
    }

    #[test]
    fn each_field_is_checked() {
        let ok = Input::default();

        let e = evaporation_loss(&Input { vpd_psi: -0.1, ..ok }).unwrap_err();
        assert!(matches!(e, ValidationError::Vpd { value, .. } if value == -0.1));
        assert!(e.to_string().contains("vpd"));

        let e = evaporation_loss(&Input { nozzle_64ths: 5, ..ok }).unwrap_err();
        assert!(matches!(e, ValidationError::Nozzle { value: 5, min: 8, max: 64 }));
        assert!(e.to_string().contains("nozzle"));

        let e = evaporation_loss(&Input { pressure_psi: 15.0, ..ok }).unwrap_err();
        assert!(matches!(e, ValidationError::Pressure { value, .. } if value == 15.0));

        let e = evaporation_loss(&Input { wind_mph: 20.0, ..ok }).unwrap_err();
        assert!(matches!(e, ValidationError::Wind { value, .. } if value == 20.0));
    }

    #[test]
    fn validation_is_fail_fast_in_field_order() {
        // Both vpd and wind are bad; vpd is reported.
        let e = Input { vpd_psi: 2.0, wind_mph: 99.0, ..Input::default() }
            .validate()
            .unwrap_err();
        assert!(matches!(e, ValidationError::Vpd { .. }));
    }

    #[test]
    fn nan_inputs_are_rejected() {
        let e = Input { vpd_psi: f64::NAN, ..Input::default() }.validate().unwrap_err();
        assert!(matches!(e, ValidationError::Vpd { .. }));
    }

    #[test]
    fn boundary_inputs_are_accepted() {
        let low = Input { vpd_psi: 0.0, nozzle_64ths: 8, pressure_psi: 20.0, wind_mph: 0.0 };
        let high = Input { vpd_psi: 1.0, nozzle_64ths: 64, pressure_psi: 80.0, wind_mph: 15.0 };
        assert!(evaporation_loss(&low).unwrap().is_finite());
        assert!(evaporation_loss(&high).unwrap().is_finite());
    }

    #[test]
    fn safe_shape_substitutes_the_default() {
        let bad = Input { vpd_psi: -0.1, ..Input::default() };
        assert_eq!(evaporation_loss_or(&bad, -1.0), -1.0);

        // Valid inputs ignore the default.
        let loss = evaporation_loss_or(&Input::default(), -1.0);
        assert_abs_diff_eq!(loss, 8.314, epsilon = 0.01);
    }

    #[test]
    fn diagnostics_for_valid_input() {
        let d = diagnose(&Input::default());
        assert!(d.valid);
        assert!(d.error.is_none());
        assert!(!d.out_of_range);
        assert_abs_diff_eq!(d.loss_pct.unwrap(), 8.314, epsilon = 0.01);
    }

    #[test]
    fn diagnostics_for_invalid_input() {
        let d = diagnose(&Input { nozzle_64ths: 70, ..Input::default() });
        assert!(!d.valid);
        assert!(d.loss_pct.is_none());
        assert!(!d.out_of_range);
        assert!(d.error.unwrap().contains("nozzle"));
    }

    #[test]
    fn in_domain_inputs_stay_inside_the_nominal_band() {
        // Every scale is bounded, so no valid input can push the reading
        // past the printed 0-40 % loss scale.
        let corners = [
            Input { vpd_psi: 0.0, nozzle_64ths: 8, pressure_psi: 20.0, wind_mph: 0.0 },
            Input { vpd_psi: 1.0, nozzle_64ths: 8, pressure_psi: 80.0, wind_mph: 15.0 },
            Input { vpd_psi: 1.0, nozzle_64ths: 64, pressure_psi: 80.0, wind_mph: 15.0 },
            Input { vpd_psi: 0.0, nozzle_64ths: 64, pressure_psi: 20.0, wind_mph: 0.0 },
        ];
        for input in corners {
            let d = diagnose(&input);
            assert!(d.valid);
            assert!(!d.out_of_range, "{input:?} -> {:?}", d.loss_pct);
        }
    }

    #[test]
    fn ranges_summary_names_every_field() {
        let text = parameter_ranges();
        for needle in ["vapor-pressure deficit", "nozzle", "pressure", "wind", "0 to 40"] {
            assert!(text.contains(needle), "missing {needle:?}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn diagnostics_serialize_with_null_fields() {
        let json = serde_json::to_string(&diagnose(&Input { vpd_psi: 9.0, ..Input::default() }))
            .unwrap();
        assert!(json.contains("\"valid\":false"));
        assert!(json.contains("\"loss_pct\":null"));
    }
}
