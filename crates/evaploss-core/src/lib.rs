//! Core evaporation-loss math utilities
//!
//! Includes:
//! - Units & conversions (metric/imperial)
//! - Saturation vapor pressure & vapor-pressure deficit helpers
//!
//! The loss chart itself lives in `evaploss-nomograph` and is printed in
//! imperial units (psi, 64ths of an inch, mph). Field data and the published
//! validation table are metric, so the conversions here bridge the two.

/// -------------------------
/// Units & Conversions
/// -------------------------

pub fn mm_to_64ths_inch(mm: f64) -> f64 { mm / 25.4 * 64.0 }
pub fn sixty_fourths_inch_to_mm(n: f64) -> f64 { n * 25.4 / 64.0 }

pub fn kpa_to_psi(kpa: f64) -> f64 { kpa * 0.145_038 }
pub fn psi_to_kpa(psi: f64) -> f64 { psi / 0.145_038 }

pub fn ms_to_mph(v: f64) -> f64 { v * 2.237 }
pub fn mph_to_ms(v: f64) -> f64 { v / 2.237 }

/// -------------------------
/// Atmosphere
/// -------------------------

/// Saturation vapor pressure [kPa] over water at `temp_c` [°C]
/// (Tetens formula).
pub fn saturation_vapor_pressure_kpa(temp_c: f64) -> f64 {
    0.610_94 * f64::exp((17.625 * temp_c) / (temp_c + 243.04))
}

/// Vapor-pressure deficit [kPa] from air temperature [°C] and relative
/// humidity [%]. Humidity is clamped to 0..100.
pub fn vapor_pressure_deficit_kpa(temp_c: f64, humidity_pct: f64) -> f64 {
    let rh = (humidity_pct / 100.0).clamp(0.0, 1.0);
    saturation_vapor_pressure_kpa(temp_c) * (1.0 - rh)
}

/// Vapor-pressure deficit [psi], the unit the loss chart's VPD scale is
/// printed in.
pub fn vapor_pressure_deficit_psi(temp_c: f64, humidity_pct: f64) -> f64 {
    kpa_to_psi(vapor_pressure_deficit_kpa(temp_c, humidity_pct))
}

/* -------------------------------- tests -------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn nozzle_sizes_from_the_published_table() {
        // Metric nozzle diameters land on (or next to) whole 64ths.
        assert_abs_diff_eq!(mm_to_64ths_inch(3.18), 8.01, epsilon = 0.01);
        assert_abs_diff_eq!(mm_to_64ths_inch(4.76), 11.99, epsilon = 0.01);
        assert_abs_diff_eq!(mm_to_64ths_inch(6.35), 16.0, epsilon = 0.01);
        assert_abs_diff_eq!(mm_to_64ths_inch(12.7), 32.0, epsilon = 0.01);
        assert_abs_diff_eq!(sixty_fourths_inch_to_mm(16.0), 6.35, epsilon = 1e-9);
    }

    #[test]
    fn pressure_and_wind_conversions() {
        assert_abs_diff_eq!(kpa_to_psi(207.0), 30.02, epsilon = 0.01);
        assert_abs_diff_eq!(kpa_to_psi(414.0), 60.05, epsilon = 0.01);
        assert_abs_diff_eq!(kpa_to_psi(552.0), 80.06, epsilon = 0.01);
        assert_abs_diff_eq!(psi_to_kpa(kpa_to_psi(414.0)), 414.0, epsilon = 1e-9);

        assert_abs_diff_eq!(ms_to_mph(1.3), 2.91, epsilon = 0.01);
        assert_abs_diff_eq!(ms_to_mph(4.5), 10.07, epsilon = 0.01);
        assert_abs_diff_eq!(mph_to_ms(ms_to_mph(4.5)), 4.5, epsilon = 1e-9);
    }

    #[test]
    fn tetens_saturation_pressure() {
        // Known points: ~0.611 kPa at 0 °C, ~2.34 kPa at 20 °C, ~4.24 kPa at 30 °C.
        assert_abs_diff_eq!(saturation_vapor_pressure_kpa(0.0), 0.611, epsilon = 0.005);
        assert_abs_diff_eq!(saturation_vapor_pressure_kpa(20.0), 2.34, epsilon = 0.02);
        assert_abs_diff_eq!(saturation_vapor_pressure_kpa(30.0), 4.24, epsilon = 0.02);
    }

    #[test]
    fn deficit_shrinks_with_humidity() {
        let dry = vapor_pressure_deficit_kpa(30.0, 20.0);
        let humid = vapor_pressure_deficit_kpa(30.0, 80.0);
        assert!(dry > humid);
        // Saturated air has no deficit; out-of-range humidity clamps.
        assert_abs_diff_eq!(vapor_pressure_deficit_kpa(30.0, 100.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(vapor_pressure_deficit_kpa(30.0, 130.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn deficit_in_chart_units() {
        // 30 °C at 40 % RH sits around 0.37 psi, mid-chart on the VPD scale.
        let vpd = vapor_pressure_deficit_psi(30.0, 40.0);
        assert_abs_diff_eq!(vpd, 0.369, epsilon = 0.005);
    }
}
