//! evaploss-nomograph
//!
//! Numerical replay of the sprinkler evaporation-loss nomograph from
//! Trimmer (1987), "Sprinkler Evaporation Loss Equation", J. Irrigation and
//! Drainage Engineering 113(4). The printed chart solves
//!
//!   E [%] = f(vapor-pressure deficit, nozzle diameter, pressure, wind)
//!
//! by laying a straightedge across five vertical scales. Each scale lives
//! here as digitized (value, ordinate) tick pairs; evaluation reads the four
//! input scales, crosses the chart's two pivot columns, and reads the loss
//! scale back at the height the straightedge crosses it.
//!
//! Exports:
//!   - `Scale`: one digitized scale with a clamped piecewise-linear lookup
//!   - `Nomograph`: the five scales plus the straightedge pipeline
//!   - `Nomograph::trimmer_1987()` / `Nomograph::shared()`

use std::sync::LazyLock;

use thiserror::Error;

/// Defects in digitized scale data, caught at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("scale '{label}': needs at least 2 ticks, got {got}")]
    TooFewTicks { label: &'static str, got: usize },
    #[error("scale '{label}': tick positions must be strictly increasing (tick {index})")]
    UnorderedTicks { label: &'static str, index: usize },
}

/// One chart axis, digitized as (position, reading) tick pairs with strictly
/// increasing positions. For the four input scales the position is the
/// physical value and the reading is the chart ordinate; the flipped loss
/// scale runs the other way around.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    label: &'static str,
    ticks: Vec<(f64, f64)>,
}

impl Scale {
    pub fn new(
        label: &'static str,
        ticks: impl Into<Vec<(f64, f64)>>,
    ) -> Result<Self, ScaleError> {
        let ticks = ticks.into();
        if ticks.len() < 2 {
            return Err(ScaleError::TooFewTicks { label, got: ticks.len() });
        }
        for (i, pair) in ticks.windows(2).enumerate() {
            if pair[1].0 <= pair[0].0 {
                return Err(ScaleError::UnorderedTicks { label, index: i + 1 });
            }
        }
        Ok(Self { label, ticks })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Read the scale at `x`: clamped to the end ticks, linear in between.
    pub fn lookup(&self, x: f64) -> f64 {
        let (first, last) = (self.ticks[0], self.ticks[self.ticks.len() - 1]);
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }
        // First tick at or past x; the clamps above keep hi in 1..len.
        let hi = self.ticks.partition_point(|&(pos, _)| pos < x);
        line_at(x, self.ticks[hi - 1], self.ticks[hi])
    }

    /// The same scale read in the other direction: positions and readings
    /// swapped, re-sorted by the new position.
    pub fn flipped(&self) -> Result<Self, ScaleError> {
        let mut ticks: Vec<(f64, f64)> = self.ticks.iter().map(|&(p, v)| (v, p)).collect();
        ticks.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self::new(self.label, ticks)
    }
}

/// Height of the straight line through `p1` and `p2`, read at `x`.
#[inline]
fn line_at(x: f64, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}

/* --------------------------- chart geometry ---------------------------- */

/// Horizontal positions of the chart's columns, in unit chart width as
/// printed in the 1987 figure. Left half: VPD scale, left pivot, nozzle
/// scale. The loss scale sits near mid-chart. Right half: pressure scale,
/// right pivot, wind scale.
pub mod column {
    pub const VPD: f64 = 0.0;
    pub const PIVOT_LEFT: f64 = 0.237;
    pub const NOZZLE: f64 = 0.439;
    pub const LOSS: f64 = 0.490;
    pub const PRESSURE: f64 = 0.738;
    pub const PIVOT_RIGHT: f64 = 0.870;
    pub const WIND: f64 = 1.000;
}

/* --------------------------- digitized ticks --------------------------- */
/* (value, ordinate) pairs measured off the published figure. The loss     */
/* scale is stored forward here and flipped once at construction.          */

const VPD_TICKS: &[(f64, f64)] = &[
    (0.0, 0.0), (0.1, 0.221), (0.2, 0.381), (0.3, 0.508), (0.4, 0.613),
    (0.5, 0.695), (0.6, 0.762), (0.7, 0.829), (0.8, 0.887), (0.9, 0.949),
    (1.0, 1.0),
];

const NOZZLE_TICKS: &[(f64, f64)] = &[
    (8.0, 1.002), (10.0, 0.895), (12.0, 0.815), (14.0, 0.742), (16.0, 0.675),
    (20.0, 0.563), (24.0, 0.483), (32.0, 0.352), (40.0, 0.233), (48.0, 0.152),
    (64.0, -0.001),
];

const PRESSURE_TICKS: &[(f64, f64)] = &[
    (20.0, 0.0), (25.0, 0.159), (30.0, 0.296), (35.0, 0.407), (40.0, 0.499),
    (45.0, 0.589), (50.0, 0.665), (55.0, 0.735), (60.0, 0.800), (70.0, 0.900),
    (80.0, 0.996),
];

const WIND_TICKS: &[(f64, f64)] = &[
    (0.0, 0.0), (1.0, 0.140), (2.0, 0.246), (3.0, 0.356), (4.0, 0.435),
    (5.0, 0.508), (6.0, 0.578), (7.0, 0.651), (8.0, 0.706), (9.0, 0.760),
    (10.0, 0.811), (11.0, 0.854), (12.0, 0.895), (13.0, 0.930), (15.0, 0.994),
];

const LOSS_TICKS: &[(f64, f64)] = &[
    (0.0, 0.102), (0.5, 0.252), (1.0, 0.360), (2.0, 0.460), (3.0, 0.521),
    (4.0, 0.563), (5.0, 0.599), (6.0, 0.633), (8.0, 0.671), (10.0, 0.702),
    (15.0, 0.758), (20.0, 0.812), (30.0, 0.883), (40.0, 0.917),
];

/* ----------------------------- the chart ------------------------------- */

/// The five digitized scales plus the pre-flipped loss scale.
#[derive(Clone, Debug)]
pub struct Nomograph {
    vpd: Scale,
    nozzle: Scale,
    pressure: Scale,
    wind: Scale,
    /// Loss scale with position and reading swapped and re-sorted, so the
    /// final straightedge height reads back as a percentage. Derived once
    /// here; evaluation never rebuilds it.
    loss_reversed: Scale,
}

impl Nomograph {
    /// Assemble a chart from its five forward scales.
    pub fn new(
        vpd: Scale,
        nozzle: Scale,
        pressure: Scale,
        wind: Scale,
        loss: Scale,
    ) -> Result<Self, ScaleError> {
        let loss_reversed = loss.flipped()?;
        Ok(Self { vpd, nozzle, pressure, wind, loss_reversed })
    }

    /// The chart exactly as digitized from the 1987 figure.
    pub fn trimmer_1987() -> Result<Self, ScaleError> {
        Self::new(
            Scale::new("vapor-pressure deficit", VPD_TICKS)?,
            Scale::new("nozzle diameter", NOZZLE_TICKS)?,
            Scale::new("pressure", PRESSURE_TICKS)?,
            Scale::new("wind velocity", WIND_TICKS)?,
            Scale::new("evaporation loss", LOSS_TICKS)?,
        )
    }

    /// Shared process-wide instance of the 1987 chart, built once on first
    /// use and read-only afterwards.
    pub fn shared() -> &'static Nomograph {
        static CHART: LazyLock<Nomograph> = LazyLock::new(|| {
            Nomograph::trimmer_1987().expect("built-in chart ticks are well-formed")
        });
        &CHART
    }

    /// Replay one straightedge reading.
    ///
    /// The four inputs are read off their scales, blended across the two
    /// pivot columns, and the resulting chart height is read back off the
    /// loss scale. Inputs beyond the digitized tick range clamp to the
    /// nearest end tick; there is no extrapolation.
    pub fn evaluate(
        &self,
        vpd_psi: f64,
        nozzle_64ths: f64,
        pressure_psi: f64,
        wind_mph: f64,
    ) -> f64 {
        let y_vpd = self.vpd.lookup(vpd_psi);
        let y_nozzle = self.nozzle.lookup(nozzle_64ths);
        let y_pressure = self.pressure.lookup(pressure_psi);
        let y_wind = self.wind.lookup(wind_mph);

        // Left line: VPD to nozzle, crossing the left pivot column.
        let pivot_a = line_at(
            column::PIVOT_LEFT,
            (column::VPD, y_vpd),
            (column::NOZZLE, y_nozzle),
        );
        // Right line: pressure to wind, crossing the right pivot column.
        let pivot_b = line_at(
            column::PIVOT_RIGHT,
            (column::PRESSURE, y_pressure),
            (column::WIND, y_wind),
        );
        // Straightedge across both pivots, read at the loss column.
        let height = line_at(
            column::LOSS,
            (column::PIVOT_LEFT, pivot_a),
            (column::PIVOT_RIGHT, pivot_b),
        );

        self.loss_reversed.lookup(height)
    }
}

/* -------------------------------- tests -------------------------------- */
