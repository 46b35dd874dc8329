//! Print `diagnose` results as JSON, the shape a web or logging consumer
//! would ingest.
//!
//! ```bash
//! cargo run -p evaploss-solver --features serde --example diagnostics
//! ```

use anyhow::Result;
use evaploss_solver::{diagnose, Input};

fn main() -> Result<()> {
    let readings = [
        Input::default(),
        Input { vpd_psi: 0.9, nozzle_64ths: 10, pressure_psi: 75.0, wind_mph: 14.0 },
        Input { vpd_psi: -0.1, nozzle_64ths: 12, pressure_psi: 40.0, wind_mph: 5.0 },
    ];

    for input in readings {
        println!("{}", serde_json::to_string_pretty(&diagnose(&input))?);
    }

    Ok(())
}
