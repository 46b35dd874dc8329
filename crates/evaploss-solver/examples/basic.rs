//! Evaluate the worked example from the 1987 paper, then sweep a few field
//! scenarios through the diagnostics shape.
//!
//! ```bash
//! cargo run -p evaploss-solver --example basic
//! ```

use anyhow::Result;
use evaploss_solver::{diagnose, evaporation_loss, parameter_ranges, Input};

fn main() -> Result<()> {
    println!("{}\n", parameter_ranges());

    let loss = evaporation_loss(&Input::default())?;
    println!("standard conditions (0.6 psi VPD, 12/64\" nozzle, 40 psi, 5 mph):");
    println!("  evaporation loss: {loss:.2} %\n");

    let scenarios = [
        ("calm morning, small nozzle",
         Input { vpd_psi: 0.2, nozzle_64ths: 8, pressure_psi: 20.0, wind_mph: 0.0 }),
        ("hot afternoon, high pressure",
         Input { vpd_psi: 0.9, nozzle_64ths: 32, pressure_psi: 70.0, wind_mph: 12.0 }),
        ("breezy midday",
         Input { vpd_psi: 0.5, nozzle_64ths: 20, pressure_psi: 50.0, wind_mph: 8.0 }),
        ("bad data from the field logger",
         Input { vpd_psi: 1.8, nozzle_64ths: 12, pressure_psi: 40.0, wind_mph: 5.0 }),
    ];

    for (label, input) in scenarios {
        let d = diagnose(&input);
        print!("{label}: ");
        match d.loss_pct {
            Some(loss) if d.out_of_range => {
                println!("{loss:.2} % (outside the chart's nominal 0-40 % band)");
            }
            Some(loss) => println!("{loss:.2} %"),
            None => println!("rejected ({})", d.error.unwrap_or_default()),
        }
    }

    Ok(())
}
