use soilmix_core::analysis::analyze;
use soilmix_core::sensor::{NutrientReadingSource, SimulatedSensor};
use std::path::PathBuf;

use crate::output;

pub fn run(
    seed: Option<u64>,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), soilmix_core::error::SoilmixError> {
    eprintln!("Connecting to ESP32...");
    let sensor = match seed {
        Some(seed) => SimulatedSensor::seeded(seed),
        None => SimulatedSensor::new(),
    };
    let reading = sensor.read()?;

    if let Some(path) = out {
        let json = serde_json::to_string_pretty(&reading)?;
        std::fs::write(&path, json)?;
        eprintln!("Reading written to {}", path.display());
    }

    let profile = analyze(&reading);
    match output_format {
        "json" => output::json::print(&profile)?,
        _ => output::table::print_profile(&profile),
    }

    Ok(())
}
