use rust_decimal::Decimal;
use soilmix_core::error::SoilmixError;
use soilmix_core::model::NutrientReading;
use soilmix_core::reference::builtin;
use soilmix_core::sensor::{FixedReading, JsonFileSource, NutrientReadingSource, SimulatedSensor};
use soilmix_core::session::Advisor;
use std::path::PathBuf;

use crate::output;

/// Where the reading for a mix comes from.
pub enum ReadingInput {
    File(PathBuf),
    Manual(Decimal, Decimal, Decimal),
    Simulated(Option<u64>),
}

impl ReadingInput {
    pub fn from_args(
        file: Option<PathBuf>,
        manual: Option<(Decimal, Decimal, Decimal)>,
        seed: Option<u64>,
    ) -> Self {
        match (file, manual) {
            (Some(path), _) => ReadingInput::File(path),
            (None, Some((n, p, k))) => ReadingInput::Manual(n, p, k),
            (None, None) => ReadingInput::Simulated(seed),
        }
    }

    fn into_source(self) -> Result<Box<dyn NutrientReadingSource>, SoilmixError> {
        Ok(match self {
            ReadingInput::File(path) => Box::new(JsonFileSource::new(path)),
            ReadingInput::Manual(n, p, k) => Box::new(FixedReading(NutrientReading::new(n, p, k)?)),
            ReadingInput::Simulated(Some(seed)) => Box::new(SimulatedSensor::seeded(seed)),
            ReadingInput::Simulated(None) => Box::new(SimulatedSensor::new()),
        })
    }
}

pub fn run(
    input: ReadingInput,
    liters: &str,
    output_format: &str,
    explain: bool,
) -> Result<(), SoilmixError> {
    let mut advisor = Advisor::new(input.into_source()?);
    advisor.take_reading()?;
    advisor.generate_mix(liters)?;

    let recommendation = advisor
        .recommendation()
        .ok_or(SoilmixError::MissingReading)?;

    match output_format {
        "json" => output::json::print(&recommendation)?,
        _ => {
            let catalog = if explain {
                Some(builtin::load_builtin()?)
            } else {
                None
            };
            output::table::print_recommendation(&recommendation, catalog.as_ref());
        }
    }

    Ok(())
}
