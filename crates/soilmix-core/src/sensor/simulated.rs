use super::NutrientReadingSource;
use crate::error::SoilmixError;
use crate::model::NutrientReading;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::sync::Mutex;
use tracing::info;

/// Stand-in for the ESP32 NPK probe: whole-number percentages drawn
/// uniformly from 0 to 99.
pub struct SimulatedSensor {
    rng: Mutex<StdRng>,
}

impl SimulatedSensor {
    pub fn new() -> Self {
        SimulatedSensor {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A simulator that yields the same sequence of readings for the same seed.
    pub fn seeded(seed: u64) -> Self {
        SimulatedSensor {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl NutrientReadingSource for SimulatedSensor {
    fn read(&self) -> Result<NutrientReading, SoilmixError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| SoilmixError::Sensor("simulator state poisoned".into()))?;

        let mut next = || Decimal::from(rng.gen_range(0u32..100));
        let (n, p, k) = (next(), next(), next());
        let reading = NutrientReading::new(n, p, k)?;

        info!(source = "simulated", %reading, "NPK data received");
        Ok(reading)
    }

    fn source_name(&self) -> &str {
        "simulated"
    }
}
