pub mod json_file;
pub mod simulated;

pub use json_file::JsonFileSource;
pub use simulated::SimulatedSensor;

use crate::error::SoilmixError;
use crate::model::NutrientReading;

/// Trait for anything that can produce an NPK reading: a probe driver,
/// a simulator, or a recorded reading on disk.
pub trait NutrientReadingSource: Send + Sync {
    /// Poll the source once.
    fn read(&self) -> Result<NutrientReading, SoilmixError>;

    /// Name of this source (for diagnostics).
    fn source_name(&self) -> &str;
}

impl<S: NutrientReadingSource + ?Sized> NutrientReadingSource for Box<S> {
    fn read(&self) -> Result<NutrientReading, SoilmixError> {
        (**self).read()
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}

/// A source that always returns the same reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedReading(pub NutrientReading);

impl NutrientReadingSource for FixedReading {
    fn read(&self) -> Result<NutrientReading, SoilmixError> {
        Ok(self.0)
    }

    fn source_name(&self) -> &str {
        "fixed"
    }
}
