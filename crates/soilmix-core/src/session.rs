use crate::analysis::{analyze, DeficiencyProfile};
use crate::error::SoilmixError;
use crate::mix::{compose, OrganicMix};
use crate::model::{FertilizerRequest, NutrientReading};
use crate::sensor::NutrientReadingSource;
use crate::Recommendation;
use tracing::warn;

/// Holds the latest reading and recommendation for one user.
///
/// A failed mix request leaves the previous recommendation in place so
/// the user can correct the amount without losing it.
pub struct Advisor<S> {
    source: S,
    reading: Option<NutrientReading>,
    mix: Option<OrganicMix>,
}

impl<S: NutrientReadingSource> Advisor<S> {
    pub fn new(source: S) -> Self {
        Advisor {
            source,
            reading: None,
            mix: None,
        }
    }

    /// Poll the source and keep the new reading.
    pub fn take_reading(&mut self) -> Result<NutrientReading, SoilmixError> {
        let reading = self.source.read()?;
        self.reading = Some(reading);
        Ok(reading)
    }

    /// Parse a user-entered amount and compose a mix for the current reading.
    pub fn generate_mix(&mut self, liters_text: &str) -> Result<&OrganicMix, SoilmixError> {
        let reading = self.reading.as_ref().ok_or(SoilmixError::MissingReading)?;
        let result = liters_text
            .parse::<FertilizerRequest>()
            .and_then(|request| compose(Some(reading), &request));

        match result {
            Ok(mix) => Ok(self.mix.insert(mix)),
            Err(e) => {
                warn!(input = liters_text, error = %e, "mix request rejected");
                Err(e)
            }
        }
    }

    pub fn reading(&self) -> Option<&NutrientReading> {
        self.reading.as_ref()
    }

    pub fn last_mix(&self) -> Option<&OrganicMix> {
        self.mix.as_ref()
    }

    /// Deficiency profile of the current reading, if any.
    pub fn profile(&self) -> Option<DeficiencyProfile> {
        self.reading.as_ref().map(analyze)
    }

    /// The current reading, its analysis and the last mix, once both exist.
    pub fn recommendation(&self) -> Option<Recommendation> {
        let reading = self.reading?;
        let mix = self.mix.clone()?;
        Some(Recommendation {
            source: self.source.source_name().to_string(),
            reading,
            profile: analyze(&reading),
            mix,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
