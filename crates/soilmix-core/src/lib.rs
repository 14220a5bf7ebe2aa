pub mod analysis;
pub mod error;
pub mod mix;
pub mod model;
pub mod reference;
pub mod sensor;
pub mod session;

use analysis::DeficiencyProfile;
use error::SoilmixError;
use mix::OrganicMix;
use model::{FertilizerRequest, NutrientReading};
use sensor::NutrientReadingSource;
use serde::{Deserialize, Serialize};

/// A reading together with its analysis and the mix built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub source: String,
    pub reading: NutrientReading,
    pub profile: DeficiencyProfile,
    pub mix: OrganicMix,
}

/// Main API entry point: poll a source once and recommend a mix.
pub fn recommend(
    source: &dyn NutrientReadingSource,
    request: &FertilizerRequest,
) -> Result<Recommendation, SoilmixError> {
    let reading = source.read()?;
    recommend_for(source.source_name(), reading, request)
}

/// Recommend a mix for a reading already in hand.
pub fn recommend_for(
    source: &str,
    reading: NutrientReading,
    request: &FertilizerRequest,
) -> Result<Recommendation, SoilmixError> {
    let profile = analysis::analyze(&reading);
    let mix = mix::compose(Some(&reading), request)?;

    Ok(Recommendation {
        source: source.to_string(),
        reading,
        profile,
        mix,
    })
}
