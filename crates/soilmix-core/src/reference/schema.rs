use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete reference dataset: soils, crops, organic catalog and literature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub soils: Vec<SoilType>,
    pub crops: Vec<CropNeeds>,
    pub organic: OrganicCatalog,
    #[serde(default)]
    pub literature: Vec<LiteratureSection>,
}

/// A regional soil group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilType {
    pub name: String,
    pub characteristics: String,
    /// Relative nutrient levels on a 0-100 scale (e.g., "Nitrogen" -> 30).
    pub profile: BTreeMap<String, u32>,
    pub profile_text: String,
    /// Crops that suit this soil, as a display string.
    pub crops: String,
}

/// Relative NPK demand of a crop on a 0-3 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutrientNeeds {
    pub nitrogen: u8,
    pub phosphorus: u8,
    pub potassium: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropNeeds {
    pub name: String,
    pub needs: NutrientNeeds,
    pub macro_text: String,
    pub micro_text: String,
}

/// The cow dung base all blends start from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicBase {
    pub name: String,
    pub nutrients: BTreeMap<String, u32>,
}

/// One entry in the organic additive catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicAdditiveDef {
    pub name: String,
    pub boosts: String,
    pub description: String,
    /// Nutrient levels that replace the base's when this additive is blended in.
    #[serde(default)]
    pub nutrient_boost: BTreeMap<String, u32>,
}

impl OrganicAdditiveDef {
    /// Name without the leading "Add " used on selection cards.
    pub fn short_name(&self) -> &str {
        self.name.strip_prefix("Add ").unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicCatalog {
    pub base: OrganicBase,
    /// Additives keyed by id ("reset", "oil-cake", ...).
    pub additives: BTreeMap<String, OrganicAdditiveDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteratureSection {
    pub title: String,
    pub entries: Vec<Citation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub authors: String,
    #[serde(default)]
    pub year: Option<u16>,
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    pub summary: String,
}
