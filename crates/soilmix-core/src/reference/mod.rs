pub mod builtin;
pub mod schema;

use crate::error::SoilmixError;
use schema::{CropNeeds, OrganicAdditiveDef, ReferenceData, SoilType};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Additive id that selects the plain base with nothing blended in.
pub const BASE_ONLY_ID: &str = "reset";

const MAX_PROFILE_LEVEL: u32 = 100;
const MAX_CROP_NEED: u8 = 3;

/// Load a reference dataset from a JSON file.
pub fn load_reference(path: &Path) -> Result<ReferenceData, SoilmixError> {
    let content = std::fs::read_to_string(path).map_err(|e| SoilmixError::ReferenceLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let data: ReferenceData =
        serde_json::from_str(&content).map_err(|e| SoilmixError::ReferenceLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_reference(&data)?;
    Ok(data)
}

/// Parse a reference dataset from a JSON string (no file path context).
pub fn parse_reference_str(json: &str) -> Result<ReferenceData, SoilmixError> {
    let data: ReferenceData = serde_json::from_str(json)?;
    validate_reference(&data)?;
    Ok(data)
}

fn check_unique<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), SoilmixError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(SoilmixError::ReferenceInvalid(format!(
                "{} name must not be empty",
                kind
            )));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(SoilmixError::ReferenceInvalid(format!(
                "duplicate {} '{}'",
                kind, name
            )));
        }
    }
    Ok(())
}

fn check_levels(owner: &str, levels: &BTreeMap<String, u32>) -> Result<(), SoilmixError> {
    for (nutrient, level) in levels {
        if *level > MAX_PROFILE_LEVEL {
            return Err(SoilmixError::ReferenceInvalid(format!(
                "'{}' has {} level {} (max {})",
                owner, nutrient, level, MAX_PROFILE_LEVEL
            )));
        }
    }
    Ok(())
}

/// Validate that a reference dataset is well-formed.
pub fn validate_reference(data: &ReferenceData) -> Result<(), SoilmixError> {
    if data.soils.is_empty() {
        return Err(SoilmixError::ReferenceInvalid("soils must not be empty".into()));
    }
    if data.crops.is_empty() {
        return Err(SoilmixError::ReferenceInvalid("crops must not be empty".into()));
    }
    if data.organic.additives.is_empty() {
        return Err(SoilmixError::ReferenceInvalid(
            "organic additives must not be empty".into(),
        ));
    }

    check_unique("soil", data.soils.iter().map(|s| s.name.as_str()))?;
    check_unique("crop", data.crops.iter().map(|c| c.name.as_str()))?;
    check_unique("additive", data.organic.additives.keys().map(|k| k.as_str()))?;

    for soil in &data.soils {
        check_levels(&soil.name, &soil.profile)?;
    }

    for crop in &data.crops {
        let needs = crop.needs;
        if [needs.nitrogen, needs.phosphorus, needs.potassium]
            .iter()
            .any(|n| *n > MAX_CROP_NEED)
        {
            return Err(SoilmixError::ReferenceInvalid(format!(
                "crop '{}' has a nutrient need above {}",
                crop.name, MAX_CROP_NEED
            )));
        }
    }

    check_levels(&data.organic.base.name, &data.organic.base.nutrients)?;
    for (id, additive) in &data.organic.additives {
        check_levels(id, &additive.nutrient_boost)?;
    }

    Ok(())
}

impl ReferenceData {
    /// Look up a soil type by name (case-insensitive).
    pub fn soil(&self, name: &str) -> Result<&SoilType, SoilmixError> {
        self.soils
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SoilmixError::UnknownEntry {
                kind: "soil",
                name: name.into(),
            })
    }

    /// Look up a crop by name (case-insensitive).
    pub fn crop(&self, name: &str) -> Result<&CropNeeds, SoilmixError> {
        self.crops
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SoilmixError::UnknownEntry {
                kind: "crop",
                name: name.into(),
            })
    }

    /// Look up an organic additive by id (case-insensitive).
    pub fn additive(&self, id: &str) -> Result<&OrganicAdditiveDef, SoilmixError> {
        self.organic
            .additives
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id.trim()))
            .map(|(_, def)| def)
            .ok_or_else(|| SoilmixError::UnknownEntry {
                kind: "additive",
                name: id.into(),
            })
    }

    /// Nutrient profile of the base with one additive blended in: the
    /// additive's boosted levels replace the base's, the rest carry over.
    pub fn blend_profile(&self, id: &str) -> Result<BTreeMap<String, u32>, SoilmixError> {
        let additive = self.additive(id)?;
        let mut profile = self.organic.base.nutrients.clone();
        for (nutrient, level) in &additive.nutrient_boost {
            profile.insert(nutrient.clone(), *level);
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "soils": [
            { "name": "Red Soil", "characteristics": "c", "profile": { "Nitrogen": 30 },
              "profile_text": "p", "crops": "Ragi" }
        ],
        "crops": [
            { "name": "Ragi", "needs": { "nitrogen": 2, "phosphorus": 1, "potassium": 1 },
              "macro_text": "m", "micro_text": "z" }
        ],
        "organic": {
            "base": { "name": "Cow Dung", "nutrients": { "Nitrogen": 40, "Potassium": 35 } },
            "additives": {
                "reset": { "name": "Cow Dung Only", "boosts": "Balanced Base", "description": "d" },
                "wood-ash": { "name": "Add Wood Ash", "boosts": "Potassium (K)", "description": "d",
                              "nutrient_boost": { "Potassium": 90 } }
            }
        }
    }"#;

    #[test]
    fn test_parse_minimal() {
        let data = parse_reference_str(MINIMAL).unwrap();
        assert_eq!(data.soils.len(), 1);
        assert!(data.literature.is_empty());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let data = parse_reference_str(MINIMAL).unwrap();
        assert_eq!(data.soil("red soil").unwrap().name, "Red Soil");
        assert_eq!(data.crop(" RAGI ").unwrap().name, "Ragi");
        assert_eq!(data.additive("Wood-Ash").unwrap().short_name(), "Wood Ash");
    }

    #[test]
    fn test_unknown_lookup() {
        let data = parse_reference_str(MINIMAL).unwrap();
        assert!(matches!(
            data.soil("Peat"),
            Err(SoilmixError::UnknownEntry { kind: "soil", .. })
        ));
    }

    #[test]
    fn test_blend_profile_overrides_base() {
        let data = parse_reference_str(MINIMAL).unwrap();
        let blended = data.blend_profile("wood-ash").unwrap();
        assert_eq!(blended["Potassium"], 90);
        assert_eq!(blended["Nitrogen"], 40);

        let base = data.blend_profile(BASE_ONLY_ID).unwrap();
        assert_eq!(base, data.organic.base.nutrients);
    }

    #[test]
    fn test_profile_level_above_100_rejected() {
        let json = MINIMAL.replace(r#""Nitrogen": 30"#, r#""Nitrogen": 130"#);
        assert!(matches!(
            parse_reference_str(&json),
            Err(SoilmixError::ReferenceInvalid(_))
        ));
    }

    #[test]
    fn test_crop_need_above_scale_rejected() {
        let json = MINIMAL.replace(r#""nitrogen": 2"#, r#""nitrogen": 5"#);
        assert!(parse_reference_str(&json).is_err());
    }

    #[test]
    fn test_empty_soils_rejected() {
        let mut data = parse_reference_str(MINIMAL).unwrap();
        data.soils.clear();
        assert!(validate_reference(&data).is_err());
    }

    #[test]
    fn test_duplicate_crop_rejected() {
        let mut data = parse_reference_str(MINIMAL).unwrap();
        let dup = data.crops[0].clone();
        data.crops.push(dup);
        assert!(validate_reference(&data).is_err());
    }

    #[test]
    fn test_load_reference_missing_file() {
        let result = load_reference(Path::new("/nonexistent/reference.json"));
        assert!(matches!(result, Err(SoilmixError::ReferenceLoad { .. })));
    }
}
