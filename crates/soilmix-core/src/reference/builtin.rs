use crate::error::SoilmixError;
use crate::reference::schema::ReferenceData;
use crate::reference::validate_reference;

const SOILS_JSON: &str = include_str!("../../../../reference/soils.json");
const CROPS_JSON: &str = include_str!("../../../../reference/crops.json");
const ORGANIC_JSON: &str = include_str!("../../../../reference/organic.json");
const LITERATURE_JSON: &str = include_str!("../../../../reference/literature.json");

/// Load the reference dataset that ships with the tool.
pub fn load_builtin() -> Result<ReferenceData, SoilmixError> {
    let data = ReferenceData {
        soils: serde_json::from_str(SOILS_JSON)?,
        crops: serde_json::from_str(CROPS_JSON)?,
        organic: serde_json::from_str(ORGANIC_JSON)?,
        literature: serde_json::from_str(LITERATURE_JSON)?,
    };
    validate_reference(&data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin() {
        let data = load_builtin().unwrap();
        assert_eq!(data.soils.len(), 4);
        assert!(data.crops.iter().any(|c| c.name == "Paddy (Rice)"));
        assert_eq!(data.organic.base.name, "Cow Dung");
        assert_eq!(data.literature.len(), 2);
    }

    #[test]
    fn test_builtin_catalog_covers_recommended_additives() {
        let data = load_builtin().unwrap();
        for id in ["oil-cake", "bone-meal", "wood-ash", "vermicompost", "reset"] {
            assert!(data.organic.additives.contains_key(id), "missing {id}");
        }
    }
}
