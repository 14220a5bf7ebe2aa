use super::NutrientReadingSource;
use crate::error::SoilmixError;
use crate::model::NutrientReading;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a recorded reading from a JSON file on every poll.
///
/// Expected shape: `{"nitrogen": "10", "phosphorus": "70", "potassium": "50"}`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NutrientReadingSource for JsonFileSource {
    fn read(&self) -> Result<NutrientReading, SoilmixError> {
        let bytes = std::fs::read(&self.path)?;
        let reading: NutrientReading = serde_json::from_slice(&bytes)?;
        info!(source = %self.path.display(), %reading, "loaded NPK reading");
        Ok(reading)
    }

    fn source_name(&self) -> &str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_read_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nitrogen": "12.5", "phosphorus": "70", "potassium": "0"}}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let reading = source.read().unwrap();
        assert_eq!(reading.nitrogen(), dec!(12.5));
        assert_eq!(reading.phosphorus(), dec!(70));
        assert_eq!(reading.potassium(), dec!(0));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nitrogen": "101", "phosphorus": "70", "potassium": "0"}}"#
        )
        .unwrap();

        let result = JsonFileSource::new(file.path()).read();
        assert!(matches!(result, Err(SoilmixError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = JsonFileSource::new("/nonexistent/reading.json").read();
        assert!(matches!(result, Err(SoilmixError::Io(_))));
    }
}
