use serde::Serialize;
use soilmix_core::error::SoilmixError;

pub fn print<T: Serialize>(value: &T) -> Result<(), SoilmixError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
