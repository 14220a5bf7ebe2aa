use soilmix_core::error::SoilmixError;
use soilmix_core::reference::schema::ReferenceData;
use soilmix_core::reference::{builtin, load_reference, BASE_ONLY_ID};
use std::path::PathBuf;

fn load(data: Option<PathBuf>) -> Result<ReferenceData, SoilmixError> {
    match data {
        Some(path) => load_reference(&path),
        None => builtin::load_builtin(),
    }
}

/// Render a 0-100 level as a bar of up to 20 cells.
fn bar(level: u32) -> String {
    let filled = (level.min(100) / 5) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

pub fn soils(name: Option<&str>, data: Option<PathBuf>) -> Result<(), SoilmixError> {
    let data = load(data)?;

    let Some(name) = name else {
        println!("Soil types:\n");
        for soil in &data.soils {
            println!("  {:<16} {}", soil.name, soil.crops);
        }
        println!("\nRun `soilmix soils <NAME>` for details.");
        return Ok(());
    };

    let soil = data.soil(name)?;
    println!("{}\n", soil.name);
    println!("Characteristics:\n  {}\n", soil.characteristics);
    println!("Nutrient profile:\n  {}\n", soil.profile_text);

    let width = soil.profile.keys().map(|k| k.len()).max().unwrap_or(10);
    for (nutrient, level) in &soil.profile {
        println!("  {:<width$}  {}  {:>3}", nutrient, bar(*level), level, width = width);
    }

    println!("\nSuitable crops:\n  {}", soil.crops);
    Ok(())
}

pub fn crops(name: Option<&str>, data: Option<PathBuf>) -> Result<(), SoilmixError> {
    let data = load(data)?;

    let Some(name) = name else {
        println!("Crops (relative need, 0-3):\n");
        println!("  {:<22} {:>3} {:>3} {:>3}", "Crop", "N", "P", "K");
        for crop in &data.crops {
            println!(
                "  {:<22} {:>3} {:>3} {:>3}",
                crop.name, crop.needs.nitrogen, crop.needs.phosphorus, crop.needs.potassium
            );
        }
        return Ok(());
    };

    let crop = data.crop(name)?;
    println!("{}\n", crop.name);
    for (label, need) in [
        ("Nitrogen", crop.needs.nitrogen),
        ("Phosphorus", crop.needs.phosphorus),
        ("Potassium", crop.needs.potassium),
    ] {
        let need = usize::from(need);
        println!("  {:<10}  {}{}  {}", label, "###".repeat(need), "...".repeat(3 - need.min(3)), need);
    }
    println!("\nMacronutrients:\n  {}", crop.macro_text);
    println!("\nMicronutrients:\n  {}", crop.micro_text);
    Ok(())
}

pub fn organic(id: Option<&str>, data: Option<PathBuf>) -> Result<(), SoilmixError> {
    let data = load(data)?;
    let id = id.unwrap_or(BASE_ONLY_ID);

    let additive = data.additive(id)?;
    let profile = data.blend_profile(id)?;

    println!("Available additives:");
    for (key, def) in &data.organic.additives {
        let marker = if key.eq_ignore_ascii_case(id) { "*" } else { " " };
        println!("  {} {:<14} {}", marker, key, def.name);
    }

    println!("\nBoosts: {}\n", additive.boosts);
    println!("  {}\n", additive.description);
    println!("Base: {}", data.organic.base.name);
    if !id.eq_ignore_ascii_case(BASE_ONLY_ID) {
        println!("Additive: {}", additive.short_name());
    }

    println!("\nNutrient profile:");
    let width = profile.keys().map(|k| k.len()).max().unwrap_or(10);
    for (nutrient, level) in &profile {
        println!("  {:<width$}  {}  {:>3}", nutrient, bar(*level), level, width = width);
    }
    Ok(())
}

pub fn literature(data: Option<PathBuf>) -> Result<(), SoilmixError> {
    let data = load(data)?;

    for section in &data.literature {
        println!("{}\n", section.title);
        for c in &section.entries {
            let year = c.year.map(|y| format!(" ({y})")).unwrap_or_default();
            let source = c
                .source
                .as_deref()
                .map(|s| format!(" {s}."))
                .unwrap_or_default();
            println!("  - {}{}. \"{}\".{}", c.authors, year, c.title, source);
            println!("    {}", c.summary);
        }
        println!();
    }
    Ok(())
}
