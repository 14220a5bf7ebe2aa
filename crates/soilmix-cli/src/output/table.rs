use soilmix_core::analysis::DeficiencyProfile;
use soilmix_core::reference::schema::ReferenceData;
use soilmix_core::Recommendation;

pub fn print_profile(profile: &DeficiencyProfile) {
    println!("NPK reading:\n");
    for a in profile.iter() {
        println!(
            "  {:<11} {:>6}%  {:<9} deficiency {:.2}",
            format!("{} ({})", a.nutrient, a.nutrient.symbol()),
            a.value,
            a.status.to_string(),
            a.deficiency
        );
    }
    println!();
}

pub fn print_recommendation(rec: &Recommendation, catalog: Option<&ReferenceData>) {
    print_profile(&rec.profile);

    let mix = &rec.mix;
    println!(
        "=== Organic mix for {} L of liquid fertilizer ===\n",
        mix.requested_liters.normalize()
    );

    let max_name = mix
        .additives
        .iter()
        .map(|a| a.display_name.len())
        .max()
        .unwrap_or(0)
        .max("Total organic matter".len());

    println!(
        "  {:<width$}  {:>8.2} kg",
        "Cow Dung (base)",
        mix.base,
        width = max_name
    );
    for additive in &mix.additives {
        println!(
            "  {:<width$}  {:>8.2} kg   boosts {}",
            additive.display_name,
            additive.amount,
            additive.boost,
            width = max_name
        );
        if let Some(def) = catalog.and_then(|c| c.additive(&additive.id).ok()) {
            println!("    {}", def.description);
        }
    }
    println!("  {}", "-".repeat(max_name + 12));
    println!(
        "  {:<width$}  {:>8.2} kg\n",
        "Total organic matter",
        mix.total,
        width = max_name
    );

    println!("Instructions:");
    for (i, step) in mix.instructions().iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}
