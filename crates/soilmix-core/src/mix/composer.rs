use crate::analysis::deficiency_fraction;
use crate::error::SoilmixError;
use crate::mix::outcome::{Additive, BoostTarget, OrganicMix};
use crate::model::{FertilizerRequest, Nutrient, NutrientReading};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::{debug, info};

/// kg of cow dung base per liter of liquid fertilizer.
const BASE_KG_PER_LITER: Decimal = dec!(0.5);

/// Deficiency a nutrient must exceed before it gets a targeted additive.
const TRIGGER_DEFICIENCY: Decimal = dec!(0.2);

/// Share of the base, scaled by deficiency, dosed as a targeted additive.
const TARGETED_SCALE: Decimal = dec!(0.3);

/// Share of the base dosed as vermicompost when nothing is deficient enough.
const FALLBACK_SCALE: Decimal = dec!(0.2);

/// Round a kg figure to 2 decimals, halves away from zero.
fn round_kg(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The canonical additive for a deficient nutrient: (id, display name).
fn targeted_additive(nutrient: Nutrient) -> (&'static str, &'static str) {
    match nutrient {
        Nutrient::Nitrogen => ("oil-cake", "Crop Waste / Oil Cake"),
        Nutrient::Phosphorus => ("bone-meal", "Bone Meal / Ash"),
        Nutrient::Potassium => ("wood-ash", "Wood Ash"),
    }
}

/// Compose an organic mix for a reading and a validated fertilizer volume.
///
/// Nutrients whose deficiency exceeds 0.2 each get a targeted additive,
/// in N -> P -> K order. If none do, a single vermicompost fallback is
/// added instead; the two never combine. The total is summed from the
/// already-rounded base and additive amounts.
pub fn compose(
    reading: Option<&NutrientReading>,
    request: &FertilizerRequest,
) -> Result<OrganicMix, SoilmixError> {
    let reading = reading.ok_or(SoilmixError::MissingReading)?;
    let liters = request.liters();
    let base = liters * BASE_KG_PER_LITER;

    let mut additives = Vec::new();
    for nutrient in Nutrient::ALL {
        let deficiency = deficiency_fraction(reading.get(nutrient));
        if deficiency <= TRIGGER_DEFICIENCY {
            continue;
        }

        let (id, display_name) = targeted_additive(nutrient);
        let amount = round_kg(base * deficiency * TARGETED_SCALE);
        debug!(%nutrient, %deficiency, %amount, additive = id, "deficiency triggers additive");
        additives.push(Additive {
            id: id.into(),
            display_name: display_name.into(),
            amount,
            boost: BoostTarget::Nutrient(nutrient),
        });
    }

    if additives.is_empty() {
        let amount = round_kg(base * FALLBACK_SCALE);
        debug!(%amount, "no deficiency above threshold, adding vermicompost");
        additives.push(Additive {
            id: "vermicompost".into(),
            display_name: "Vermicompost".into(),
            amount,
            boost: BoostTarget::AllRound,
        });
    }

    let base = round_kg(base);
    let total = round_kg(additives.iter().map(|a| a.amount).sum::<Decimal>() + base);

    info!(
        %liters,
        %base,
        %total,
        additives = additives.len(),
        "composed organic mix"
    );

    Ok(OrganicMix {
        base,
        additives,
        total,
        requested_liters: liters,
    })
}

/// Validate a raw liters figure, then [`compose`].
///
/// The reading is checked first so a missing reading is reported even
/// when the amount is also wrong.
pub fn compose_liters(
    reading: Option<&NutrientReading>,
    liters: Decimal,
) -> Result<OrganicMix, SoilmixError> {
    let reading = reading.ok_or(SoilmixError::MissingReading)?;
    let request = FertilizerRequest::new(liters)?;
    compose(Some(reading), &request)
}
