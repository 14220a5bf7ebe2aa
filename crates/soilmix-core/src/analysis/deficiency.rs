use crate::model::{Nutrient, NutrientReading, NutrientStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Readings at or above this percentage are optimal and carry no deficiency.
pub const OPTIMAL_THRESHOLD: Decimal = dec!(60);

/// Lower bound of the "low" band; anything below is "very low".
pub const LOW_THRESHOLD: Decimal = dec!(30);

/// Classify a percentage into its status band.
///
/// The lower bound of each band is inclusive: exactly 60 is optimal and
/// exactly 30 is low. The range is not re-validated here.
pub fn classify(value: Decimal) -> NutrientStatus {
    if value >= OPTIMAL_THRESHOLD {
        NutrientStatus::Optimal
    } else if value >= LOW_THRESHOLD {
        NutrientStatus::Low
    } else {
        NutrientStatus::VeryLow
    }
}

/// Shortfall below the optimal threshold, normalized: `max(0, 60 - value) / 100`.
pub fn deficiency_fraction(value: Decimal) -> Decimal {
    (OPTIMAL_THRESHOLD - value).max(Decimal::ZERO) / Decimal::ONE_HUNDRED
}

/// Status and deficiency of one nutrient in a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientAnalysis {
    pub nutrient: Nutrient,
    /// Percentage as read from the probe.
    pub value: Decimal,
    pub status: NutrientStatus,
    pub deficiency: Decimal,
}

/// Per-nutrient analysis of a whole reading, in N -> P -> K order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeficiencyProfile {
    pub nutrients: [NutrientAnalysis; 3],
}

impl DeficiencyProfile {
    pub fn get(&self, nutrient: Nutrient) -> &NutrientAnalysis {
        // Indices follow Nutrient::ALL.
        match nutrient {
            Nutrient::Nitrogen => &self.nutrients[0],
            Nutrient::Phosphorus => &self.nutrients[1],
            Nutrient::Potassium => &self.nutrients[2],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutrientAnalysis> {
        self.nutrients.iter()
    }
}

/// Analyze every nutrient of a reading.
pub fn analyze(reading: &NutrientReading) -> DeficiencyProfile {
    let nutrients = Nutrient::ALL.map(|nutrient| {
        let value = reading.get(nutrient);
        let analysis = NutrientAnalysis {
            nutrient,
            value,
            status: classify(value),
            deficiency: deficiency_fraction(value),
        };
        debug!(
            nutrient = %nutrient,
            %value,
            status = %analysis.status,
            deficiency = %analysis.deficiency,
            "analyzed nutrient"
        );
        analysis
    });

    DeficiencyProfile { nutrients }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(dec!(60)), NutrientStatus::Optimal);
        assert_eq!(classify(dec!(59.999)), NutrientStatus::Low);
        assert_eq!(classify(dec!(30)), NutrientStatus::Low);
        assert_eq!(classify(dec!(29.999)), NutrientStatus::VeryLow);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(classify(dec!(0)), NutrientStatus::VeryLow);
        assert_eq!(classify(dec!(100)), NutrientStatus::Optimal);
    }

    #[test]
    fn test_deficiency_below_threshold() {
        assert_eq!(deficiency_fraction(dec!(10)), dec!(0.5));
        assert_eq!(deficiency_fraction(dec!(50)), dec!(0.1));
        assert_eq!(deficiency_fraction(dec!(0)), dec!(0.6));
        assert_eq!(deficiency_fraction(dec!(40)), dec!(0.2));
    }

    #[test]
    fn test_deficiency_at_or_above_threshold_is_zero() {
        assert_eq!(deficiency_fraction(dec!(60)), Decimal::ZERO);
        assert_eq!(deficiency_fraction(dec!(70)), Decimal::ZERO);
        assert_eq!(deficiency_fraction(dec!(100)), Decimal::ZERO);
    }

    #[test]
    fn test_analyze_order_and_values() {
        let reading = NutrientReading::new(dec!(10), dec!(70), dec!(50)).unwrap();
        let profile = analyze(&reading);

        let order: Vec<Nutrient> = profile.iter().map(|a| a.nutrient).collect();
        assert_eq!(order, Nutrient::ALL.to_vec());

        let n = profile.get(Nutrient::Nitrogen);
        assert_eq!(n.status, NutrientStatus::VeryLow);
        assert_eq!(n.deficiency, dec!(0.5));

        let p = profile.get(Nutrient::Phosphorus);
        assert_eq!(p.status, NutrientStatus::Optimal);
        assert_eq!(p.deficiency, Decimal::ZERO);

        let k = profile.get(Nutrient::Potassium);
        assert_eq!(k.status, NutrientStatus::Low);
        assert_eq!(k.deficiency, dec!(0.1));
    }
}
