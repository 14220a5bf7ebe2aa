use crate::model::Nutrient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an additive is meant to boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BoostTarget {
    Nutrient(Nutrient),
    /// Catch-all used by the fallback additive.
    AllRound,
}

const ALL_ROUND_LABEL: &str = "All-Round Enhancement";

impl fmt::Display for BoostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoostTarget::Nutrient(n) => write!(f, "{}", n.boost_label()),
            BoostTarget::AllRound => write!(f, "{ALL_ROUND_LABEL}"),
        }
    }
}

impl From<BoostTarget> for String {
    fn from(target: BoostTarget) -> Self {
        target.to_string()
    }
}

impl TryFrom<String> for BoostTarget {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        if label == ALL_ROUND_LABEL {
            return Ok(BoostTarget::AllRound);
        }
        Nutrient::ALL
            .into_iter()
            .find(|n| n.boost_label() == label)
            .map(BoostTarget::Nutrient)
            .ok_or_else(|| format!("unknown boost target '{label}'"))
    }
}

/// A single organic supplement in a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Additive {
    /// Stable identifier (e.g., "oil-cake", "vermicompost").
    pub id: String,
    pub display_name: String,
    /// Amount in kg, rounded to 2 decimals.
    pub amount: Decimal,
    pub boost: BoostTarget,
}

impl Additive {
    pub fn is_fallback(&self) -> bool {
        self.boost == BoostTarget::AllRound
    }
}

/// An organic blend recommended for a volume of liquid fertilizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicMix {
    /// Cow dung base carrier in kg, rounded to 2 decimals.
    pub base: Decimal,
    /// Additives in emission order (N, P, K, or the single fallback).
    pub additives: Vec<Additive>,
    /// Base plus all additives in kg, rounded to 2 decimals.
    pub total: Decimal,
    pub requested_liters: Decimal,
}

impl OrganicMix {
    /// Preparation steps shown beneath a recommendation.
    pub fn instructions(&self) -> Vec<String> {
        vec![
            "Mix the cow dung and the additives thoroughly in a shaded spot.".into(),
            format!(
                "Blend the organic mix into {} L of liquid fertilizer.",
                self.requested_liters.normalize()
            ),
            "Let the mixture ferment for 5-7 days, stirring once a day.".into(),
            "Apply around the root zone and water lightly afterwards.".into(),
        ]
    }

    /// True if any additive targets the given nutrient.
    pub fn boosts(&self, nutrient: Nutrient) -> bool {
        self.additives
            .iter()
            .any(|a| a.boost == BoostTarget::Nutrient(nutrient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_boost_target_labels() {
        assert_eq!(
            BoostTarget::Nutrient(Nutrient::Nitrogen).to_string(),
            "Nitrogen (N)"
        );
        assert_eq!(BoostTarget::AllRound.to_string(), "All-Round Enhancement");
    }

    #[test]
    fn test_boost_target_serializes_as_label() {
        let json = serde_json::to_string(&BoostTarget::Nutrient(Nutrient::Potassium)).unwrap();
        assert_eq!(json, r#""Potassium (K)""#);
        let back: BoostTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BoostTarget::Nutrient(Nutrient::Potassium));
        assert!(serde_json::from_str::<BoostTarget>(r#""Calcium (Ca)""#).is_err());
    }

    #[test]
    fn test_instructions_mention_liters() {
        let mix = OrganicMix {
            base: dec!(5.00),
            additives: vec![],
            total: dec!(5.00),
            requested_liters: dec!(10.0),
        };
        let steps = mix.instructions();
        assert_eq!(steps.len(), 4);
        assert!(steps[1].contains("10 L"));
    }
}
