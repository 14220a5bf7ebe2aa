use crate::error::SoilmixError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three macronutrients tracked by the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// All nutrients in the fixed N -> P -> K order used for display and additive emission.
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    pub fn symbol(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "N",
            Nutrient::Phosphorus => "P",
            Nutrient::Potassium => "K",
        }
    }

    /// Label used on additives that boost this nutrient, e.g. "Nitrogen (N)".
    pub fn boost_label(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen (N)",
            Nutrient::Phosphorus => "Phosphorus (P)",
            Nutrient::Potassium => "Potassium (K)",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nutrient::Nitrogen => write!(f, "Nitrogen"),
            Nutrient::Phosphorus => write!(f, "Phosphorus"),
            Nutrient::Potassium => write!(f, "Potassium"),
        }
    }
}

/// One NPK poll, each value a percentage in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReading")]
pub struct NutrientReading {
    nitrogen: Decimal,
    phosphorus: Decimal,
    potassium: Decimal,
}

#[derive(Deserialize)]
struct RawReading {
    nitrogen: Decimal,
    phosphorus: Decimal,
    potassium: Decimal,
}

impl TryFrom<RawReading> for NutrientReading {
    type Error = SoilmixError;

    fn try_from(raw: RawReading) -> Result<Self, Self::Error> {
        NutrientReading::new(raw.nitrogen, raw.phosphorus, raw.potassium)
    }
}

impl NutrientReading {
    pub fn new(
        nitrogen: Decimal,
        phosphorus: Decimal,
        potassium: Decimal,
    ) -> Result<Self, SoilmixError> {
        for (nutrient, value) in [
            (Nutrient::Nitrogen, nitrogen),
            (Nutrient::Phosphorus, phosphorus),
            (Nutrient::Potassium, potassium),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(SoilmixError::InvalidReading(format!(
                    "{} {}% is outside 0-100%",
                    nutrient, value
                )));
            }
        }

        Ok(NutrientReading {
            nitrogen,
            phosphorus,
            potassium,
        })
    }

    pub fn nitrogen(&self) -> Decimal {
        self.nitrogen
    }

    pub fn phosphorus(&self) -> Decimal {
        self.phosphorus
    }

    pub fn potassium(&self) -> Decimal {
        self.potassium
    }

    pub fn get(&self, nutrient: Nutrient) -> Decimal {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }
}

impl fmt::Display for NutrientReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N {}% / P {}% / K {}%",
            self.nitrogen, self.phosphorus, self.potassium
        )
    }
}

/// Status band of a single nutrient percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    Optimal,
    Low,
    VeryLow,
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientStatus::Optimal => write!(f, "Optimal"),
            NutrientStatus::Low => write!(f, "Low"),
            NutrientStatus::VeryLow => write!(f, "Very Low"),
        }
    }
}

/// Volume of liquid fertilizer the mix is prepared for, in liters. Always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FertilizerRequest(Decimal);

impl FertilizerRequest {
    pub fn new(liters: Decimal) -> Result<Self, SoilmixError> {
        if liters <= Decimal::ZERO {
            return Err(SoilmixError::InvalidAmount(format!(
                "{} liters must be greater than zero",
                liters
            )));
        }
        Ok(FertilizerRequest(liters))
    }

    pub fn from_f64(liters: f64) -> Result<Self, SoilmixError> {
        let decimal = Decimal::from_f64(liters).ok_or_else(|| {
            SoilmixError::InvalidAmount(format!("'{}' is not a finite number", liters))
        })?;
        FertilizerRequest::new(decimal)
    }

    pub fn liters(&self) -> Decimal {
        self.0
    }
}

impl FromStr for FertilizerRequest {
    type Err = SoilmixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SoilmixError::InvalidAmount("no amount entered".into()));
        }

        let liters = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| SoilmixError::InvalidAmount(format!("'{}' is not a number", s)))?;
        FertilizerRequest::new(liters)
    }
}
