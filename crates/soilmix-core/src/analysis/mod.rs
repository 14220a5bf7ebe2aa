pub mod deficiency;

pub use deficiency::{analyze, classify, deficiency_fraction, DeficiencyProfile, NutrientAnalysis};
