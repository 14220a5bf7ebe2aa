pub mod composer;
pub mod outcome;

pub use composer::{compose, compose_liters};
pub use outcome::{Additive, BoostTarget, OrganicMix};
