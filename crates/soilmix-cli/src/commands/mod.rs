pub mod mix;
pub mod read;
pub mod reference;
