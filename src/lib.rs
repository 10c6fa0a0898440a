#![doc = include_str!("../README.md")]

#[cfg(test)]
#[macro_use]
mod tests;

mod config;
pub use config::{CordicConfig, MAX_INDEX_BITS, MAX_INPUT_BITS};

mod engine;
pub use engine::{HybridCordic, Rotation, RotationStep, SinCos};

mod error;
pub use error::ConfigError;

pub mod phase;
pub use phase::{PhaseParts, Quadrant};

pub mod sin_cos_iterator;
pub use sin_cos_iterator::{LinearSinCos, SinCosIterator};

mod tables;
pub use tables::{CordicTables, DerivationReport};

pub mod validation;
pub use validation::{ErrorStats, Exceedance, Sample, ValidationReport, Validator};

use lazy_static::lazy_static;

lazy_static! {
    static ref REFERENCE_TABLES: CordicTables = CordicTables::derive(CordicConfig::reference())
        .expect("reference configuration must be valid");
}

/// Tables of [CordicConfig::reference], derived on first use
pub fn reference_tables() -> &'static CordicTables {
    &REFERENCE_TABLES
}
