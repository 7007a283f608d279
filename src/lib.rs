pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use catalog::{CapitalDistanceTable, StaticTransportCatalog};
pub use crate::core::calculator::{CalculatorSettings, TripCalculator};
pub use crate::core::emission::{
    compute_detailed_emission_per_person, compute_total_emission, estimate_trees_to_offset,
    format_distance, format_emission,
};
pub use crate::core::validator::validate_calculation_inputs;
pub use domain::model::{EmissionBreakdown, TripInput, TripReport, TripRequest, ValidationResult};
pub use utils::error::{CalcError, Result};
