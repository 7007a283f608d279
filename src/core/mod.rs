pub mod batch;
pub mod calculator;
pub mod emission;
pub mod report;
pub mod validator;

pub use crate::domain::model::{
    EmissionBreakdown, TransportType, TripInput, TripReport, TripRequest, ValidationResult,
};
pub use crate::domain::ports::{DistanceLookup, TransportCatalog};
pub use crate::utils::error::Result;
