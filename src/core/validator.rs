use crate::domain::model::{TripRequest, ValidationResult};
use crate::domain::ports::TransportCatalog;

pub const MSG_DISTANCE_UNKNOWN: &str = "Could not determine the distance between the selected cities.";
pub const MSG_DISTANCE_NEGATIVE: &str = "Distance cannot be negative.";
pub const MSG_SAME_LOCATION: &str = "Origin and destination cannot be the same city.";
pub const MSG_FACTOR_NEGATIVE: &str = "Emission factor cannot be negative.";
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const MSG_TOO_FEW_PEOPLE: &str = "The number of people must be at least 1.";
pub const MSG_UNKNOWN_TRANSPORT: &str = "Transport type not found or invalid.";

/// Upper bound on travelers; blocks pathological inputs.
pub const MAX_PEOPLE: u32 = 1000;

pub fn too_many_people_message(max_people: u32) -> String {
    format!("The number of people cannot be greater than {}.", max_people)
}

/// Checks the resolved numbers before the emission model runs. First failing check wins.
///
/// A zero emission factor is accepted: respiration still counts for most transports.
pub fn validate_calculation_inputs(distance_km: Option<f64>, emission_factor: f64) -> ValidationResult {
    let Some(distance_km) = distance_km else {
        return ValidationResult::invalid(MSG_DISTANCE_UNKNOWN);
    };

    if distance_km < 0.0 {
        return ValidationResult::invalid(MSG_DISTANCE_NEGATIVE);
    }

    if distance_km == 0.0 {
        return ValidationResult::invalid(MSG_SAME_LOCATION);
    }

    if emission_factor < 0.0 {
        return ValidationResult::invalid(MSG_FACTOR_NEGATIVE);
    }

    ValidationResult::valid()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Form-level checks on the raw request. `distance_km` is whatever the
/// distance lookup returned for the pair.
pub fn validate_form(
    request: &TripRequest,
    distance_km: Option<f64>,
    catalog: &dyn TransportCatalog,
    max_people: u32,
) -> ValidationResult {
    let (Some(origin), Some(destination), Some(transport_id)) = (
        present(&request.origin),
        present(&request.destination),
        present(&request.transport_id),
    ) else {
        return ValidationResult::invalid(MSG_MISSING_FIELDS);
    };

    let Some(people) = request.people else {
        return ValidationResult::invalid(MSG_MISSING_FIELDS);
    };

    if origin.to_lowercase() == destination.to_lowercase() {
        return ValidationResult::invalid(MSG_SAME_LOCATION);
    }

    if distance_km.is_none() {
        return ValidationResult::invalid(MSG_DISTANCE_UNKNOWN);
    }

    if people < 1 {
        return ValidationResult::invalid(MSG_TOO_FEW_PEOPLE);
    }

    if people > i64::from(max_people) {
        return ValidationResult::invalid(too_many_people_message(max_people));
    }

    if catalog.transport(transport_id).is_none() {
        return ValidationResult::invalid(MSG_UNKNOWN_TRANSPORT);
    }

    ValidationResult::valid()
}
