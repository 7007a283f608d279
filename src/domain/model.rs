use serde::{Deserialize, Serialize};

/// kg CO₂ exhaled per person per km, assuming ~1 kg/day at a walking pace of 120 km/day.
pub const DEFAULT_HUMAN_RESPIRATION_FACTOR: f64 = 0.0083;

/// Transport id for which no emission is reported at all.
pub const WALKING_ID: &str = "walking";

/// One calculation's numeric inputs, already resolved from the reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    pub distance_km: f64,
    /// kg CO₂ per passenger per km.
    pub transport_emission_factor: f64,
    pub people_count: u32,
    pub transport_id: String,
    /// kg CO₂ per person per km.
    pub human_respiration_factor: f64,
}

impl TripInput {
    pub fn new(distance_km: f64, transport_emission_factor: f64) -> Self {
        Self {
            distance_km,
            transport_emission_factor,
            people_count: 1,
            transport_id: String::new(),
            human_respiration_factor: DEFAULT_HUMAN_RESPIRATION_FACTOR,
        }
    }

    pub fn with_people(mut self, people_count: u32) -> Self {
        self.people_count = people_count;
        self
    }

    pub fn with_transport(mut self, transport_id: impl Into<String>) -> Self {
        self.transport_id = transport_id.into();
        self
    }

    pub fn with_human_factor(mut self, human_respiration_factor: f64) -> Self {
        self.human_respiration_factor = human_respiration_factor;
        self
    }

    pub fn is_walking(&self) -> bool {
        self.transport_id == WALKING_ID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub transport_per_person: f64,
    pub human_per_person: f64,
    pub total_per_person: f64,
}

impl EmissionBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportType {
    pub id: String,
    pub display_name: String,
    pub icon: String,
    /// kg CO₂ per passenger per km.
    pub emission_factor: f64,
}

impl TransportType {
    /// "🚗 Car (Gasoline)"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.display_name)
    }
}

/// Raw form input as gathered by an adapter; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub transport_id: Option<String>,
    pub people: Option<i64>,
}

impl TripRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        transport_id: impl Into<String>,
        people: i64,
    ) -> Self {
        Self {
            origin: Some(origin.into()),
            destination: Some(destination.into()),
            transport_id: Some(transport_id.into()),
            people: Some(people),
        }
    }
}

/// Everything a rendering layer needs to show one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub distance_km: f64,
    pub transport: String,
    pub transport_id: String,
    pub people: u32,
    pub transport_per_person: String,
    pub human_per_person: String,
    pub emission_per_person: String,
    pub emission: String,
    pub total_kg: f64,
    pub breakdown: EmissionBreakdown,
    pub show_detailed: bool,
    pub trees_to_offset: u64,
}
