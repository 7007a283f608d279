use crate::domain::model::TransportType;
use crate::domain::ports::TransportCatalog;
use crate::utils::error::{CalcError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

struct TransportSpec {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    factor: f64,
}

// kg CO₂ / passenger / km, average occupancy.
const TRANSPORTS: &[TransportSpec] = &[
    TransportSpec { id: "car", name: "Car (Gasoline)", icon: "🚗", factor: 0.192 },
    TransportSpec { id: "car_electric", name: "Electric Car", icon: "🚙", factor: 0.05 },
    TransportSpec { id: "motorcycle", name: "Motorcycle", icon: "🏍️", factor: 0.113 },
    TransportSpec { id: "bus", name: "Bus", icon: "🚌", factor: 0.089 },
    TransportSpec { id: "train", name: "Train", icon: "🚂", factor: 0.014 },
    TransportSpec { id: "walking", name: "On Foot", icon: "🚶", factor: 0.0 },
    TransportSpec { id: "plane_domestic", name: "Plane (Domestic Flight)", icon: "✈️", factor: 0.255 },
    TransportSpec { id: "plane_international", name: "Plane (International Flight)", icon: "🛫", factor: 0.195 },
    TransportSpec { id: "ship", name: "Ship/Cruise", icon: "🚢", factor: 0.019 },
    TransportSpec { id: "ferry", name: "Ferry", icon: "⛴️", factor: 0.018 },
];

static SHARED: LazyLock<StaticTransportCatalog> = LazyLock::new(StaticTransportCatalog::default);

#[derive(Debug, Clone, PartialEq)]
pub struct StaticTransportCatalog {
    transports: Vec<TransportType>,
}

impl Default for StaticTransportCatalog {
    fn default() -> Self {
        let transports = TRANSPORTS
            .iter()
            .map(|spec| TransportType {
                id: spec.id.to_string(),
                display_name: spec.name.to_string(),
                icon: spec.icon.to_string(),
                emission_factor: spec.factor,
            })
            .collect();
        Self { transports }
    }
}

impl StaticTransportCatalog {
    /// The built-in catalog, built on first use.
    pub fn shared() -> &'static StaticTransportCatalog {
        &SHARED
    }

    /// Replaces the factors of known transports. Unknown ids and negative factors are rejected.
    pub fn with_factor_overrides(mut self, overrides: &HashMap<String, f64>) -> Result<Self> {
        for (id, factor) in overrides {
            crate::utils::validation::validate_non_negative(
                &format!("emission.factors.{}", id),
                *factor,
            )?;

            let transport = self
                .transports
                .iter_mut()
                .find(|t| &t.id == id)
                .ok_or_else(|| CalcError::InvalidConfigValueError {
                    field: "emission.factors".to_string(),
                    value: id.clone(),
                    reason: "Unknown transport id".to_string(),
                })?;

            tracing::debug!("Overriding emission factor of {}: {} -> {}", id, transport.emission_factor, factor);
            transport.emission_factor = *factor;
        }
        Ok(self)
    }
}

impl TransportCatalog for StaticTransportCatalog {
    fn transports(&self) -> &[TransportType] {
        &self.transports
    }
}
