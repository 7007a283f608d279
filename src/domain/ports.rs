use crate::domain::model::TransportType;

/// Static road distances between a fixed set of cities.
pub trait DistanceLookup: Send + Sync {
    /// Symmetric; `Some(0.0)` when both names are the same city, `None` when no route is known.
    fn distance_km(&self, origin: &str, destination: &str) -> Option<f64>;

    fn cities(&self) -> Vec<String>;

    /// Canonical spelling of `name`, if it is a known city.
    fn resolve_city(&self, name: &str) -> Option<String> {
        let needle = name.trim().to_lowercase();
        self.cities()
            .into_iter()
            .find(|city| city.to_lowercase() == needle)
    }
}

pub trait TransportCatalog: Send + Sync {
    fn transports(&self) -> &[TransportType];

    fn transport(&self, id: &str) -> Option<&TransportType> {
        self.transports().iter().find(|t| t.id == id)
    }

    /// kg CO₂ per passenger per km; unknown ids fall back to 0.
    fn emission_factor(&self, id: &str) -> f64 {
        self.transport(id).map(|t| t.emission_factor).unwrap_or(0.0)
    }

    fn transport_name(&self, id: &str) -> String {
        self.transport(id)
            .map(|t| t.display_name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn transport_icon(&self, id: &str) -> String {
        self.transport(id).map(|t| t.icon.clone()).unwrap_or_default()
    }

    fn transport_label(&self, id: &str) -> String {
        self.transport(id)
            .map(TransportType::label)
            .unwrap_or_else(|| id.to_string())
    }
}
