use crate::domain::ports::DistanceLookup;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

const CAPITALS: &[&str] = &[
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Brasília",
    "Curitiba",
    "Florianópolis",
    "Porto Alegre",
    "Salvador",
    "Recife",
    "Fortaleza",
    "Belém",
    "Manaus",
];

// Approximate road distances in km. Pairs that are missing have no road route on record.
const ROAD_DISTANCES: &[(&str, &str, f64)] = &[
    ("São Paulo", "Rio de Janeiro", 429.0),
    ("São Paulo", "Belo Horizonte", 586.0),
    ("São Paulo", "Brasília", 1015.0),
    ("São Paulo", "Curitiba", 408.0),
    ("São Paulo", "Florianópolis", 705.0),
    ("São Paulo", "Porto Alegre", 1109.0),
    ("São Paulo", "Salvador", 1962.0),
    ("São Paulo", "Recife", 2660.0),
    ("São Paulo", "Fortaleza", 3127.0),
    ("São Paulo", "Belém", 2933.0),
    ("Rio de Janeiro", "Belo Horizonte", 434.0),
    ("Rio de Janeiro", "Brasília", 1148.0),
    ("Rio de Janeiro", "Curitiba", 852.0),
    ("Rio de Janeiro", "Florianópolis", 1144.0),
    ("Rio de Janeiro", "Porto Alegre", 1553.0),
    ("Rio de Janeiro", "Salvador", 1649.0),
    ("Rio de Janeiro", "Recife", 2338.0),
    ("Rio de Janeiro", "Fortaleza", 2805.0),
    ("Rio de Janeiro", "Belém", 3250.0),
    ("Belo Horizonte", "Brasília", 716.0),
    ("Belo Horizonte", "Curitiba", 1004.0),
    ("Belo Horizonte", "Florianópolis", 1301.0),
    ("Belo Horizonte", "Porto Alegre", 1712.0),
    ("Belo Horizonte", "Salvador", 1372.0),
    ("Belo Horizonte", "Recife", 2061.0),
    ("Belo Horizonte", "Fortaleza", 2528.0),
    ("Belo Horizonte", "Belém", 2824.0),
    ("Brasília", "Curitiba", 1366.0),
    ("Brasília", "Florianópolis", 1673.0),
    ("Brasília", "Porto Alegre", 2027.0),
    ("Brasília", "Salvador", 1446.0),
    ("Brasília", "Recife", 2220.0),
    ("Brasília", "Fortaleza", 2200.0),
    ("Brasília", "Belém", 2120.0),
    ("Brasília", "Manaus", 3490.0),
    ("Curitiba", "Florianópolis", 300.0),
    ("Curitiba", "Porto Alegre", 711.0),
    ("Curitiba", "Salvador", 2385.0),
    ("Curitiba", "Recife", 3078.0),
    ("Curitiba", "Fortaleza", 3541.0),
    ("Florianópolis", "Porto Alegre", 476.0),
    ("Florianópolis", "Salvador", 2682.0),
    ("Florianópolis", "Recife", 3375.0),
    ("Florianópolis", "Fortaleza", 3838.0),
    ("Porto Alegre", "Salvador", 3090.0),
    ("Porto Alegre", "Recife", 3779.0),
    ("Porto Alegre", "Fortaleza", 4242.0),
    ("Salvador", "Recife", 839.0),
    ("Salvador", "Fortaleza", 1389.0),
    ("Salvador", "Belém", 2100.0),
    ("Recife", "Fortaleza", 800.0),
    ("Recife", "Belém", 2074.0),
    ("Fortaleza", "Belém", 1610.0),
];

static SHARED: LazyLock<CapitalDistanceTable> = LazyLock::new(CapitalDistanceTable::default);

/// An extra or replacement route, as read from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub from: String,
    pub to: String,
    pub km: f64,
}

impl RouteEntry {
    pub fn validate(&self) -> Result<()> {
        validate_non_empty_string("routes.from", &self.from)?;
        validate_non_empty_string("routes.to", &self.to)?;
        if self.from.trim().to_lowercase() == self.to.trim().to_lowercase() {
            return Err(CalcError::ConfigValidationError {
                field: "routes".to_string(),
                message: format!("route from {} to itself", self.from),
            });
        }
        validate_positive("routes.km", self.km)
    }
}

fn route_key(a: &str, b: &str) -> (String, String) {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Symmetric city-to-city distance table.
#[derive(Debug, Clone)]
pub struct CapitalDistanceTable {
    cities: Vec<String>,
    routes: HashMap<(String, String), f64>,
}

impl Default for CapitalDistanceTable {
    fn default() -> Self {
        let mut table = Self {
            cities: CAPITALS.iter().map(|c| c.to_string()).collect(),
            routes: HashMap::with_capacity(ROAD_DISTANCES.len()),
        };
        for (from, to, km) in ROAD_DISTANCES {
            table.insert(from, to, *km);
        }
        table
    }
}

impl CapitalDistanceTable {
    pub fn shared() -> &'static CapitalDistanceTable {
        &SHARED
    }

    fn insert(&mut self, from: &str, to: &str, km: f64) {
        for city in [from, to] {
            if !self.cities.iter().any(|c| c.to_lowercase() == city.to_lowercase()) {
                self.cities.push(city.to_string());
            }
        }
        self.routes.insert(route_key(from, to), km);
    }

    /// Adds configured routes on top of the built-in table; new city names are appended.
    pub fn with_routes(mut self, routes: &[RouteEntry]) -> Result<Self> {
        for route in routes {
            route.validate()?;
            tracing::debug!("Adding route {} <-> {}: {} km", route.from, route.to, route.km);
            self.insert(route.from.trim(), route.to.trim(), route.km);
        }
        Ok(self)
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl DistanceLookup for CapitalDistanceTable {
    fn distance_km(&self, origin: &str, destination: &str) -> Option<f64> {
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.to_lowercase() == destination.to_lowercase() {
            return Some(0.0);
        }
        self.routes.get(&route_key(origin, destination)).copied()
    }

    fn cities(&self) -> Vec<String> {
        self.cities.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let table = CapitalDistanceTable::shared();
        assert_eq!(table.distance_km("São Paulo", "Rio de Janeiro"), Some(429.0));
        assert_eq!(table.distance_km("Rio de Janeiro", "São Paulo"), Some(429.0));
        for (from, to, km) in ROAD_DISTANCES {
            assert_eq!(table.distance_km(to, from), Some(*km));
        }
    }

    #[test]
    fn test_same_city_is_zero() {
        let table = CapitalDistanceTable::shared();
        assert_eq!(table.distance_km("Recife", "Recife"), Some(0.0));
        assert_eq!(table.distance_km("recife", "Recife "), Some(0.0));
    }

    #[test]
    fn test_unknown_route_is_absent() {
        let table = CapitalDistanceTable::shared();
        assert_eq!(table.distance_km("Manaus", "Recife"), None);
        assert_eq!(table.distance_km("Atlantis", "Recife"), None);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let table = CapitalDistanceTable::shared();
        assert_eq!(table.distance_km("são paulo", "CURITIBA"), Some(408.0));
        assert_eq!(table.resolve_city("brasília"), Some("Brasília".to_string()));
        assert_eq!(table.resolve_city("Atlantis"), None);
    }

    #[test]
    fn test_every_route_uses_a_listed_capital() {
        let table = CapitalDistanceTable::default();
        assert_eq!(table.cities().len(), CAPITALS.len());
        assert_eq!(table.route_count(), ROAD_DISTANCES.len());
    }

    #[test]
    fn test_configured_routes() {
        let routes = vec![
            RouteEntry { from: "Manaus".into(), to: "Recife".into(), km: 5700.0 },
            RouteEntry { from: "Natal".into(), to: "Recife".into(), km: 286.0 },
        ];
        let table = CapitalDistanceTable::default().with_routes(&routes).unwrap();
        assert_eq!(table.distance_km("Recife", "Manaus"), Some(5700.0));
        assert_eq!(table.distance_km("Natal", "Recife"), Some(286.0));
        assert!(table.cities().contains(&"Natal".to_string()));

        let bad = vec![RouteEntry { from: "Natal".into(), to: "Recife".into(), km: 0.0 }];
        assert!(CapitalDistanceTable::default().with_routes(&bad).is_err());

        let self_loop = vec![RouteEntry { from: "Natal".into(), to: "natal".into(), km: 10.0 }];
        assert!(matches!(
            CapitalDistanceTable::default().with_routes(&self_loop),
            Err(CalcError::ConfigValidationError { .. })
        ));
    }
}
