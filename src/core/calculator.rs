use crate::core::emission::{
    compute_detailed_emission_per_person, compute_total_emission, estimate_trees_to_offset,
    format_distance, format_emission, DEFAULT_DECIMALS,
};
use crate::core::validator::{validate_calculation_inputs, validate_form, MAX_PEOPLE};
use crate::domain::model::{
    TripReport, TripRequest, ValidationResult, DEFAULT_HUMAN_RESPIRATION_FACTOR, WALKING_ID,
};
use crate::domain::ports::{DistanceLookup, TransportCatalog};
use crate::utils::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorSettings {
    pub human_respiration_factor: f64,
    pub max_people: u32,
    pub decimals: usize,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            human_respiration_factor: DEFAULT_HUMAN_RESPIRATION_FACTOR,
            max_people: MAX_PEOPLE,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Runs one trip through validation and the emission model.
pub struct TripCalculator<D: DistanceLookup, T: TransportCatalog> {
    distances: D,
    catalog: T,
    settings: CalculatorSettings,
}

impl<D: DistanceLookup, T: TransportCatalog> TripCalculator<D, T> {
    pub fn new(distances: D, catalog: T) -> Self {
        Self::with_settings(distances, catalog, CalculatorSettings::default())
    }

    pub fn with_settings(distances: D, catalog: T, settings: CalculatorSettings) -> Self {
        Self {
            distances,
            catalog,
            settings,
        }
    }

    pub fn distances(&self) -> &D {
        &self.distances
    }

    pub fn catalog(&self) -> &T {
        &self.catalog
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Distance for a city pair, `None` when either city or the route is unknown.
    pub fn distance_between(&self, origin: &str, destination: &str) -> Option<f64> {
        self.distances.distance_km(origin, destination)
    }

    /// Validation outcome for a request without computing anything.
    pub fn check(&self, request: &TripRequest) -> ValidationResult {
        let distance = self.lookup_distance(request);
        let form = validate_form(request, distance, &self.catalog, self.settings.max_people);
        if !form.is_valid {
            return form;
        }

        let transport_id = request.transport_id.as_deref().unwrap_or_default().trim();
        validate_calculation_inputs(distance, self.catalog.emission_factor(transport_id))
    }

    pub fn calculate(&self, request: &TripRequest) -> Result<TripReport> {
        let verdict = self.check(request);
        if !verdict.is_valid {
            tracing::warn!("Rejected trip {:?}: {}", request, verdict.message);
            return Err(CalcError::validation(verdict.message));
        }

        // check() guarantees every field is present and in range from here on.
        let origin = self.display_city(request.origin.as_deref().unwrap_or_default());
        let destination = self.display_city(request.destination.as_deref().unwrap_or_default());
        let transport_id = request.transport_id.as_deref().unwrap_or_default().trim();
        let people = u32::try_from(request.people.unwrap_or(1))
            .map_err(|_| CalcError::validation(crate::core::validator::MSG_TOO_FEW_PEOPLE))?;
        let distance_km = self.lookup_distance(request).unwrap_or_default();
        let factor = self.catalog.emission_factor(transport_id);
        let human = self.settings.human_respiration_factor;

        tracing::debug!(
            "Calculating {} -> {} ({} km) by {} (factor {}) for {} people",
            origin,
            destination,
            distance_km,
            transport_id,
            factor,
            people
        );

        let total = compute_total_emission(distance_km, factor, people, transport_id, human);
        let breakdown = compute_detailed_emission_per_person(distance_km, factor, people, transport_id, human);
        let decimals = self.settings.decimals;

        let report = TripReport {
            origin,
            destination,
            distance: format_distance(distance_km),
            distance_km,
            transport: self.catalog.transport_label(transport_id),
            transport_id: transport_id.to_string(),
            people,
            transport_per_person: format_emission(breakdown.transport_per_person, decimals),
            human_per_person: format_emission(breakdown.human_per_person, decimals),
            emission_per_person: format_emission(breakdown.total_per_person, decimals),
            emission: format_emission(total, decimals),
            total_kg: total,
            breakdown,
            show_detailed: transport_id != WALKING_ID,
            trees_to_offset: estimate_trees_to_offset(total),
        };

        tracing::info!("Trip {} -> {}: {}", report.origin, report.destination, report.emission);
        Ok(report)
    }

    fn lookup_distance(&self, request: &TripRequest) -> Option<f64> {
        match (request.origin.as_deref(), request.destination.as_deref()) {
            (Some(origin), Some(destination)) => self.distances.distance_km(origin, destination),
            _ => None,
        }
    }

    fn display_city(&self, name: &str) -> String {
        self.distances
            .resolve_city(name)
            .unwrap_or_else(|| name.trim().to_string())
    }
}
