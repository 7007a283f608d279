use crate::catalog::{CapitalDistanceTable, RouteEntry, StaticTransportCatalog};
use crate::core::calculator::{CalculatorSettings, TripCalculator};
use crate::core::validator::MAX_PEOPLE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Optional overrides for the built-in reference data. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub emission: EmissionConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmissionConfig {
    pub human_respiration_factor: Option<f64>,
    pub decimals: Option<usize>,
    pub factors: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_people: Option<u32>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(factor) = self.emission.human_respiration_factor {
            validate_non_negative("emission.human_respiration_factor", factor)?;
        }

        if let Some(decimals) = self.emission.decimals {
            validate_range("emission.decimals", decimals, 0, 6)?;
        }

        if let Some(max_people) = self.limits.max_people {
            validate_range("limits.max_people", max_people, 1, MAX_PEOPLE)?;
        }

        for route in &self.routes {
            route.validate()?;
        }

        // Factor overrides are checked against the catalog itself.
        self.build_catalog().map(|_| ())
    }

    pub fn settings(&self) -> CalculatorSettings {
        let defaults = CalculatorSettings::default();
        CalculatorSettings {
            human_respiration_factor: self
                .emission
                .human_respiration_factor
                .unwrap_or(defaults.human_respiration_factor),
            max_people: self.limits.max_people.unwrap_or(defaults.max_people),
            decimals: self.emission.decimals.unwrap_or(defaults.decimals),
        }
    }

    pub fn build_catalog(&self) -> Result<StaticTransportCatalog> {
        let catalog = StaticTransportCatalog::default();
        match &self.emission.factors {
            Some(factors) => catalog.with_factor_overrides(factors),
            None => Ok(catalog),
        }
    }

    pub fn build_distances(&self) -> Result<CapitalDistanceTable> {
        CapitalDistanceTable::default().with_routes(&self.routes)
    }

    pub fn build_calculator(&self) -> Result<TripCalculator<CapitalDistanceTable, StaticTransportCatalog>> {
        self.validate()?;
        Ok(TripCalculator::with_settings(
            self.build_distances()?,
            self.build_catalog()?,
            self.settings(),
        ))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
