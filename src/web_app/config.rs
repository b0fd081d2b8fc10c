// web_app/config.rs - Storefront settings from the environment
//
// The server calls `dotenv` first, so a local `.env` file works too.
// Site address and asset paths come from leptos_config instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::web_app::catalog::Catalog;
use crate::web_app::error::ConfigError;
use crate::web_app::model::{PriceRange, DEFAULT_PRICE_CEILING};

pub const CATALOG_PATH_VAR: &str = "LUMAKARA_CATALOG_PATH";
pub const PRICE_CEILING_VAR: &str = "LUMAKARA_PRICE_CEILING";
pub const SPLASH_STEP_VAR: &str = "LUMAKARA_SPLASH_STEP";
pub const SPLASH_INTERVAL_VAR: &str = "LUMAKARA_SPLASH_INTERVAL_MS";

static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();

/// Install the global config; only the first call takes effect
pub fn init(config: StorefrontConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Storefront config already initialized, keeping the existing one");
    }
}

/// Get the global config, falling back to the defaults
pub fn get() -> &'static StorefrontConfig {
    CONFIG.get_or_init(StorefrontConfig::default)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// JSON catalog to load; `None` serves the built-in sample
    #[serde(skip)]
    pub catalog_path: Option<PathBuf>,
    pub price_ceiling: Decimal,
    pub splash_step: u8,
    pub splash_interval_ms: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            price_ceiling: Decimal::from(DEFAULT_PRICE_CEILING),
            splash_step: 2,
            splash_interval_ms: 100,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from any variable source; unset or blank values keep their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let price_ceiling = match get(PRICE_CEILING_VAR) {
            Some(value) => {
                let ceiling: Decimal = parse(PRICE_CEILING_VAR, "a non-negative number", &value)?;
                if ceiling < Decimal::ZERO {
                    return Err(invalid(PRICE_CEILING_VAR, "a non-negative number", value));
                }
                ceiling
            }
            None => defaults.price_ceiling,
        };

        let splash_step = match get(SPLASH_STEP_VAR) {
            Some(value) => {
                let step: u8 = parse(SPLASH_STEP_VAR, "an integer between 1 and 100", &value)?;
                if !(1..=100).contains(&step) {
                    return Err(invalid(SPLASH_STEP_VAR, "an integer between 1 and 100", value));
                }
                step
            }
            None => defaults.splash_step,
        };

        let splash_interval_ms = match get(SPLASH_INTERVAL_VAR) {
            Some(value) => {
                let interval: u64 = parse(SPLASH_INTERVAL_VAR, "a positive integer", &value)?;
                if interval == 0 {
                    return Err(invalid(SPLASH_INTERVAL_VAR, "a positive integer", value));
                }
                interval
            }
            None => defaults.splash_interval_ms,
        };

        Ok(Self {
            catalog_path: get(CATALOG_PATH_VAR).map(PathBuf::from),
            price_ceiling,
            splash_step,
            splash_interval_ms,
        })
    }

    /// Top of the price slider for `catalog`
    ///
    /// Never below the catalog's highest price, so the default range keeps
    /// every item reachable.
    pub fn price_ceiling_for(&self, catalog: &Catalog) -> Decimal {
        self.price_ceiling.max(catalog.max_price())
    }

    /// Price range the search page starts from and "Clear All Filters" resets to
    pub fn default_price_range(&self, catalog: &Catalog) -> PriceRange {
        PriceRange::up_to(self.price_ceiling_for(catalog))
    }
}

fn parse<T: FromStr>(var: &'static str, expected: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(var, expected, value.to_string()))
}

fn invalid(var: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        expected,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        let sample = Catalog::sample();
        assert_eq!(config.default_price_range(&sample), PriceRange::default());
    }

    #[test]
    fn test_ceiling_rises_to_the_catalog() {
        let config = StorefrontConfig::default();
        let catalog = Catalog::from_json(
            r#"[
                {"id": "1", "name": "Cable", "price": 10, "rating": 4, "reviews": 3,
                 "category": "Accessories", "brand": "Acme", "inStock": true},
                {"id": "2", "name": "Camera", "price": 1500, "rating": 5, "reviews": 9,
                 "category": "Photo", "brand": "Lumix", "inStock": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(config.price_ceiling_for(&catalog), Decimal::from(1500));
        assert_eq!(
            config.default_price_range(&catalog),
            PriceRange::up_to(Decimal::from(1500))
        );

        let roomy = StorefrontConfig {
            price_ceiling: Decimal::from(5000),
            ..StorefrontConfig::default()
        };
        assert_eq!(roomy.price_ceiling_for(&catalog), Decimal::from(5000));
    }

    #[test]
    fn test_reads_every_variable() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (CATALOG_PATH_VAR, "data/catalog.json"),
            (PRICE_CEILING_VAR, "2500.50"),
            (SPLASH_STEP_VAR, "5"),
            (SPLASH_INTERVAL_VAR, "40"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
        assert_eq!(config.price_ceiling, Decimal::new(250050, 2));
        assert_eq!(config.splash_step, 5);
        assert_eq!(config.splash_interval_ms, 40);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[(CATALOG_PATH_VAR, " "), (SPLASH_STEP_VAR, "")]))
                .unwrap();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.splash_step, 2);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = StorefrontConfig::from_lookup(lookup(&[(PRICE_CEILING_VAR, "lots")])).unwrap_err();
        assert!(err.to_string().starts_with("LUMAKARA_PRICE_CEILING must be"));

        let err = StorefrontConfig::from_lookup(lookup(&[(SPLASH_STEP_VAR, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: SPLASH_STEP_VAR,
                expected: "an integer between 1 and 100",
                value: "0".to_string(),
            }
        );

        assert!(StorefrontConfig::from_lookup(lookup(&[(PRICE_CEILING_VAR, "-5")])).is_err());
        assert!(StorefrontConfig::from_lookup(lookup(&[(SPLASH_INTERVAL_VAR, "0")])).is_err());
    }
}
