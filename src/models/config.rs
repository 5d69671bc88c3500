use crate::{PizzeriaError, Region};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which regional stores a [`Pizzeria`](crate::application::Pizzeria) opens.
///
/// ```toml
/// default_region = "NY"
///
/// [[stores]]
/// region = "NY"
///
/// [[stores]]
/// region = "Chicago"
/// enabled = false
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PizzeriaConfig {
    pub default_region: Region,
    pub stores: Vec<StoreConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub region: Region,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl StoreConfig {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl PizzeriaConfig {
    pub fn new(default_region: Region, stores: Vec<StoreConfig>) -> Self {
        Self {
            default_region,
            stores,
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, PizzeriaError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.stores.push(store);
        self
    }

    pub fn enabled_regions(&self) -> impl Iterator<Item = &Region> {
        self.stores
            .iter()
            .filter(|store| store.enabled)
            .map(|store| &store.region)
    }

    pub fn validate(&self) -> Result<(), PizzeriaError> {
        let mut seen = HashSet::new();
        for store in &self.stores {
            if !seen.insert(&store.region) {
                return Err(PizzeriaError::InvalidConfig(format!(
                    "Store `{}` is listed more than once",
                    store.region
                )));
            }
        }

        if self.enabled_regions().next().is_none() {
            return Err(PizzeriaError::InvalidConfig(
                "At least one store must be enabled".to_string(),
            ));
        }

        if !self.enabled_regions().any(|r| *r == self.default_region) {
            return Err(PizzeriaError::InvalidConfig(format!(
                "Default region `{}` is not an enabled store",
                self.default_region
            )));
        }

        Ok(())
    }
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        Self::new(
            Region::NEW_YORK,
            vec![
                StoreConfig::new(Region::NEW_YORK),
                StoreConfig::new(Region::CHICAGO),
            ],
        )
    }
}
