use crate::application::StoreRegistry;
use crate::{Pizza, PizzaStore, PizzeriaConfig, PizzeriaError, Region};
use std::collections::HashMap;

/// Entry point for ordering from several regional stores.
///
/// Opens one store per enabled region in its configuration and routes orders
/// to them. Orders never change the pizzeria or its stores, so one instance
/// serves any number of them.
#[derive(Debug)]
pub struct Pizzeria {
    config: PizzeriaConfig,
    stores: HashMap<Region, Box<dyn PizzaStore>>,
}

impl Pizzeria {
    /// NY and Chicago stores, NY by default.
    pub fn new() -> Self {
        let config = PizzeriaConfig::default();
        let registry = StoreRegistry::builtin();
        // The default config only lists NY and Chicago, both in `builtin()`,
        // so nothing is filtered out here.
        let stores = config
            .enabled_regions()
            .filter_map(|region| Some((region.clone(), registry.open(region)?)))
            .collect();

        Self { config, stores }
    }

    pub fn from_config(config: PizzeriaConfig) -> Result<Self, PizzeriaError> {
        Self::with_registry(config, &StoreRegistry::builtin())
    }

    pub fn with_registry(
        config: PizzeriaConfig,
        registry: &StoreRegistry,
    ) -> Result<Self, PizzeriaError> {
        config.validate()?;

        let mut stores = HashMap::new();
        for region in config.enabled_regions() {
            let store = registry.open(region).ok_or_else(|| {
                PizzeriaError::InvalidConfig(format!("No store is registered for `{}`", region))
            })?;
            if store.region() != *region {
                return Err(PizzeriaError::ConfigError(format!(
                    "Store registered for `{}` reports region `{}`",
                    region,
                    store.region()
                )));
            }

            tracing::debug!(region = %region, "Opened store");
            stores.insert(region.clone(), store);
        }

        tracing::info!(
            stores = stores.len(),
            default_region = %config.default_region,
            "Pizzeria open"
        );
        Ok(Self { config, stores })
    }

    pub fn config(&self) -> &PizzeriaConfig {
        &self.config
    }

    pub fn default_region(&self) -> &Region {
        &self.config.default_region
    }

    /// Open regions, sorted.
    pub fn regions(&self) -> Vec<&Region> {
        let mut regions: Vec<_> = self.stores.keys().collect();
        regions.sort();
        regions
    }

    pub fn store(&self, region: &Region) -> Option<&dyn PizzaStore> {
        self.stores.get(region).map(|store| store.as_ref())
    }

    /// Orders from the default region's store.
    pub fn order(&self, keyword: &str) -> Result<Pizza, PizzeriaError> {
        self.order_from(&self.config.default_region, keyword)
    }

    pub fn order_from(&self, region: &Region, keyword: &str) -> Result<Pizza, PizzeriaError> {
        let store = self
            .store(region)
            .ok_or_else(|| PizzeriaError::StoreNotFound(region.clone()))?;
        store.order(keyword)
    }
}

impl Default for Pizzeria {
    fn default() -> Self {
        Self::new()
    }
}
