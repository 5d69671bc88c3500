use crate::stores::{ChicagoPizzaStore, NyPizzaStore};
use crate::{PizzaStore, Region};
use std::collections::HashMap;
use std::fmt;

pub type StoreConstructor = Box<dyn Fn() -> Box<dyn PizzaStore> + Send + Sync>;

/// Knows how to open a store for each region.
///
/// A [`Pizzeria`](super::Pizzeria) only opens the regions its configuration
/// names, so every configured region needs an entry here.
#[derive(Default)]
pub struct StoreRegistry {
    constructors: HashMap<Region, StoreConstructor>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// NY and Chicago.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Region::NEW_YORK, || Box::new(NyPizzaStore));
        registry.register(Region::CHICAGO, || Box::new(ChicagoPizzaStore));
        registry
    }

    /// Adds or replaces the constructor for `region`.
    pub fn register<F>(&mut self, region: Region, constructor: F) -> &mut Self
    where
        F: Fn() -> Box<dyn PizzaStore> + Send + Sync + 'static,
    {
        self.constructors.insert(region, Box::new(constructor));
        self
    }

    pub fn contains(&self, region: &Region) -> bool {
        self.constructors.contains_key(region)
    }

    pub fn open(&self, region: &Region) -> Option<Box<dyn PizzaStore>> {
        self.constructors.get(region).map(|constructor| constructor())
    }
}

impl fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut regions: Vec<_> = self.constructors.keys().collect();
        regions.sort();
        f.debug_struct("StoreRegistry")
            .field("regions", &regions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_opens_both_regions() {
        let registry = StoreRegistry::builtin();

        let ny = registry.open(&Region::NEW_YORK).unwrap();
        let chicago = registry.open(&Region::CHICAGO).unwrap();

        assert_eq!(ny.region(), Region::NEW_YORK);
        assert_eq!(chicago.region(), Region::CHICAGO);
        assert!(registry.open(&Region::new("Detroit")).is_none());
    }

    #[test]
    fn test_register_replaces_existing_constructor() {
        let mut registry = StoreRegistry::builtin();
        registry.register(Region::NEW_YORK, || Box::new(ChicagoPizzaStore));

        let store = registry.open(&Region::NEW_YORK).unwrap();
        assert_eq!(store.region(), Region::CHICAGO);
    }
}
