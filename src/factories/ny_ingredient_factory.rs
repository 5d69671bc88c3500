// src/factories/ny_ingredient_factory.rs

use crate::{CheeseVariety, ClamVariety, DoughVariety, IngredientFactory, Region, SauceVariety};

/// New York style ingredients: thin crust, marinara, reggiano and fresh clams.
#[derive(Debug, Clone, Copy, Default)]
pub struct NyIngredientFactory;

impl IngredientFactory for NyIngredientFactory {
    fn region(&self) -> Region {
        Region::NEW_YORK
    }

    fn dough_variety(&self) -> DoughVariety {
        DoughVariety::ThinCrust
    }

    fn sauce_variety(&self) -> SauceVariety {
        SauceVariety::Marinara
    }

    fn cheese_variety(&self) -> CheeseVariety {
        CheeseVariety::Reggiano
    }

    fn clam_variety(&self) -> ClamVariety {
        ClamVariety::Fresh
    }
}
