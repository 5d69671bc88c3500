// src/factories/chicago_ingredient_factory.rs

use crate::{CheeseVariety, ClamVariety, DoughVariety, IngredientFactory, Region, SauceVariety};

/// Chicago style ingredients: thick crust, plum tomato, mozzarella and frozen clams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChicagoIngredientFactory;

impl IngredientFactory for ChicagoIngredientFactory {
    fn region(&self) -> Region {
        Region::CHICAGO
    }

    fn dough_variety(&self) -> DoughVariety {
        DoughVariety::ThickCrust
    }

    fn sauce_variety(&self) -> SauceVariety {
        SauceVariety::PlumTomato
    }

    fn cheese_variety(&self) -> CheeseVariety {
        CheeseVariety::Mozzarella
    }

    fn clam_variety(&self) -> ClamVariety {
        ClamVariety::Frozen
    }
}
