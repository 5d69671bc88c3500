use crate::{
    Cheese, CheeseVariety, Clams, ClamVariety, Dough, DoughVariety, Pepperoni, PepperoniVariety,
    Region, Sauce, SauceVariety, Vegetables, VeggieList,
};
use std::fmt;

/// Source of one region's ingredients.
///
/// Implementors only choose a region and a variety per ingredient kind. The
/// `create_*` producers are provided and tag every value with [`region`], so
/// all ingredients from one factory belong to the same family. Each call
/// produces a fresh value.
///
/// [`region`]: IngredientFactory::region
pub trait IngredientFactory: fmt::Debug + Send + Sync {
    fn region(&self) -> Region;

    fn dough_variety(&self) -> DoughVariety;

    fn sauce_variety(&self) -> SauceVariety;

    fn cheese_variety(&self) -> CheeseVariety;

    fn pepperoni_variety(&self) -> PepperoniVariety {
        PepperoniVariety::Sliced
    }

    fn clam_variety(&self) -> ClamVariety;

    fn veggie_list(&self) -> VeggieList {
        VeggieList::house()
    }

    fn create_dough(&self) -> Dough {
        Dough::new(self.dough_variety(), self.region())
    }

    fn create_sauce(&self) -> Sauce {
        Sauce::new(self.sauce_variety(), self.region())
    }

    fn create_cheese(&self) -> Cheese {
        Cheese::new(self.cheese_variety(), self.region())
    }

    fn create_pepperoni(&self) -> Pepperoni {
        Pepperoni::new(self.pepperoni_variety(), self.region())
    }

    fn create_clam(&self) -> Clams {
        Clams::new(self.clam_variety(), self.region())
    }

    fn create_veggies(&self) -> Vegetables {
        Vegetables::new(self.veggie_list(), self.region())
    }
}
