use crate::{IngredientFactory, IngredientKind, IngredientSet, PizzaRecipe, PizzeriaError};

/// The cheese pizza base topped with the region's clams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClamPizza;

impl ClamPizza {
    pub fn recipe() -> Box<dyn PizzaRecipe> {
        Box::new(Self)
    }
}

impl PizzaRecipe for ClamPizza {
    fn required_kinds(&self) -> &'static [IngredientKind] {
        &[
            IngredientKind::Dough,
            IngredientKind::Sauce,
            IngredientKind::Cheese,
            IngredientKind::Clam,
        ]
    }

    fn gather(&self, factory: &dyn IngredientFactory) -> Result<IngredientSet, PizzeriaError> {
        IngredientSet::new(
            factory.create_dough(),
            factory.create_sauce(),
            factory.create_cheese(),
        )?
        .with_clam(factory.create_clam())
    }
}
