use crate::{IngredientFactory, IngredientKind, IngredientSet, PizzaRecipe, PizzeriaError};

/// Dough, sauce and cheese. Nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheesePizza;

impl CheesePizza {
    pub fn recipe() -> Box<dyn PizzaRecipe> {
        Box::new(Self)
    }
}

impl PizzaRecipe for CheesePizza {
    fn required_kinds(&self) -> &'static [IngredientKind] {
        &[
            IngredientKind::Dough,
            IngredientKind::Sauce,
            IngredientKind::Cheese,
        ]
    }

    fn gather(&self, factory: &dyn IngredientFactory) -> Result<IngredientSet, PizzeriaError> {
        IngredientSet::new(
            factory.create_dough(),
            factory.create_sauce(),
            factory.create_cheese(),
        )
    }
}
