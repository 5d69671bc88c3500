use crate::{IngredientFactory, Pizza, PizzaRecipe, PizzeriaError, Region};
use std::fmt;

pub type RecipeConstructor = fn() -> Box<dyn PizzaRecipe>;

/// One line of a store's menu: the keyword customers order by, the name the
/// pizza is given, and the recipe it is made with.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub keyword: &'static str,
    pub display_name: &'static str,
    pub recipe: RecipeConstructor,
}

/// A regional store.
///
/// A store only says which factory it sources from and what its menu is.
/// Resolving an order and running the pizza through its lifecycle is shared by
/// every store through the provided [`create_pizza`] and [`order`].
///
/// [`create_pizza`]: PizzaStore::create_pizza
/// [`order`]: PizzaStore::order
pub trait PizzaStore: fmt::Debug + Send + Sync {
    fn region(&self) -> Region;

    /// A new factory for one order. The pizza takes ownership of it.
    fn ingredient_factory(&self) -> Box<dyn IngredientFactory>;

    fn menu(&self) -> &[MenuEntry];

    fn supports(&self, keyword: &str) -> bool {
        self.menu().iter().any(|entry| entry.keyword == keyword)
    }

    /// Builds and names the pizza for `keyword` without starting its lifecycle.
    fn create_pizza(&self, keyword: &str) -> Result<Pizza, PizzeriaError> {
        let entry = self
            .menu()
            .iter()
            .find(|entry| entry.keyword == keyword)
            .ok_or_else(|| PizzeriaError::unrecognized_order(self.region(), keyword))?;

        let mut pizza = Pizza::new((entry.recipe)(), self.ingredient_factory());
        pizza.set_name(entry.display_name)?;
        Ok(pizza)
    }

    /// Orders a pizza and returns it boxed.
    fn order(&self, keyword: &str) -> Result<Pizza, PizzeriaError> {
        tracing::info!(region = %self.region(), keyword, "Order received");

        let mut pizza = self.create_pizza(keyword).inspect_err(|e| {
            tracing::warn!(region = %self.region(), keyword, error = %e, "Order rejected");
        })?;

        pizza.prepare()?;
        pizza.bake()?;
        pizza.cut()?;
        pizza.box_up()?;

        tracing::debug!(pizza_id = %pizza.id(), region = %self.region(), "Order completed");
        Ok(pizza)
    }
}
