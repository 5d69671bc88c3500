use crate::{IngredientFactory, IngredientKind, IngredientSet, PizzeriaError};
use std::fmt;

/// A kind of pizza: decides which ingredients it needs.
///
/// The recipe picks the kinds; the factory it is handed picks the region.
/// `gather` must ask for dough, sauce and cheese first, then its extras.
pub trait PizzaRecipe: fmt::Debug + Send + Sync {
    fn required_kinds(&self) -> &'static [IngredientKind];

    fn gather(&self, factory: &dyn IngredientFactory) -> Result<IngredientSet, PizzeriaError>;
}
