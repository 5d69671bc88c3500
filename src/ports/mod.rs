// src/ports/mod.rs

pub use ingredient_factory::IngredientFactory;
pub use pizza_recipe::PizzaRecipe;
pub use pizza_store::{MenuEntry, PizzaStore, RecipeConstructor};

pub mod ingredient_factory;
pub mod pizza_recipe;
pub mod pizza_store;
