// src/factories/mod.rs

mod chicago_ingredient_factory;
mod ny_ingredient_factory;

pub use chicago_ingredient_factory::ChicagoIngredientFactory;
pub use ny_ingredient_factory::NyIngredientFactory;
