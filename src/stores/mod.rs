mod chicago_pizza_store;
mod ny_pizza_store;

pub use chicago_pizza_store::ChicagoPizzaStore;
pub use ny_pizza_store::NyPizzaStore;
