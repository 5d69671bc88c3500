mod pizzeria;
mod store_registry;

pub use pizzeria::Pizzeria;
pub use store_registry::{StoreConstructor, StoreRegistry};
