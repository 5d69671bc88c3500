mod cheese_pizza;
mod clam_pizza;

pub use cheese_pizza::CheesePizza;
pub use clam_pizza::ClamPizza;
