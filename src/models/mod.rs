pub mod config;
pub mod ingredient;
pub mod ingredient_set;
pub mod lifecycle;
pub mod region;

pub use config::*;
pub use ingredient::*;
pub use ingredient_set::*;
pub use lifecycle::*;
pub use region::*;
