pub mod pizza;

pub use pizza::*;
