use crate::{IngredientKind, LifecycleStep, PizzaState, Region};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PizzeriaError {
    #[error("{region} store does not serve `{keyword}`")]
    UnrecognizedOrder { region: Region, keyword: String },

    #[error("Cannot {step} a pizza that is {state}")]
    LifecycleViolation {
        step: LifecycleStep,
        state: PizzaState,
    },

    #[error("Cannot rename a pizza that is {state}")]
    NameLocked { state: PizzaState },

    #[error("{kind} from {found} mixed into a {expected} ingredient set")]
    MixedRegions {
        kind: IngredientKind,
        expected: Region,
        found: Region,
    },

    #[error("No store open for region `{0}`")]
    StoreNotFound(Region),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PizzeriaError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn unrecognized_order<S: Into<String>>(region: Region, keyword: S) -> Self {
        Self::UnrecognizedOrder {
            region,
            keyword: keyword.into(),
        }
    }

    pub fn lifecycle(step: LifecycleStep, state: PizzaState) -> Self {
        Self::LifecycleViolation { step, state }
    }
}
