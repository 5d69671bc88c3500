use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a pizza is in its lifecycle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaState {
    Created,
    Named,
    Prepared,
    Baked,
    Cut,
    Boxed,
}

/// One of the four fixed steps every pizza goes through.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStep {
    Prepare,
    Bake,
    Cut,
    Box,
}

impl LifecycleStep {
    pub const ALL: [LifecycleStep; 4] = [Self::Prepare, Self::Bake, Self::Cut, Self::Box];

    /// State the pizza must be in for this step to run.
    pub fn required_state(&self) -> PizzaState {
        match self {
            Self::Prepare => PizzaState::Named,
            Self::Bake => PizzaState::Prepared,
            Self::Cut => PizzaState::Baked,
            Self::Box => PizzaState::Cut,
        }
    }

    /// State the pizza is in once this step has run.
    pub fn resulting_state(&self) -> PizzaState {
        match self {
            Self::Prepare => PizzaState::Prepared,
            Self::Bake => PizzaState::Baked,
            Self::Cut => PizzaState::Cut,
            Self::Box => PizzaState::Boxed,
        }
    }
}

impl PizzaState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Boxed)
    }

    /// Whether the pizza may still be renamed.
    pub fn accepts_name(&self) -> bool {
        matches!(self, Self::Created | Self::Named)
    }

    /// Next state after `step`, or `None` if the step is out of order.
    pub fn advance(self, step: LifecycleStep) -> Option<PizzaState> {
        (self == step.required_state()).then(|| step.resulting_state())
    }
}

impl fmt::Display for PizzaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "unnamed"),
            Self::Named => write!(f, "named"),
            Self::Prepared => write!(f, "prepared"),
            Self::Baked => write!(f, "baked"),
            Self::Cut => write!(f, "cut"),
            Self::Boxed => write!(f, "boxed"),
        }
    }
}

impl fmt::Display for LifecycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prepare => write!(f, "prepare"),
            Self::Bake => write!(f, "bake"),
            Self::Cut => write!(f, "cut"),
            Self::Box => write!(f, "box"),
        }
    }
}
