use crate::{
    IngredientFactory, IngredientSet, LifecycleStep, PizzaRecipe, PizzaState, PizzeriaError,
    Region,
};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PizzaId(Uuid);

impl PizzaId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PizzaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PizzaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PizzaId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for PizzaId {
    type Error = PizzeriaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(value)
            .map_err(|e| PizzeriaError::validation(format!("Invalid pizza ID: {}", e)))?;
        Ok(Self(uuid))
    }
}

/// A pizza moving through prepare, bake, cut and box.
///
/// The factory is bound at construction and never replaced. Ingredients are
/// empty until [`prepare`](Pizza::prepare) asks the recipe to gather them from
/// that factory; later steps never touch them. Every step checks the current
/// state and refuses to run out of order.
#[derive(Debug)]
pub struct Pizza {
    id: PizzaId,
    name: Option<String>,
    recipe: Box<dyn PizzaRecipe>,
    factory: Box<dyn IngredientFactory>,
    ingredients: Option<IngredientSet>,
    state: PizzaState,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl Pizza {
    pub fn new(recipe: Box<dyn PizzaRecipe>, factory: Box<dyn IngredientFactory>) -> Self {
        Self {
            id: PizzaId::new(),
            name: None,
            recipe,
            factory,
            ingredients: None,
            state: PizzaState::Created,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn id(&self) -> PizzaId {
        self.id
    }

    /// Display name, `None` until one is set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<(), PizzeriaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PizzeriaError::validation("Pizza name cannot be empty"));
        }
        if !self.state.accepts_name() {
            return Err(PizzeriaError::NameLocked { state: self.state });
        }

        self.name = Some(name);
        self.state = PizzaState::Named;
        Ok(())
    }

    pub fn recipe(&self) -> &dyn PizzaRecipe {
        self.recipe.as_ref()
    }

    /// Region of the bound factory.
    pub fn region(&self) -> Region {
        self.factory.region()
    }

    pub fn ingredients(&self) -> Option<&IngredientSet> {
        self.ingredients.as_ref()
    }

    pub fn state(&self) -> PizzaState {
        self.state
    }

    pub fn is_boxed(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    pub fn prepare(&mut self) -> Result<&IngredientSet, PizzeriaError> {
        let next = self.next_state(LifecycleStep::Prepare)?;
        let name = self.display_name().to_string();

        tracing::info!(pizza = %name, "Preparing {}", name);
        let ingredients = self.recipe.gather(self.factory.as_ref())?;

        tracing::info!(pizza = %name, dough = %ingredients.dough(), "Tossing dough...");
        tracing::info!(pizza = %name, sauce = %ingredients.sauce(), "Adding sauce...");
        tracing::info!(pizza = %name, "Adding toppings:");
        for topping in ingredients.toppings() {
            tracing::info!(pizza = %name, "  - {}", topping);
        }

        self.state = next;
        let ingredients: &IngredientSet = self.ingredients.insert(ingredients);
        Ok(ingredients)
    }

    pub fn bake(&mut self) -> Result<(), PizzeriaError> {
        let next = self.next_state(LifecycleStep::Bake)?;
        tracing::info!(pizza = %self.display_name(), "Bake for 25 minutes at 350");
        self.state = next;
        Ok(())
    }

    pub fn cut(&mut self) -> Result<(), PizzeriaError> {
        let next = self.next_state(LifecycleStep::Cut)?;
        tracing::info!(pizza = %self.display_name(), "Cutting the pizza into diagonal slices");
        self.state = next;
        Ok(())
    }

    /// The box step.
    pub fn box_up(&mut self) -> Result<(), PizzeriaError> {
        let next = self.next_state(LifecycleStep::Box)?;
        tracing::info!(pizza = %self.display_name(), "Place pizza in official PizzaStore box");
        self.state = next;
        Ok(())
    }

    fn next_state(&self, step: LifecycleStep) -> Result<PizzaState, PizzeriaError> {
        self.state
            .advance(step)
            .ok_or_else(|| PizzeriaError::lifecycle(step, self.state))
    }

    // Only called once the state machine has passed Named.
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
