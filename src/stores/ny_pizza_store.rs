use crate::factories::NyIngredientFactory;
use crate::recipes::{CheesePizza, ClamPizza};
use crate::{IngredientFactory, MenuEntry, PizzaStore, Region};

const MENU: &[MenuEntry] = &[
    MenuEntry {
        keyword: "cheese",
        display_name: "NY Style Sauce and Cheese Pizza",
        recipe: CheesePizza::recipe,
    },
    MenuEntry {
        keyword: "clam",
        display_name: "NY Style Clam Pizza",
        recipe: ClamPizza::recipe,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct NyPizzaStore;

impl PizzaStore for NyPizzaStore {
    fn region(&self) -> Region {
        Region::NEW_YORK
    }

    fn ingredient_factory(&self) -> Box<dyn IngredientFactory> {
        Box::new(NyIngredientFactory)
    }

    fn menu(&self) -> &[MenuEntry] {
        MENU
    }
}
