use crate::factories::ChicagoIngredientFactory;
use crate::recipes::{CheesePizza, ClamPizza};
use crate::{IngredientFactory, MenuEntry, PizzaStore, Region};

const MENU: &[MenuEntry] = &[
    MenuEntry {
        keyword: "cheese",
        display_name: "Chicago Style Cheese Pizza",
        recipe: CheesePizza::recipe,
    },
    MenuEntry {
        keyword: "clam",
        display_name: "Chicago Style Clam Pizza",
        recipe: ClamPizza::recipe,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn region(&self) -> Region {
        Region::CHICAGO
    }

    fn ingredient_factory(&self) -> Box<dyn IngredientFactory> {
        Box::new(ChicagoIngredientFactory)
    }

    fn menu(&self) -> &[MenuEntry] {
        MENU
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CheeseVariety, ClamVariety, DoughVariety, PizzaState, PizzeriaError, SauceVariety,
    };

    #[test]
    fn test_order_clam() {
        let pizza = ChicagoPizzaStore.order("clam").unwrap();

        assert_eq!(pizza.name(), Some("Chicago Style Clam Pizza"));
        assert_eq!(pizza.state(), PizzaState::Boxed);

        let set = pizza.ingredients().unwrap();
        assert_eq!(set.dough().variety(), &DoughVariety::ThickCrust);
        assert_eq!(set.sauce().variety(), &SauceVariety::PlumTomato);
        assert_eq!(set.cheese().variety(), &CheeseVariety::Mozzarella);
        assert_eq!(
            set.clam().map(|c| *c.variety()),
            Some(ClamVariety::Frozen)
        );
    }

    #[test]
    fn test_order_cheese_name() {
        let pizza = ChicagoPizzaStore.order("cheese").unwrap();
        assert_eq!(pizza.name(), Some("Chicago Style Cheese Pizza"));
    }

    #[test]
    fn test_keyword_match_is_exact() {
        let result = ChicagoPizzaStore.order("Cheese");
        match result {
            Err(PizzeriaError::UnrecognizedOrder { region, keyword }) => {
                assert_eq!(region, Region::CHICAGO);
                assert_eq!(keyword, "Cheese");
            }
            other => panic!("expected UnrecognizedOrder, got {:?}", other),
        }
    }
}
