use pizzeria_core::application::{Pizzeria, StoreRegistry};
use pizzeria_core::factories::{ChicagoIngredientFactory, NyIngredientFactory};
use pizzeria_core::stores::{ChicagoPizzaStore, NyPizzaStore};
use pizzeria_core::{
    IngredientFactory, IngredientKind, Pizza, PizzaState, PizzaStore, PizzeriaError, Region,
};
use rstest::rstest;

#[rstest]
#[case(Box::new(NyPizzaStore), "cheese", Region::NEW_YORK)]
#[case(Box::new(NyPizzaStore), "clam", Region::NEW_YORK)]
#[case(Box::new(ChicagoPizzaStore), "cheese", Region::CHICAGO)]
#[case(Box::new(ChicagoPizzaStore), "clam", Region::CHICAGO)]
fn test_every_ingredient_comes_from_the_store_region(
    #[case] store: Box<dyn PizzaStore>,
    #[case] keyword: &str,
    #[case] region: Region,
) {
    let pizza = store.order(keyword).unwrap();
    let ingredients = pizza.ingredients().unwrap();

    assert_eq!(pizza.region(), region);
    assert_eq!(ingredients.region(), &region);
    assert!(ingredients.regions().iter().all(|r| **r == region));
}

#[rstest]
#[case(Box::new(NyPizzaStore), "cheese", "NY Style Sauce and Cheese Pizza")]
#[case(Box::new(NyPizzaStore), "clam", "NY Style Clam Pizza")]
#[case(Box::new(ChicagoPizzaStore), "cheese", "Chicago Style Cheese Pizza")]
#[case(Box::new(ChicagoPizzaStore), "clam", "Chicago Style Clam Pizza")]
fn test_orders_come_back_named_and_boxed(
    #[case] store: Box<dyn PizzaStore>,
    #[case] keyword: &str,
    #[case] expected_name: &str,
) {
    let pizza = store.order(keyword).unwrap();

    assert_eq!(pizza.name(), Some(expected_name));
    assert_eq!(pizza.state(), PizzaState::Boxed);
    assert_eq!(
        pizza.ingredients().unwrap().kinds(),
        pizza.recipe().required_kinds()
    );
}

#[rstest]
#[case(Box::new(NyPizzaStore), Region::NEW_YORK)]
#[case(Box::new(ChicagoPizzaStore), Region::CHICAGO)]
fn test_unknown_keywords_are_unrecognized(
    #[case] store: Box<dyn PizzaStore>,
    #[case] expected_region: Region,
    #[values("pepperoni", "veggie", "", " cheese", "CLAM")] keyword: &str,
) {
    match store.order(keyword) {
        Err(PizzeriaError::UnrecognizedOrder { region, keyword: k }) => {
            assert_eq!(region, expected_region);
            assert_eq!(k, keyword);
        }
        other => panic!("expected UnrecognizedOrder, got {:?}", other),
    }
}

#[test]
fn test_store_is_reusable_across_orders() {
    let store = NyPizzaStore;

    let first = store.order("clam").unwrap();
    let second = store.order("clam").unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.ingredients(), second.ingredients());
    assert!(first.ingredients().unwrap().contains(IngredientKind::Clam));
}

fn assert_send_sync<T: Send + Sync + ?Sized>() {}

#[test]
fn test_stores_and_factories_are_shareable() {
    assert_send_sync::<NyPizzaStore>();
    assert_send_sync::<ChicagoPizzaStore>();
    assert_send_sync::<NyIngredientFactory>();
    assert_send_sync::<ChicagoIngredientFactory>();
    assert_send_sync::<dyn PizzaStore>();
    assert_send_sync::<dyn IngredientFactory>();
    assert_send_sync::<StoreRegistry>();
    assert_send_sync::<Pizzeria>();
    assert_send_sync::<Pizza>();
}
