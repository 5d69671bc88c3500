use crate::{
    Cheese, Clams, Dough, Ingredient, IngredientKind, Pepperoni, PizzeriaError, Region, Sauce,
    Variety, Vegetables,
};
use serde::{Deserialize, Serialize};

/// The ingredients one pizza was prepared with.
///
/// Every set has a dough, a sauce and a cheese; extras depend on the pizza kind.
/// All members come from the same region: the constructors reject anything else
/// with [`PizzeriaError::MixedRegions`], so a set that exists is family consistent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawIngredientSet")]
pub struct IngredientSet {
    region: Region,
    dough: Dough,
    sauce: Sauce,
    cheese: Cheese,
    clam: Option<Clams>,
    pepperoni: Option<Pepperoni>,
    veggies: Option<Vegetables>,
}

impl IngredientSet {
    pub fn new(dough: Dough, sauce: Sauce, cheese: Cheese) -> Result<Self, PizzeriaError> {
        let region = dough.region().clone();
        ensure_region(&region, &sauce)?;
        ensure_region(&region, &cheese)?;

        Ok(Self {
            region,
            dough,
            sauce,
            cheese,
            clam: None,
            pepperoni: None,
            veggies: None,
        })
    }

    pub fn with_clam(mut self, clam: Clams) -> Result<Self, PizzeriaError> {
        ensure_region(&self.region, &clam)?;
        self.clam = Some(clam);
        Ok(self)
    }

    pub fn with_pepperoni(mut self, pepperoni: Pepperoni) -> Result<Self, PizzeriaError> {
        ensure_region(&self.region, &pepperoni)?;
        self.pepperoni = Some(pepperoni);
        Ok(self)
    }

    pub fn with_veggies(mut self, veggies: Vegetables) -> Result<Self, PizzeriaError> {
        ensure_region(&self.region, &veggies)?;
        self.veggies = Some(veggies);
        Ok(self)
    }

    /// Region every ingredient in the set was sourced from.
    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn dough(&self) -> &Dough {
        &self.dough
    }

    pub fn sauce(&self) -> &Sauce {
        &self.sauce
    }

    pub fn cheese(&self) -> &Cheese {
        &self.cheese
    }

    pub fn clam(&self) -> Option<&Clams> {
        self.clam.as_ref()
    }

    pub fn pepperoni(&self) -> Option<&Pepperoni> {
        self.pepperoni.as_ref()
    }

    pub fn veggies(&self) -> Option<&Vegetables> {
        self.veggies.as_ref()
    }

    /// Kinds present, base ingredients first.
    pub fn kinds(&self) -> Vec<IngredientKind> {
        let mut kinds = vec![
            IngredientKind::Dough,
            IngredientKind::Sauce,
            IngredientKind::Cheese,
        ];
        kinds.extend(self.clam.as_ref().map(Ingredient::kind));
        kinds.extend(self.pepperoni.as_ref().map(Ingredient::kind));
        kinds.extend(self.veggies.as_ref().map(Ingredient::kind));
        kinds
    }

    pub fn contains(&self, kind: IngredientKind) -> bool {
        self.kinds().contains(&kind)
    }

    /// Region tag of every ingredient, in the same order as [`kinds`](Self::kinds).
    pub fn regions(&self) -> Vec<&Region> {
        let mut regions = vec![
            self.dough.region(),
            self.sauce.region(),
            self.cheese.region(),
        ];
        regions.extend(self.clam.as_ref().map(Ingredient::region));
        regions.extend(self.pepperoni.as_ref().map(Ingredient::region));
        regions.extend(self.veggies.as_ref().map(Ingredient::region));
        regions
    }

    /// Labels of everything beyond dough, sauce and cheese.
    pub fn toppings(&self) -> Vec<String> {
        let mut toppings = Vec::new();
        toppings.extend(self.clam.as_ref().map(ToString::to_string));
        toppings.extend(self.pepperoni.as_ref().map(ToString::to_string));
        toppings.extend(self.veggies.as_ref().map(ToString::to_string));
        toppings
    }
}

/// Unchecked wire form; only reachable through `TryFrom`, which re-runs the
/// region checks.
#[derive(Deserialize)]
struct RawIngredientSet {
    region: Option<Region>,
    dough: Dough,
    sauce: Sauce,
    cheese: Cheese,
    clam: Option<Clams>,
    pepperoni: Option<Pepperoni>,
    veggies: Option<Vegetables>,
}

impl TryFrom<RawIngredientSet> for IngredientSet {
    type Error = PizzeriaError;

    fn try_from(raw: RawIngredientSet) -> Result<Self, Self::Error> {
        if let Some(region) = &raw.region {
            ensure_region(region, &raw.dough)?;
        }

        let mut set = Self::new(raw.dough, raw.sauce, raw.cheese)?;
        if let Some(clam) = raw.clam {
            set = set.with_clam(clam)?;
        }
        if let Some(pepperoni) = raw.pepperoni {
            set = set.with_pepperoni(pepperoni)?;
        }
        if let Some(veggies) = raw.veggies {
            set = set.with_veggies(veggies)?;
        }
        Ok(set)
    }
}

fn ensure_region<V: Variety>(
    expected: &Region,
    ingredient: &Ingredient<V>,
) -> Result<(), PizzeriaError> {
    if ingredient.region() != expected {
        return Err(PizzeriaError::MixedRegions {
            kind: ingredient.kind(),
            expected: expected.clone(),
            found: ingredient.region().clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheeseVariety, ClamVariety, DoughVariety, SauceVariety, VeggieList};

    fn ny_base() -> IngredientSet {
        IngredientSet::new(
            Dough::new(DoughVariety::ThinCrust, Region::NEW_YORK),
            Sauce::new(SauceVariety::Marinara, Region::NEW_YORK),
            Cheese::new(CheeseVariety::Reggiano, Region::NEW_YORK),
        )
        .unwrap()
    }

    #[test]
    fn test_base_set_has_three_kinds() {
        let set = ny_base();
        assert_eq!(
            set.kinds(),
            vec![
                IngredientKind::Dough,
                IngredientKind::Sauce,
                IngredientKind::Cheese
            ]
        );
        assert_eq!(set.region(), &Region::NEW_YORK);
        assert!(set.toppings().is_empty());
    }

    #[test]
    fn test_mixed_base_is_rejected() {
        let result = IngredientSet::new(
            Dough::new(DoughVariety::ThinCrust, Region::NEW_YORK),
            Sauce::new(SauceVariety::PlumTomato, Region::CHICAGO),
            Cheese::new(CheeseVariety::Reggiano, Region::NEW_YORK),
        );

        match result {
            Err(PizzeriaError::MixedRegions {
                kind,
                expected,
                found,
            }) => {
                assert_eq!(kind, IngredientKind::Sauce);
                assert_eq!(expected, Region::NEW_YORK);
                assert_eq!(found, Region::CHICAGO);
            }
            other => panic!("expected MixedRegions, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_extra_is_rejected() {
        let result = ny_base().with_clam(Clams::new(ClamVariety::Frozen, Region::CHICAGO));
        assert!(matches!(result, Err(PizzeriaError::MixedRegions { .. })));
    }

    #[test]
    fn test_deserialize_consistent_set() {
        let set: IngredientSet = toml::from_str(
            r#"
            [dough]
            variety = "ThickCrust"
            region = "Chicago"

            [sauce]
            variety = "PlumTomato"
            region = "Chicago"

            [cheese]
            variety = "Mozzarella"
            region = "chicago"

            [clam]
            variety = "Frozen"
            region = "Chicago"
            "#,
        )
        .unwrap();

        assert_eq!(set.region(), &Region::CHICAGO);
        assert!(set.contains(IngredientKind::Clam));
    }

    #[test]
    fn test_deserialize_rejects_mixed_regions() {
        let result = toml::from_str::<IngredientSet>(
            r#"
            [dough]
            variety = "ThinCrust"
            region = "NY"

            [sauce]
            variety = "PlumTomato"
            region = "Chicago"

            [cheese]
            variety = "Mozzarella"
            region = "Chicago"
            "#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("mixed into a NY ingredient set"));
    }

    #[test]
    fn test_deserialize_rejects_mismatched_set_region() {
        let result = toml::from_str::<IngredientSet>(
            r#"
            region = "Chicago"

            [dough]
            variety = "ThinCrust"
            region = "NY"

            [sauce]
            variety = "Marinara"
            region = "NY"

            [cheese]
            variety = "Reggiano"
            region = "NY"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_extras_become_toppings() {
        let set = ny_base()
            .with_clam(Clams::new(ClamVariety::Fresh, Region::NEW_YORK))
            .unwrap()
            .with_veggies(Vegetables::new(VeggieList::house(), Region::NEW_YORK))
            .unwrap();

        assert!(set.contains(IngredientKind::Clam));
        assert!(!set.contains(IngredientKind::Pepperoni));
        assert_eq!(
            set.toppings(),
            vec![
                "Fresh Clams".to_string(),
                "Garlic, Onion, Mushroom, Red Pepper".to_string()
            ]
        );
        assert!(set.regions().iter().all(|r| **r == Region::NEW_YORK));
    }
}
