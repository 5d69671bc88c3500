use crate::Region;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category an ingredient belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngredientKind {
    #[serde(rename = "dough")]
    Dough,
    #[serde(rename = "sauce")]
    Sauce,
    #[serde(rename = "cheese")]
    Cheese,
    #[serde(rename = "pepperoni")]
    Pepperoni,
    #[serde(rename = "clam")]
    Clam,
    #[serde(rename = "vegetables")]
    VegetableList,
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dough => write!(f, "dough"),
            Self::Sauce => write!(f, "sauce"),
            Self::Cheese => write!(f, "cheese"),
            Self::Pepperoni => write!(f, "pepperoni"),
            Self::Clam => write!(f, "clam"),
            Self::VegetableList => write!(f, "vegetables"),
        }
    }
}

/// A concrete variety within one ingredient category.
pub trait Variety: fmt::Display + fmt::Debug + Clone + PartialEq {
    const KIND: IngredientKind;
}

/// An ingredient as handed out by a factory: what it is and which region made it.
///
/// Ingredients carry no behavior. Their region tag is what lets an
/// [`IngredientSet`](crate::IngredientSet) check family consistency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ingredient<V> {
    variety: V,
    region: Region,
}

impl<V: Variety> Ingredient<V> {
    pub fn new(variety: V, region: Region) -> Self {
        Self { variety, region }
    }

    pub fn variety(&self) -> &V {
        &self.variety
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn kind(&self) -> IngredientKind {
        V::KIND
    }
}

impl<V: Variety> fmt::Display for Ingredient<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variety)
    }
}

pub type Dough = Ingredient<DoughVariety>;
pub type Sauce = Ingredient<SauceVariety>;
pub type Cheese = Ingredient<CheeseVariety>;
pub type Pepperoni = Ingredient<PepperoniVariety>;
pub type Clams = Ingredient<ClamVariety>;
pub type Vegetables = Ingredient<VeggieList>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoughVariety {
    ThinCrust,
    ThickCrust,
}

impl Variety for DoughVariety {
    const KIND: IngredientKind = IngredientKind::Dough;
}

impl fmt::Display for DoughVariety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThinCrust => write!(f, "Thin Crust Dough"),
            Self::ThickCrust => write!(f, "Thick Crust Dough"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SauceVariety {
    Marinara,
    PlumTomato,
}

impl Variety for SauceVariety {
    const KIND: IngredientKind = IngredientKind::Sauce;
}

impl fmt::Display for SauceVariety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marinara => write!(f, "Marinara Sauce"),
            Self::PlumTomato => write!(f, "Plum Tomato Sauce"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheeseVariety {
    Reggiano,
    Mozzarella,
}

impl Variety for CheeseVariety {
    const KIND: IngredientKind = IngredientKind::Cheese;
}

impl fmt::Display for CheeseVariety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reggiano => write!(f, "Reggiano Cheese"),
            Self::Mozzarella => write!(f, "Mozzarella Cheese"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PepperoniVariety {
    Sliced,
}

impl Variety for PepperoniVariety {
    const KIND: IngredientKind = IngredientKind::Pepperoni;
}

impl fmt::Display for PepperoniVariety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sliced => write!(f, "Sliced Pepperoni"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClamVariety {
    Fresh,
    Frozen,
}

impl Variety for ClamVariety {
    const KIND: IngredientKind = IngredientKind::Clam;
}

impl fmt::Display for ClamVariety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => write!(f, "Fresh Clams"),
            Self::Frozen => write!(f, "Frozen Clams"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Veggie {
    Garlic,
    Onion,
    Mushroom,
    RedPepper,
}

impl fmt::Display for Veggie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Garlic => write!(f, "Garlic"),
            Self::Onion => write!(f, "Onion"),
            Self::Mushroom => write!(f, "Mushroom"),
            Self::RedPepper => write!(f, "Red Pepper"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct VeggieList(Vec<Veggie>);

impl VeggieList {
    pub fn new(veggies: Vec<Veggie>) -> Self {
        Self(veggies)
    }

    /// Garlic, onion, mushroom and red pepper. Not region specific.
    pub fn house() -> Self {
        Self(vec![
            Veggie::Garlic,
            Veggie::Onion,
            Veggie::Mushroom,
            Veggie::RedPepper,
        ])
    }

    pub fn as_slice(&self) -> &[Veggie] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Variety for VeggieList {
    const KIND: IngredientKind = IngredientKind::VegetableList;
}

impl fmt::Display for VeggieList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, veggie) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", veggie)?;
        }
        Ok(())
    }
}
