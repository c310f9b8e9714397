//! Pizza value model: bases, sauces, cheeses and the pizzas built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalogs::{CUSTOM_PIZZA_NAME, MAX_TOPPINGS, TOPPING_PRICE_CENTS};
use crate::error::PizzaError;
use crate::price::Price;
use crate::topping::Topping;

// ---------------------------------------------------------------------------
// Ingredients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BaseSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BaseSize {
    pub const fn price(self) -> Price {
        match self {
            BaseSize::Small => Price::from_cents(300),
            BaseSize::Medium => Price::from_cents(500),
            BaseSize::Large => Price::from_cents(700),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BaseSize::Small => "SMALL",
            BaseSize::Medium => "MEDIUM",
            BaseSize::Large => "LARGE",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sauce {
    None,
    #[default]
    Tomato,
    Bbq,
    Garlic,
}

impl Sauce {
    pub const fn as_str(self) -> &'static str {
        match self {
            Sauce::None => "NONE",
            Sauce::Tomato => "TOMATO",
            Sauce::Bbq => "BBQ",
            Sauce::Garlic => "GARLIC",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cheese {
    None,
    #[default]
    Mozzarella,
    Vegan,
}

impl Cheese {
    pub const fn as_str(self) -> &'static str {
        match self {
            Cheese::None => "NONE",
            Cheese::Mozzarella => "MOZZARELLA",
            Cheese::Vegan => "VEGAN",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(BaseSize, Sauce, Cheese);

// ---------------------------------------------------------------------------
// Menu items
// ---------------------------------------------------------------------------

/// Anything that can be sold from the menu.
pub trait MenuItem {
    fn name(&self) -> &str;

    fn total_price(&self) -> Price;
}

/// Where a pizza came from; only affects its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaKind {
    Menu,
    Custom,
}

// ---------------------------------------------------------------------------
// Pizza
// ---------------------------------------------------------------------------

/// An immutable pizza.
///
/// Equality is structural: size, sauce, cheese and the multiset of toppings.
/// The name and kind are not compared.
#[derive(Debug, Clone)]
pub struct Pizza {
    name: String,
    kind: PizzaKind,
    size: BaseSize,
    sauce: Sauce,
    cheese: Cheese,
    toppings: Vec<Topping>,
}

fn check_name(name: &str) -> Result<(), PizzaError> {
    if name.trim().is_empty() {
        return Err(PizzaError::InvalidName);
    }
    Ok(())
}

fn check_topping_count(count: usize) -> Result<(), PizzaError> {
    if count > MAX_TOPPINGS {
        return Err(PizzaError::TooManyToppings {
            count,
            max: MAX_TOPPINGS,
        });
    }
    Ok(())
}

impl Pizza {
    pub fn new(
        name: impl Into<String>,
        kind: PizzaKind,
        size: BaseSize,
        sauce: Sauce,
        cheese: Cheese,
        toppings: Vec<Topping>,
    ) -> Result<Self, PizzaError> {
        let name = name.into();
        check_name(&name)?;
        check_topping_count(toppings.len())?;
        Ok(Pizza {
            name,
            kind,
            size,
            sauce,
            cheese,
            toppings,
        })
    }

    /// A menu pizza: medium base, tomato sauce and mozzarella.
    pub fn menu(name: impl Into<String>, toppings: Vec<Topping>) -> Result<Self, PizzaError> {
        Pizza::new(
            name,
            PizzaKind::Menu,
            BaseSize::Medium,
            Sauce::Tomato,
            Cheese::Mozzarella,
            toppings,
        )
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    pub fn size(&self) -> BaseSize {
        self.size
    }

    pub fn sauce(&self) -> Sauce {
        self.sauce
    }

    pub fn cheese(&self) -> Cheese {
        self.cheese
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// True when every topping and the cheese are vegan.
    pub fn is_vegan(&self) -> bool {
        self.cheese != Cheese::Mozzarella && self.toppings.iter().all(Topping::is_vegan)
    }

    fn sorted_topping_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.toppings.iter().map(Topping::name).collect();
        names.sort_unstable();
        names
    }
}

impl MenuItem for Pizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn total_price(&self) -> Price {
        let toppings = u32::try_from(self.toppings.len()).unwrap_or(u32::MAX);
        self.size.price() + Price::from_cents(TOPPING_PRICE_CENTS) * toppings
    }
}

impl PartialEq for Pizza {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.sauce == other.sauce
            && self.cheese == other.cheese
            && self.toppings.len() == other.toppings.len()
            && self.sorted_topping_names() == other.sorted_topping_names()
    }
}

impl Eq for Pizza {}

impl fmt::Display for Pizza {
    /// `[MenuPizza] Hawaiian: is a 'MEDIUM' sized base with 'TOMATO' sauce and
    /// 'MOZZARELLA' cheese - Toppings: [PINEAPPLE, HAM] $9.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == PizzaKind::Menu {
            f.write_str("[MenuPizza] ")?;
        }
        write!(
            f,
            "{}: is a '{}' sized base with '{}' sauce and '{}' cheese",
            self.name, self.size, self.sauce, self.cheese
        )?;
        if !self.toppings.is_empty() {
            let names: Vec<&str> = self.toppings.iter().map(Topping::name).collect();
            write!(f, " - Toppings: [{}]", names.join(", "))?;
        }
        write!(f, " {}", self.total_price())
    }
}

// ---------------------------------------------------------------------------
// Custom pizza
// ---------------------------------------------------------------------------

/// A customer-built pizza whose toppings can change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPizza(Pizza);

impl Default for CustomPizza {
    fn default() -> Self {
        CustomPizza::new(BaseSize::Medium, Sauce::Tomato, Cheese::Mozzarella)
    }
}

impl CustomPizza {
    /// A custom pizza with no toppings, named "Custom Pizza".
    pub fn new(size: BaseSize, sauce: Sauce, cheese: Cheese) -> Self {
        CustomPizza(Pizza {
            name: CUSTOM_PIZZA_NAME.to_string(),
            kind: PizzaKind::Custom,
            size,
            sauce,
            cheese,
            toppings: Vec::new(),
        })
    }

    pub fn add(&mut self, topping: Topping) -> Result<(), PizzaError> {
        check_topping_count(self.0.toppings.len() + 1)?;
        self.0.toppings.push(topping);
        Ok(())
    }

    /// Add every topping, or none of them if the limit would be exceeded.
    pub fn add_all(&mut self, toppings: &[Topping]) -> Result<(), PizzaError> {
        check_topping_count(self.0.toppings.len() + toppings.len())?;
        self.0.toppings.extend_from_slice(toppings);
        Ok(())
    }

    /// Remove the first occurrence of `topping`, if present.
    pub fn remove(&mut self, topping: &Topping) {
        if let Some(position) = self.0.toppings.iter().position(|t| t == topping) {
            self.0.toppings.remove(position);
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), PizzaError> {
        let name = name.into();
        check_name(&name)?;
        self.0.name = name;
        Ok(())
    }

    pub fn set_size(&mut self, size: BaseSize) {
        self.0.size = size;
    }

    pub fn set_sauce(&mut self, sauce: Sauce) {
        self.0.sauce = sauce;
    }

    pub fn set_cheese(&mut self, cheese: Cheese) {
        self.0.cheese = cheese;
    }

    pub fn as_pizza(&self) -> &Pizza {
        &self.0
    }

    pub fn into_pizza(self) -> Pizza {
        self.0
    }
}

impl MenuItem for CustomPizza {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn total_price(&self) -> Price {
        self.0.total_price()
    }
}

impl From<CustomPizza> for Pizza {
    fn from(custom: CustomPizza) -> Pizza {
        custom.into_pizza()
    }
}

impl fmt::Display for CustomPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
