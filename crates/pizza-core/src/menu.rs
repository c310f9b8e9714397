//! The menu catalog: pizzas that can be ordered, de-duplicated structurally.

use crate::error::CatalogError;
use crate::pizza::{MenuItem, Pizza};
use crate::topping::ToppingRegistry;

/// Ordered collection of sellable pizzas.
///
/// Registering a pizza structurally equal to one already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<Pizza>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pizza` unless an equal pizza is already on the menu.
    /// Returns whether it was inserted.
    pub fn register(&mut self, pizza: Pizza) -> bool {
        if self.items.contains(&pizza) {
            tracing::debug!(pizza = pizza.name(), "skipping duplicate menu item");
            return false;
        }
        tracing::debug!(pizza = pizza.name(), index = self.items.len(), "registered menu item");
        self.items.push(pizza);
        true
    }

    pub fn get(&self, index: usize) -> Result<&Pizza, CatalogError> {
        self.items.get(index).ok_or(CatalogError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// A copy of every registered pizza, in registration order.
    pub fn all(&self) -> Vec<Pizza> {
        self.items.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pizza> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a Pizza;
    type IntoIter = std::slice::Iter<'a, Pizza>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of a single menu load: the toppings it declared and the pizzas it
/// registered. Each load owns its own registry and catalog.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    pub toppings: ToppingRegistry,
    pub catalog: MenuCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::{BaseSize, Cheese, CustomPizza, Sauce};
    use crate::topping::Topping;

    fn registry() -> ToppingRegistry {
        let mut registry = ToppingRegistry::new();
        registry.define("Ham", false).unwrap();
        registry.define("Pineapple", true).unwrap();
        registry.define("Olives", true).unwrap();
        registry
    }

    fn pick(registry: &ToppingRegistry, names: &[&str]) -> Vec<Topping> {
        names
            .iter()
            .map(|n| registry.lookup(*n).unwrap().clone())
            .collect()
    }

    #[test]
    fn register_is_idempotent_under_structural_equality() {
        let registry = registry();
        let mut catalog = MenuCatalog::new();

        let hawaiian = Pizza::menu("Hawaiian", pick(&registry, &["ham", "pineapple"])).unwrap();
        let renamed = Pizza::menu("Aloha", pick(&registry, &["pineapple", "ham"])).unwrap();
        assert!(catalog.register(hawaiian));
        assert!(!catalog.register(renamed));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name(), "Hawaiian");
    }

    #[test]
    fn register_keeps_distinct_pizzas_in_order() {
        let registry = registry();
        let mut catalog = MenuCatalog::new();
        catalog.register(Pizza::menu("Hawaiian", pick(&registry, &["ham", "pineapple"])).unwrap());
        catalog.register(Pizza::menu("Olive", pick(&registry, &["olives"])).unwrap());
        catalog.register(CustomPizza::new(BaseSize::Large, Sauce::Bbq, Cheese::Vegan).into());

        let names: Vec<&str> = catalog.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Hawaiian", "Olive", "Custom Pizza"]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let mut catalog = MenuCatalog::new();
        assert_eq!(
            catalog.get(0).unwrap_err(),
            CatalogError::IndexOutOfBounds { index: 0, len: 0 }
        );
        catalog.register(CustomPizza::default().into());
        assert!(catalog.get(0).is_ok());
        assert_eq!(
            catalog.get(1).unwrap_err(),
            CatalogError::IndexOutOfBounds { index: 1, len: 1 }
        );
    }

    #[test]
    fn all_returns_a_copy() {
        let mut catalog = MenuCatalog::new();
        catalog.register(CustomPizza::default().into());

        let mut copy = catalog.all();
        copy.clear();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn clear_empties_the_catalog() {
        let mut catalog = MenuCatalog::new();
        catalog.register(CustomPizza::default().into());
        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.all().is_empty());
    }
}
