//! Toppings and the registry that defines them.
//!
//! Topping names are not known ahead of time: the menu file declares the
//! vocabulary. The registry maps each normalized (uppercase) name to an
//! immutable [`Topping`] and keeps definition order.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::RegistryError;

/// A named topping. Identity is the stored uppercase name.
#[derive(Debug, Clone, Serialize)]
pub struct Topping {
    name: String,
    vegan: bool,
}

impl Topping {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_vegan(&self) -> bool {
        self.vegan
    }
}

impl PartialEq for Topping {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Topping {}

impl Hash for Topping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Topping {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Topping {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn normalize(name: &str) -> String {
    name.to_uppercase()
}

/// Ordered, case-insensitive table of defined toppings.
#[derive(Debug, Clone, Default)]
pub struct ToppingRegistry {
    toppings: Vec<Topping>,
    index: HashMap<String, usize>,
}

impl ToppingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new topping. The stored name is the uppercase form of `name`.
    ///
    /// Passing `None` or an empty name fails with [`RegistryError::InvalidName`];
    /// a name matching an existing topping case-insensitively fails with
    /// [`RegistryError::Duplicate`].
    pub fn define<'a>(
        &mut self,
        name: impl Into<Option<&'a str>>,
        vegan: bool,
    ) -> Result<&Topping, RegistryError> {
        let name = match name.into() {
            Some(name) if !name.is_empty() => normalize(name),
            _ => return Err(RegistryError::InvalidName),
        };
        if self.index.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }

        tracing::debug!(topping = %name, vegan, "defined topping");
        let position = self.toppings.len();
        self.index.insert(name.clone(), position);
        self.toppings.push(Topping { name, vegan });
        Ok(&self.toppings[position])
    }

    /// Look up a topping by name, ignoring case.
    pub fn lookup<'a>(&self, name: impl Into<Option<&'a str>>) -> Result<&Topping, RegistryError> {
        let name = name.into().ok_or(RegistryError::NullName)?;
        let normalized = normalize(name);
        match self.index.get(&normalized) {
            Some(&position) => Ok(&self.toppings[position]),
            None => Err(RegistryError::Unknown { name: normalized }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    /// All defined toppings, in definition order.
    pub fn all(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn len(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toppings.is_empty()
    }

    /// Forget every defined topping.
    pub fn reset(&mut self) {
        self.toppings.clear();
        self.index.clear();
    }
}
