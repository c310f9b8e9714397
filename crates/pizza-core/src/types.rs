use serde::{Deserialize, Serialize};

use crate::catalogs::{DOCUMENT_VERSION, PARSER_VERSION};
use crate::error::{ErrorCategory, MenuError};
use crate::menu::Menu;
use crate::pizza::{BaseSize, Cheese, MenuItem, Pizza, Sauce};
use crate::topping::Topping;

// ---------------------------------------------------------------------------
// Document nodes (serialized to JSON)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToppingNode {
    pub name: String,
    pub vegan: bool,
}

impl From<&Topping> for ToppingNode {
    fn from(topping: &Topping) -> Self {
        ToppingNode {
            name: topping.name().to_string(),
            vegan: topping.is_vegan(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaNode {
    pub name: String,
    pub size: BaseSize,
    pub sauce: Sauce,
    pub cheese: Cheese,
    pub toppings: Vec<String>,
    #[serde(rename = "priceCents")]
    pub price_cents: i64,
}

impl From<&Pizza> for PizzaNode {
    fn from(pizza: &Pizza) -> Self {
        PizzaNode {
            name: pizza.name().to_string(),
            size: pizza.size(),
            sauce: pizza.sauce(),
            cheese: pizza.cheese(),
            toppings: pizza
                .toppings()
                .iter()
                .map(|t| t.name().to_string())
                .collect(),
            price_cents: pizza.total_price().cents(),
        }
    }
}

/// A loaded menu as top-level JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(rename = "parserVersion")]
    pub parser_version: String,
    #[serde(rename = "documentVersion")]
    pub document_version: String,
    pub toppings: Vec<ToppingNode>,
    pub pizzas: Vec<PizzaNode>,
}

impl From<&Menu> for MenuDocument {
    fn from(menu: &Menu) -> Self {
        MenuDocument {
            parser_version: PARSER_VERSION.to_string(),
            document_version: DOCUMENT_VERSION.to_string(),
            toppings: menu.toppings.all().iter().map(ToppingNode::from).collect(),
            pizzas: menu.catalog.iter().map(PizzaNode::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub category: ErrorCategory,
    pub file: String,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn from_error(err: &MenuError, file: &str) -> Self {
        Diagnostic {
            code: err.code().to_string(),
            category: err.category(),
            file: file.to_string(),
            line: err.line(),
            message: err.to_string(),
        }
    }
}
