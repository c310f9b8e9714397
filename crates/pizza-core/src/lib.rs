pub mod catalogs;
pub mod error;
pub mod json;
pub mod menu;
pub mod order;
pub mod parser;
pub mod pizza;
pub mod price;
pub mod topping;
pub mod types;

pub use catalogs::{MAX_TOPPINGS, MENU_NAME, PARSER_VERSION};
pub use error::{CatalogError, ErrorCategory, MenuError, PizzaError, RegistryError};
pub use json::load_to_json;
pub use menu::{Menu, MenuCatalog};
pub use order::{Discount, Order};
pub use parser::{load_menu, parse_string, LineSource, LineState, MenuParser};
pub use pizza::{BaseSize, Cheese, CustomPizza, MenuItem, Pizza, PizzaKind, Sauce};
pub use price::Price;
pub use topping::{Topping, ToppingRegistry};
pub use types::*;
