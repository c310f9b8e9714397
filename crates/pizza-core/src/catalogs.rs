/// Literal name that must open the first line of every menu file.
pub const MENU_NAME: &str = "PizzaMenu";

/// Number of fixed header lines (name + count, blank, non-vegan toppings,
/// vegan toppings, blank) that precede the pizza lines.
pub const HEADER_LINES: usize = 5;

/// Separator between names on topping lines and inside pizza brackets.
pub const LIST_SEPARATOR: &str = ", ";

/// Maximum number of toppings a single pizza may carry.
pub const MAX_TOPPINGS: usize = 5;

/// Price of every topping, in cents.
pub const TOPPING_PRICE_CENTS: i64 = 200;

/// Default name given to customer-built pizzas.
pub const CUSTOM_PIZZA_NAME: &str = "Custom Pizza";

/// Order sizes at which the multi-item discounts start.
pub const TEN_PERCENT_THRESHOLD: usize = 3;
pub const TWENTY_FIVE_PERCENT_THRESHOLD: usize = 6;

/// Loader and document version constants.
pub const PARSER_VERSION: &str = "0.4.1";
pub const DOCUMENT_VERSION: &str = "1.0";
