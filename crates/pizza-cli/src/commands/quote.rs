use std::path::Path;

use pizza_core::{Menu, Order};
use tracing::debug;

use crate::error::CliError;
use crate::reader::{load_menu_file, read_config, resolve_menu_path};

pub fn run_quote(
    input_path: &Path,
    customer: Option<&str>,
    indexes: &[usize],
) -> Result<String, CliError> {
    let config = read_config(input_path)?;
    let menu_path = resolve_menu_path(input_path, &config);
    let menu = load_menu_file(&menu_path)?;

    let order = build_order(&menu, customer, indexes)?;
    debug!(pizzas = order.len(), total = %order.total(), "quoted order");

    match config.shop {
        Some(shop) => Ok(format!("{shop}\n{order}")),
        None => Ok(order.to_string()),
    }
}

pub fn build_order(
    menu: &Menu,
    customer: Option<&str>,
    indexes: &[usize],
) -> Result<Order, CliError> {
    let mut order = customer.map(Order::new).unwrap_or_default();
    for &index in indexes {
        let pizza = menu
            .catalog
            .get(index)
            .map_err(|e| CliError::Usage(e.to_string()))?;
        order.add(pizza.clone());
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::parse_string;

    const MENU: &str = "PizzaMenu 2\n\nBacon, Ham\nPineapple\n\nHawaiian [Ham, Pineapple]\nPlain [Bacon]\n";

    #[test]
    fn builds_order_from_indexes() {
        let menu = parse_string(MENU).unwrap();
        let order = build_order(&menu, Some("Jane"), &[0, 1, 0]).unwrap();
        assert_eq!(order.customer(), "Jane");
        assert_eq!(order.len(), 3);
        // 900 + 700 + 900, ten percent off
        assert_eq!(order.total().cents(), 2250);
    }

    #[test]
    fn missing_customer_uses_default() {
        let menu = parse_string(MENU).unwrap();
        let order = build_order(&menu, None, &[1]).unwrap();
        assert_eq!(order.customer(), "Not Given");
    }

    #[test]
    fn out_of_range_index_is_usage_error() {
        let menu = parse_string(MENU).unwrap();
        let err = build_order(&menu, None, &[2]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(err.exit_code(), crate::error::exit::USAGE);
    }
}
