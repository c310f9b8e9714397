//! Customer orders and multi-item discounts.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::catalogs::{TEN_PERCENT_THRESHOLD, TWENTY_FIVE_PERCENT_THRESHOLD};
use crate::pizza::{MenuItem, Pizza};
use crate::price::Price;

/// Discount tier earned by the number of pizzas in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    None,
    TenPercent,
    TwentyFivePercent,
}

impl Discount {
    pub fn for_count(pizzas: usize) -> Self {
        if pizzas >= TWENTY_FIVE_PERCENT_THRESHOLD {
            Discount::TwentyFivePercent
        } else if pizzas >= TEN_PERCENT_THRESHOLD {
            Discount::TenPercent
        } else {
            Discount::None
        }
    }

    pub fn apply(self, price: Price) -> Price {
        match self {
            Discount::None => price,
            Discount::TenPercent => price.percent(90),
            Discount::TwentyFivePercent => price.percent(75),
        }
    }
}

/// An order stamped with a random id and the local time it was taken.
#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    placed_at: NaiveDateTime,
    customer: String,
    pizzas: Vec<Pizza>,
}

impl Default for Order {
    fn default() -> Self {
        Order::new("Not Given")
    }
}

impl Order {
    pub fn new(customer: impl Into<String>) -> Self {
        Order::placed(customer, Uuid::new_v4(), Local::now().naive_local())
    }

    /// Build an order with a known id and timestamp.
    pub fn placed(customer: impl Into<String>, id: Uuid, placed_at: NaiveDateTime) -> Self {
        Order {
            id,
            placed_at,
            customer: customer.into(),
            pizzas: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn placed_at(&self) -> NaiveDateTime {
        self.placed_at
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn add(&mut self, pizza: impl Into<Pizza>) {
        self.pizzas.push(pizza.into());
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    pub fn subtotal(&self) -> Price {
        self.pizzas.iter().map(MenuItem::total_price).sum()
    }

    pub fn discount(&self) -> Discount {
        Discount::for_count(self.pizzas.len())
    }

    pub fn total(&self) -> Price {
        self.discount().apply(self.subtotal())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.placed_at.format("%Y-%m-%d"))?;
        writeln!(f, "Time: {}", self.placed_at.format("%H:%M"))?;
        writeln!(f, "Customer: {}", self.customer)?;
        writeln!(f, "Order number: {}", self.id)?;
        writeln!(f, "Order:")?;
        for (number, pizza) in self.pizzas.iter().enumerate() {
            writeln!(f, "{} - {}", number + 1, pizza)?;
        }
        writeln!(f)?;
        match self.discount() {
            Discount::None => write!(f, "Total: {}", self.subtotal()),
            _ => write!(
                f,
                "Multi item discount applied of {} applied, new Total: {}",
                self.subtotal(),
                self.total()
            ),
        }
    }
}
