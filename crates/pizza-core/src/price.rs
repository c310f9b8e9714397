//! # Price
//!
//! Monetary values held as integer cents, so topping and discount
//! arithmetic never accumulates floating point error.
//!
//! ```rust
//! use pizza_core::price::Price;
//!
//! let base = Price::from_cents(500);
//! let total = base + Price::from_cents(200) * 2;
//! assert_eq!(total.to_string(), "$9.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// A price in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns `percent`% of this price, rounded half away from zero to the
    /// nearest cent.
    ///
    /// ```rust
    /// use pizza_core::price::Price;
    ///
    /// assert_eq!(Price::from_cents(3600).percent(90).cents(), 3240);
    /// assert_eq!(Price::from_cents(5).percent(50).cents(), 3);
    /// ```
    pub fn percent(&self, percent: i64) -> Self {
        let scaled = self.0 * percent;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Price(rounded)
    }
}

impl fmt::Display for Price {
    /// Formats as `$D.CC`, e.g. `$7.00` or `-$1.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, rhs: u32) -> Price {
        Price(self.0 * i64::from(rhs))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}
