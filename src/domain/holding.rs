//! A single owned position in an equity or mutual fund.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub acquired: NaiveDate,
}

impl Holding {
    pub fn new(symbol: &str, quantity: f64, unit_cost: f64, acquired: NaiveDate) -> Self {
        Holding {
            symbol: symbol.to_string(),
            quantity,
            unit_cost,
            acquired,
        }
    }

    /// Amount paid for the position.
    pub fn invested_value(&self) -> f64 {
        self.quantity * self.unit_cost
    }

    /// Value of the position at the given unit price.
    pub fn current_value(&self, price: f64) -> f64 {
        self.quantity * price
    }
}
