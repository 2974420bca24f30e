//! Portfolio valuation over a ledger snapshot and fetched quotes.

use std::collections::HashMap;

use super::ledger::Ledger;
use super::quote::PriceQuote;

/// Valuation of a single holding.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingValuation {
    pub quantity: f64,
    pub unit_cost: f64,
    pub current_price: f64,
    pub invested_value: f64,
    pub current_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percent: f64,
    pub allocation_percent: f64,
}

/// Aggregate valuation of one ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_invested: f64,
    pub total_current: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
    pub holdings: HashMap<String, HoldingValuation>,
}

impl PortfolioSummary {
    /// An empty summary, as produced for an empty ledger.
    pub fn empty() -> Self {
        PortfolioSummary {
            total_invested: 0.0,
            total_current: 0.0,
            total_gain_loss: 0.0,
            total_gain_loss_percent: 0.0,
            holdings: HashMap::new(),
        }
    }

    /// Value every holding in `ledger` against `quotes`.
    ///
    /// A holding whose quote is missing or carries no price is valued at
    /// its own unit cost, i.e. it reports zero gain rather than being
    /// dropped or treated as an error. Allocation percentages are filled
    /// in a second pass, against the final portfolio total.
    pub fn compute(ledger: &Ledger, quotes: &HashMap<String, PriceQuote>) -> Self {
        let mut total_invested = 0.0_f64;
        let mut total_current = 0.0_f64;
        let mut holdings = HashMap::new();

        for holding in ledger.holdings() {
            let current_price = quotes
                .get(&holding.symbol)
                .and_then(|q| q.price)
                .unwrap_or(holding.unit_cost);

            let invested_value = holding.invested_value();
            let current_value = holding.current_value(current_price);
            let gain_loss = current_value - invested_value;
            let gain_loss_percent = if invested_value > 0.0 {
                gain_loss / invested_value * 100.0
            } else {
                0.0
            };

            total_invested += invested_value;
            total_current += current_value;

            holdings.insert(
                holding.symbol.clone(),
                HoldingValuation {
                    quantity: holding.quantity,
                    unit_cost: holding.unit_cost,
                    current_price,
                    invested_value,
                    current_value,
                    gain_loss,
                    gain_loss_percent,
                    allocation_percent: 0.0,
                },
            );
        }

        // Allocation needs the grand total, so it cannot be filled on
        // the accumulation pass.
        for valuation in holdings.values_mut() {
            valuation.allocation_percent = if total_current > 0.0 {
                valuation.current_value / total_current * 100.0
            } else {
                0.0
            };
        }

        let total_gain_loss = total_current - total_invested;
        let total_gain_loss_percent = if total_invested > 0.0 {
            total_gain_loss / total_invested * 100.0
        } else {
            0.0
        };

        PortfolioSummary {
            total_invested,
            total_current,
            total_gain_loss,
            total_gain_loss_percent,
            holdings,
        }
    }
}
