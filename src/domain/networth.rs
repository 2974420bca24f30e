//! Net-worth aggregation across asset classes.

use super::valuation::PortfolioSummary;

/// Consolidated net worth: cash plus the current value of the equity
/// and mutual-fund portfolios, with per-class allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct NetWorth {
    pub bank_balance: f64,
    pub equity_value: f64,
    pub fund_value: f64,
    pub total: f64,
    pub bank_percent: f64,
    pub equities_percent: f64,
    pub funds_percent: f64,
}

impl NetWorth {
    pub fn compute(
        bank_balance: f64,
        equities: &PortfolioSummary,
        funds: &PortfolioSummary,
    ) -> Self {
        let equity_value = equities.total_current;
        let fund_value = funds.total_current;
        let total = bank_balance + equity_value + fund_value;

        let percent_of_total = |value: f64| {
            if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            }
        };

        NetWorth {
            bank_balance,
            equity_value,
            fund_value,
            total,
            bank_percent: percent_of_total(bank_balance),
            equities_percent: percent_of_total(equity_value),
            funds_percent: percent_of_total(fund_value),
        }
    }
}

/// Everything the `report` command shows, composed in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub equities: PortfolioSummary,
    pub funds: PortfolioSummary,
    pub performance: CombinedPerformance,
    pub net_worth: NetWorth,
}

impl Dashboard {
    pub fn compute(bank_balance: f64, equities: PortfolioSummary, funds: PortfolioSummary) -> Self {
        let performance = CombinedPerformance::compute(&equities, &funds);
        let net_worth = NetWorth::compute(bank_balance, &equities, &funds);
        Dashboard {
            equities,
            funds,
            performance,
            net_worth,
        }
    }
}

/// Invested/current/gain view merged across equities and funds.
///
/// The bank balance is deliberately absent: cash has no cost basis, so
/// it contributes nothing to gain or loss.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedPerformance {
    pub total_invested: f64,
    pub total_current: f64,
    pub total_gain: f64,
    pub total_gain_percent: f64,
}

impl CombinedPerformance {
    pub fn compute(equities: &PortfolioSummary, funds: &PortfolioSummary) -> Self {
        let total_invested = equities.total_invested + funds.total_invested;
        let total_current = equities.total_current + funds.total_current;
        let total_gain = total_current - total_invested;
        let total_gain_percent = if total_invested > 0.0 {
            total_gain / total_invested * 100.0
        } else {
            0.0
        };

        CombinedPerformance {
            total_invested,
            total_current,
            total_gain,
            total_gain_percent,
        }
    }
}
