//! Systematic investment plan (SIP) returns simulation.

use super::error::KhataError;
use super::nav::NavSeries;

/// Result of simulating a fixed periodic contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SipOutcome {
    pub contribution: f64,
    pub periods: usize,
    pub total_invested: f64,
    pub units_purchased: f64,
    pub latest_nav: f64,
    pub current_value: f64,
    pub gain: f64,
    pub gain_percent: f64,
    /// Compounding-rate annualization of the total return, assuming the
    /// simulated periods are consecutive months. Not an XIRR: cash-flow
    /// dates are ignored.
    pub annualized_return_percent: f64,
}

/// Simulate investing `contribution` at each of the `periods` most
/// recent NAVs in `series`.
///
/// Each of the newest `periods` entries is treated as one monthly
/// contribution point, regardless of the actual date spacing in the
/// series. Fails with [`KhataError::InsufficientHistory`] when the
/// series is shorter than `periods`; no partial simulation is run.
pub fn simulate_sip(
    series: &NavSeries,
    contribution: f64,
    periods: usize,
) -> Result<SipOutcome, KhataError> {
    if series.len() < periods {
        return Err(KhataError::InsufficientHistory {
            scheme: series.scheme().to_string(),
            available: series.len(),
            requested: periods,
        });
    }

    let mut units_purchased = 0.0_f64;
    for point in &series.points()[..periods] {
        units_purchased += contribution / point.nav;
    }

    let latest_nav = series.latest().map(|p| p.nav).unwrap_or(0.0);
    let current_value = units_purchased * latest_nav;
    let total_invested = contribution * periods as f64;
    let gain = current_value - total_invested;
    let gain_percent = if total_invested > 0.0 {
        gain / total_invested * 100.0
    } else {
        0.0
    };

    Ok(SipOutcome {
        contribution,
        periods,
        total_invested,
        units_purchased,
        latest_nav,
        current_value,
        gain,
        gain_percent,
        annualized_return_percent: annualized_estimate(gain, total_invested, periods),
    })
}

/// ((1 + r) ^ (12 / periods) - 1) * 100 where r is the total return.
///
/// A rough estimate only; a true XIRR would solve against dated cash
/// flows. Zero when nothing was invested or no periods elapsed.
fn annualized_estimate(gain: f64, total_invested: f64, periods: usize) -> f64 {
    if total_invested == 0.0 || periods == 0 {
        return 0.0;
    }
    let total_return = gain / total_invested;
    ((1.0 + total_return).powf(12.0 / periods as f64) - 1.0) * 100.0
}
