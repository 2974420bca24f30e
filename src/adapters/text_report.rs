//! Plain-text dashboard report adapter.

use crate::domain::error::KhataError;
use crate::domain::networth::Dashboard;
use crate::domain::sip::SipOutcome;
use crate::domain::valuation::PortfolioSummary;
use crate::ports::report_port::ReportPort;
use std::fmt::Write as _;
use std::fs;

const RULE: &str = "============================================================";

fn render_summary(out: &mut String, title: &str, summary: &PortfolioSummary) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", RULE);

    let mut symbols: Vec<&String> = summary.holdings.keys().collect();
    symbols.sort();

    for symbol in symbols {
        let v = &summary.holdings[symbol];
        let _ = writeln!(
            out,
            "  {:<12} {:>12.2} @ \u{20b9}{:<10.2} now \u{20b9}{:<10.2} value \u{20b9}{:>12.2}  {:+.2}%  [{:.1}%]",
            symbol,
            v.quantity,
            v.unit_cost,
            v.current_price,
            v.current_value,
            v.gain_loss_percent,
            v.allocation_percent,
        );
    }
    if summary.holdings.is_empty() {
        let _ = writeln!(out, "  (no holdings)");
    }

    let _ = writeln!(out, "Total Invested: \u{20b9}{:.2}", summary.total_invested);
    let _ = writeln!(out, "Current Value:  \u{20b9}{:.2}", summary.total_current);
    let _ = writeln!(
        out,
        "Gain/Loss:      \u{20b9}{:.2} ({:+.2}%)",
        summary.total_gain_loss, summary.total_gain_loss_percent
    );
    let _ = writeln!(out);
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    render_summary(&mut out, "STOCK PORTFOLIO", &dashboard.equities);
    render_summary(&mut out, "MUTUAL FUND PORTFOLIO", &dashboard.funds);

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "COMBINED PERFORMANCE");
    let _ = writeln!(out, "{}", RULE);
    let perf = &dashboard.performance;
    let _ = writeln!(out, "Total Invested: \u{20b9}{:.2}", perf.total_invested);
    let _ = writeln!(out, "Current Value:  \u{20b9}{:.2}", perf.total_current);
    let _ = writeln!(
        out,
        "Gain:           \u{20b9}{:.2} ({:+.2}%)",
        perf.total_gain, perf.total_gain_percent
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "CONSOLIDATED NET WORTH");
    let _ = writeln!(out, "{}", RULE);
    let nw = &dashboard.net_worth;
    let _ = writeln!(out, "Stock Portfolio: \u{20b9}{:.2}", nw.equity_value);
    let _ = writeln!(out, "MF Portfolio:    \u{20b9}{:.2}", nw.fund_value);
    let _ = writeln!(out, "Bank Balance:    \u{20b9}{:.2}", nw.bank_balance);
    let _ = writeln!(out, "Total Net Worth: \u{20b9}{:.2}", nw.total);
    let _ = writeln!(out);
    let _ = writeln!(out, "Asset Allocation:");
    let _ = writeln!(out, "  Stocks:       {:.1}%", nw.equities_percent);
    let _ = writeln!(out, "  Mutual Funds: {:.1}%", nw.funds_percent);
    let _ = writeln!(out, "  Cash:         {:.1}%", nw.bank_percent);

    out
}

pub fn render_sip(scheme: &str, outcome: &SipOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "SIP SIMULATION: scheme {}", scheme);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "Contribution:    \u{20b9}{:.2} x {} months",
        outcome.contribution, outcome.periods
    );
    let _ = writeln!(out, "Total Invested:  \u{20b9}{:.2}", outcome.total_invested);
    let _ = writeln!(out, "Units Purchased: {:.4}", outcome.units_purchased);
    let _ = writeln!(out, "Latest NAV:      \u{20b9}{:.4}", outcome.latest_nav);
    let _ = writeln!(out, "Current Value:   \u{20b9}{:.2}", outcome.current_value);
    let _ = writeln!(
        out,
        "Gain:            \u{20b9}{:.2} ({:+.2}%)",
        outcome.gain, outcome.gain_percent
    );
    let _ = writeln!(
        out,
        "Annualized (approx., not XIRR): {:+.2}%",
        outcome.annualized_return_percent
    );

    out
}

pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn write(&self, dashboard: &Dashboard, output_path: &str) -> Result<(), KhataError> {
        fs::write(output_path, render_dashboard(dashboard))?;
        Ok(())
    }
}
