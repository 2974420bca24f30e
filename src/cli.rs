//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_market_data::CsvMarketData;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::fixed_balance::FixedBalance;
use crate::adapters::holdings_csv;
use crate::adapters::text_report::{render_dashboard, render_sip, TextReportAdapter};
use crate::domain::config_validation::{validate_sip_config, validate_tracker_config};
use crate::domain::error::KhataError;
use crate::domain::ledger::Ledger;
use crate::domain::networth::Dashboard;
use crate::domain::quote::PriceQuote;
use crate::domain::sip::simulate_sip;
use crate::domain::valuation::PortfolioSummary;
use crate::ports::balance_port::BalancePort;
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::{NavHistoryPort, QuotePort};
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "khata", about = "Personal finance portfolio tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full portfolio dashboard
    Report {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Simulate a systematic investment plan for a fund scheme
    Sip {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        scheme: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        months: Option<usize>,
    },
    /// Show NAV coverage for scheme(s)
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        scheme: Option<String>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Report { config, output } => run_report(&config, output.as_ref()),
        Command::Sip {
            config,
            scheme,
            amount,
            months,
        } => run_sip(&config, scheme.as_deref(), amount, months),
        Command::Info { config, scheme } => run_info(&config, scheme.as_deref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = KhataError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_report(config_path: &PathBuf, output_path: Option<&PathBuf>) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Err(e) = validate_tracker_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Load holdings ledgers
    let equities = match load_ledger(&config, "equities") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let funds = match load_ledger(&config, "funds") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!(
        "Loaded {} equity and {} fund holdings",
        equities.len(),
        funds.len()
    );

    // Stage 3: Fetch market data
    let market_data = build_market_data(&config);
    let equity_quotes = collect_equity_quotes(&market_data, &equities);
    let fund_quotes = collect_fund_quotes(&market_data, &funds);

    // Stage 4: Value portfolios and aggregate
    let stock_summary = PortfolioSummary::compute(&equities, &equity_quotes);
    let fund_summary = PortfolioSummary::compute(&funds, &fund_quotes);

    let bank = FixedBalance::new(config.get_double("bank", "balance", 0.0));
    let bank_balance = match bank.balance() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let dashboard = Dashboard::compute(bank_balance, stock_summary, fund_summary);

    // Stage 5: Render
    print!("{}", render_dashboard(&dashboard));
    if let Some(path) = output_path {
        let path = path.display().to_string();
        if let Err(e) = TextReportAdapter.write(&dashboard, &path) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Report written to {path}");
    }

    ExitCode::SUCCESS
}

fn run_sip(
    config_path: &PathBuf,
    scheme_override: Option<&str>,
    amount_override: Option<f64>,
    months_override: Option<usize>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Err(e) = validate_tracker_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let (scheme, amount, months) = match build_sip_request(
        &config,
        scheme_override,
        amount_override,
        months_override,
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Fetching NAV history for scheme {scheme}");
    let market_data = build_market_data(&config);
    let series = match market_data.nav_history(&scheme) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match simulate_sip(&series, amount, months) {
        Ok(outcome) => {
            print!("{}", render_sip(&scheme, &outcome));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_info(config_path: &PathBuf, scheme: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Err(e) = validate_tracker_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    let market_data = build_market_data(&config);

    let schemes = match scheme {
        Some(s) => vec![s.to_string()],
        None => match market_data.list_schemes() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };

    for scheme in schemes {
        let series = match market_data.nav_history(&scheme) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };
        match (series.date_range(), series.latest()) {
            (Some((oldest, newest)), Some(latest)) => {
                println!(
                    "{}: {} NAVs, {} to {}, latest \u{20b9}{:.4}",
                    scheme,
                    series.len(),
                    oldest,
                    newest,
                    latest.nav
                );
            }
            _ => {
                let err = KhataError::NoNavHistory {
                    scheme: scheme.clone(),
                };
                eprintln!("error: {err}");
                return (&err).into();
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_tracker_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    // The [sip] section is optional; validate it only when configured.
    if config.get_string("sip", "scheme").is_some() {
        if let Err(e) = validate_sip_config(&config) {
            eprintln!("error: {e}");
            return (&e).into();
        }
    }

    println!("Config OK");
    ExitCode::SUCCESS
}

fn build_market_data(config: &dyn ConfigPort) -> CsvMarketData {
    let quotes = config.get_string("data", "quotes").unwrap_or_default();
    let navs = config.get_string("data", "navs").unwrap_or_default();
    CsvMarketData::new(PathBuf::from(quotes), PathBuf::from(navs))
}

/// Load one asset-class ledger. A missing `[portfolio]` key means the
/// user tracks nothing in that class; an unreadable file is an error.
pub fn load_ledger(config: &dyn ConfigPort, key: &str) -> Result<Ledger, KhataError> {
    match config.get_string("portfolio", key) {
        Some(path) => holdings_csv::load_holdings(path),
        None => Ok(Ledger::new()),
    }
}

/// Resolve the SIP request from flags falling back to the `[sip]`
/// config section, then validate the final values.
pub fn build_sip_request(
    config: &dyn ConfigPort,
    scheme_override: Option<&str>,
    amount_override: Option<f64>,
    months_override: Option<usize>,
) -> Result<(String, f64, usize), KhataError> {
    let scheme = match scheme_override {
        Some(s) => s.to_string(),
        None => config
            .get_string("sip", "scheme")
            .ok_or_else(|| KhataError::ConfigMissing {
                section: "sip".into(),
                key: "scheme".into(),
            })?,
    };

    let amount = amount_override.unwrap_or_else(|| config.get_double("sip", "amount", 0.0));
    if amount <= 0.0 {
        return Err(KhataError::ConfigInvalid {
            section: "sip".into(),
            key: "amount".into(),
            reason: "amount must be positive".into(),
        });
    }

    let months = match months_override {
        Some(m) => m as i64,
        None => config.get_int("sip", "months", 0),
    };
    if months < 1 {
        return Err(KhataError::ConfigInvalid {
            section: "sip".into(),
            key: "months".into(),
            reason: "months must be at least 1".into(),
        });
    }

    Ok((scheme, amount, months as usize))
}

/// Fetch quotes for every equity symbol. Provider failures degrade to
/// "unavailable" so valuation falls back to cost basis.
pub fn collect_equity_quotes(
    port: &dyn QuotePort,
    ledger: &Ledger,
) -> HashMap<String, PriceQuote> {
    let mut quotes = HashMap::new();
    for symbol in ledger.symbols() {
        match port.quote(&symbol) {
            Ok(Some(quote)) => {
                quotes.insert(symbol, quote);
            }
            Ok(None) => {
                eprintln!("Warning: no quote for {symbol}, using cost basis");
            }
            Err(e) => {
                eprintln!("Warning: quote lookup failed for {symbol} ({e}), using cost basis");
            }
        }
    }
    quotes
}

/// Funds are priced at their latest NAV; a scheme with no history is
/// treated as quote-unavailable.
pub fn collect_fund_quotes(
    port: &dyn NavHistoryPort,
    ledger: &Ledger,
) -> HashMap<String, PriceQuote> {
    let mut quotes = HashMap::new();
    for scheme in ledger.symbols() {
        match port.nav_history(&scheme) {
            Ok(series) => match series.latest() {
                Some(point) => {
                    quotes.insert(scheme.clone(), PriceQuote::available(&scheme, point.nav));
                }
                None => {
                    eprintln!("Warning: no NAV history for {scheme}, using cost basis");
                }
            },
            Err(e) => {
                eprintln!("Warning: NAV lookup failed for {scheme} ({e}), using cost basis");
            }
        }
    }
    quotes
}
