//! File-backed integration tests for the CLI orchestration layer.
//!
//! Tests cover:
//! - Config loading and validation from real INI files on disk
//! - Ledger loading through the [portfolio] section
//! - Full dashboard pipeline over CSV market data in a temp directory
//! - SIP request resolution and simulation from files

use khata::adapters::csv_market_data::CsvMarketData;
use khata::adapters::file_config_adapter::FileConfigAdapter;
use khata::adapters::text_report::{render_dashboard, TextReportAdapter};
use khata::cli::{build_sip_request, collect_equity_quotes, collect_fund_quotes, load_ledger};
use khata::domain::config_validation::{validate_sip_config, validate_tracker_config};
use khata::domain::error::KhataError;
use khata::domain::networth::Dashboard;
use khata::domain::sip::simulate_sip;
use khata::domain::valuation::PortfolioSummary;
use khata::ports::market_data_port::NavHistoryPort;
use khata::ports::report_port::ReportPort;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Lay out a complete data directory: config, holdings, quotes, NAVs.
fn setup_workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();

    fs::write(
        root.join("equities.csv"),
        "symbol,quantity,unit_cost,acquired\n\
         RELIANCE,10,2500,2023-01-15\n\
         TCS,5,3500,2023-03-20\n",
    )
    .unwrap();

    fs::write(
        root.join("funds.csv"),
        "symbol,quantity,unit_cost,acquired\n\
         119551,200,140,2023-06-10\n",
    )
    .unwrap();

    fs::write(
        root.join("quotes.csv"),
        "symbol,price,change_percent,market_cap\n\
         RELIANCE,2850,1.2,19300000000000\n\
         TCS,,,\n",
    )
    .unwrap();

    let navs = root.join("navs");
    fs::create_dir(&navs).unwrap();
    fs::write(
        navs.join("119551.csv"),
        "date,nav\n\
         2024-10-01,140.0\n\
         2024-11-01,145.0\n\
         2024-12-01,150.0\n",
    )
    .unwrap();

    let config = format!(
        "[data]\n\
         quotes = {}\n\
         navs = {}\n\n\
         [portfolio]\n\
         equities = {}\n\
         funds = {}\n\n\
         [bank]\n\
         balance = 10000\n\n\
         [sip]\n\
         scheme = 119551\n\
         amount = 5000\n\
         months = 3\n",
        root.join("quotes.csv").display(),
        navs.display(),
        root.join("equities.csv").display(),
        root.join("funds.csv").display(),
    );
    let config_path = root.join("khata.ini");
    fs::write(&config_path, config).unwrap();

    (dir, config_path)
}

fn market_data_from(config: &FileConfigAdapter) -> CsvMarketData {
    use khata::ports::config_port::ConfigPort;
    CsvMarketData::new(
        PathBuf::from(config.get_string("data", "quotes").unwrap()),
        PathBuf::from(config.get_string("data", "navs").unwrap()),
    )
}

mod config_loading {
    use super::*;

    #[test]
    fn workspace_config_is_valid() {
        let (_dir, config_path) = setup_workspace();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();

        assert!(validate_tracker_config(&config).is_ok());
        assert!(validate_sip_config(&config).is_ok());
    }

    #[test]
    fn ledgers_load_from_portfolio_section() {
        let (_dir, config_path) = setup_workspace();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();

        let equities = load_ledger(&config, "equities").unwrap();
        let funds = load_ledger(&config, "funds").unwrap();

        assert_eq!(equities.len(), 2);
        assert_eq!(funds.len(), 1);
        assert!((funds.get("119551").unwrap().quantity - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn broken_holdings_path_is_data_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("khata.ini");
        fs::write(&config_path, "[portfolio]\nequities = /nonexistent/eq.csv\n").unwrap();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();

        let err = load_ledger(&config, "equities").unwrap_err();
        assert!(matches!(err, KhataError::Data { .. }));
    }
}

mod dashboard_pipeline {
    use super::*;

    #[test]
    fn full_pipeline_from_files() {
        let (_dir, config_path) = setup_workspace();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();
        validate_tracker_config(&config).unwrap();

        let equities = load_ledger(&config, "equities").unwrap();
        let funds = load_ledger(&config, "funds").unwrap();
        let market = market_data_from(&config);

        let stock_summary =
            PortfolioSummary::compute(&equities, &collect_equity_quotes(&market, &equities));
        let fund_summary =
            PortfolioSummary::compute(&funds, &collect_fund_quotes(&market, &funds));
        let dashboard = Dashboard::compute(10000.0, stock_summary, fund_summary);

        // RELIANCE quoted at 2850; TCS has a blank price so it stays at
        // cost; the fund is valued at the newest NAV (150).
        assert!((dashboard.equities.holdings["RELIANCE"].current_value - 28500.0).abs() < 1e-9);
        assert!((dashboard.equities.holdings["TCS"].current_value - 17500.0).abs() < 1e-9);
        assert!((dashboard.funds.total_current - 30000.0).abs() < 1e-9);
        assert!((dashboard.net_worth.total - (28500.0 + 17500.0 + 30000.0 + 10000.0)).abs() < 1e-9);
    }

    #[test]
    fn report_renders_and_writes() {
        let (dir, config_path) = setup_workspace();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();

        let equities = load_ledger(&config, "equities").unwrap();
        let funds = load_ledger(&config, "funds").unwrap();
        let market = market_data_from(&config);

        let dashboard = Dashboard::compute(
            10000.0,
            PortfolioSummary::compute(&equities, &collect_equity_quotes(&market, &equities)),
            PortfolioSummary::compute(&funds, &collect_fund_quotes(&market, &funds)),
        );

        let text = render_dashboard(&dashboard);
        assert!(text.contains("RELIANCE"));
        assert!(text.contains("119551"));
        assert!(text.contains("CONSOLIDATED NET WORTH"));

        let out_path = dir.path().join("report.txt");
        TextReportAdapter
            .write(&dashboard, out_path.to_str().unwrap())
            .unwrap();
        assert_eq!(fs::read_to_string(&out_path).unwrap(), text);
    }
}

mod sip_from_files {
    use super::*;

    #[test]
    fn sip_request_resolves_from_config() {
        let (_dir, config_path) = setup_workspace();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();

        let (scheme, amount, months) = build_sip_request(&config, None, None, None).unwrap();
        assert_eq!(scheme, "119551");
        assert!((amount - 5000.0).abs() < f64::EPSILON);
        assert_eq!(months, 3);
    }

    #[test]
    fn sip_simulates_over_csv_history() {
        let (_dir, config_path) = setup_workspace();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();
        let market = market_data_from(&config);

        let (scheme, amount, months) = build_sip_request(&config, None, None, None).unwrap();
        let series = market.nav_history(&scheme).unwrap();
        let outcome = simulate_sip(&series, amount, months).unwrap();

        // Rows arrive oldest-first on disk; the adapter re-sorts, so the
        // purchase NAVs are 150, 145, 140 and the latest is 150.
        let expected_units = 5000.0 / 150.0 + 5000.0 / 145.0 + 5000.0 / 140.0;
        assert!((outcome.units_purchased - expected_units).abs() < 1e-9);
        assert!((outcome.latest_nav - 150.0).abs() < f64::EPSILON);
        assert!((outcome.total_invested - 15000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sip_over_requesting_months_fails_cleanly() {
        let (_dir, config_path) = setup_workspace();
        let config = FileConfigAdapter::from_file(&config_path).unwrap();
        let market = market_data_from(&config);

        let series = market.nav_history("119551").unwrap();
        match simulate_sip(&series, 5000.0, 12) {
            Err(KhataError::InsufficientHistory {
                available,
                requested,
                ..
            }) => {
                assert_eq!(available, 3);
                assert_eq!(requested, 12);
            }
            other => panic!("expected InsufficientHistory, got {other:?}"),
        }
    }
}
