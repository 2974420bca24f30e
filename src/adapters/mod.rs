//! Concrete adapter implementations for ports.

pub mod csv_market_data;
pub mod holdings_csv;
pub mod file_config_adapter;
pub mod fixed_balance;
pub mod text_report;
