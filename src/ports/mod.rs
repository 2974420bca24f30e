//! Port traits decoupling the domain from concrete data sources.

pub mod market_data_port;
pub mod balance_port;
pub mod config_port;
pub mod report_port;
