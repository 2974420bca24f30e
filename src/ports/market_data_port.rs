//! Market data access port traits.
//!
//! Transport-level failures (network, auth, unreadable files) surface as
//! errors here; a provider that is reachable but has nothing for the
//! requested instrument returns `Ok(None)` / an empty series instead, so
//! the pure valuation core only ever sees "unavailable", never a
//! transport fault.

use crate::domain::error::KhataError;
use crate::domain::nav::NavSeries;
use crate::domain::quote::PriceQuote;

/// Current-price lookup for listed instruments.
pub trait QuotePort {
    /// `Ok(None)` when no usable price exists for `symbol`.
    fn quote(&self, symbol: &str) -> Result<Option<PriceQuote>, KhataError>;
}

/// Historical NAV lookup for mutual fund schemes.
pub trait NavHistoryPort {
    /// Full history for `scheme`, newest-first. An unknown scheme yields
    /// an empty series.
    fn nav_history(&self, scheme: &str) -> Result<NavSeries, KhataError>;

    fn list_schemes(&self) -> Result<Vec<String>, KhataError>;
}
