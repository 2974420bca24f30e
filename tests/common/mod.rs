#![allow(dead_code)]

use chrono::NaiveDate;
use khata::domain::error::KhataError;
use khata::domain::holding::Holding;
use khata::domain::ledger::Ledger;
use khata::domain::nav::{NavPoint, NavSeries};
use khata::domain::quote::PriceQuote;
use khata::ports::market_data_port::{NavHistoryPort, QuotePort};
use std::collections::HashMap;

/// In-memory market data provider for pipeline tests.
pub struct MockMarketData {
    pub quotes: HashMap<String, PriceQuote>,
    pub navs: HashMap<String, Vec<NavPoint>>,
    pub errors: HashMap<String, String>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self {
            quotes: HashMap::new(),
            navs: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_quote(mut self, symbol: &str, price: f64) -> Self {
        self.quotes
            .insert(symbol.to_string(), PriceQuote::available(symbol, price));
        self
    }

    pub fn with_unavailable_quote(mut self, symbol: &str) -> Self {
        self.quotes
            .insert(symbol.to_string(), PriceQuote::unavailable(symbol));
        self
    }

    pub fn with_navs(mut self, scheme: &str, navs: Vec<NavPoint>) -> Self {
        self.navs.insert(scheme.to_string(), navs);
        self
    }

    pub fn with_error(mut self, identifier: &str, reason: &str) -> Self {
        self.errors
            .insert(identifier.to_string(), reason.to_string());
        self
    }
}

impl QuotePort for MockMarketData {
    fn quote(&self, symbol: &str) -> Result<Option<PriceQuote>, KhataError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(KhataError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.quotes.get(symbol).cloned())
    }
}

impl NavHistoryPort for MockMarketData {
    fn nav_history(&self, scheme: &str) -> Result<NavSeries, KhataError> {
        if let Some(reason) = self.errors.get(scheme) {
            return Err(KhataError::Data {
                reason: reason.clone(),
            });
        }
        Ok(NavSeries::new(
            scheme,
            self.navs.get(scheme).cloned().unwrap_or_default(),
        ))
    }

    fn list_schemes(&self) -> Result<Vec<String>, KhataError> {
        let mut schemes: Vec<String> = self.navs.keys().cloned().collect();
        schemes.sort();
        Ok(schemes)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_holding(symbol: &str, quantity: f64, unit_cost: f64) -> Holding {
    Holding::new(symbol, quantity, unit_cost, date(2023, 1, 15))
}

pub fn make_ledger(entries: &[(&str, f64, f64)]) -> Ledger {
    let mut ledger = Ledger::new();
    for &(symbol, quantity, unit_cost) in entries {
        ledger.add_holding(make_holding(symbol, quantity, unit_cost));
    }
    ledger
}

/// Monthly NAV points, newest value first.
pub fn monthly_navs(navs: &[f64]) -> Vec<NavPoint> {
    navs.iter()
        .enumerate()
        .map(|(i, &nav)| NavPoint {
            date: date(2024, 12, 1) - chrono::Months::new(i as u32),
            nav,
        })
        .collect()
}
