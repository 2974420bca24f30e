//! CSV file market-data adapter.
//!
//! Quotes come from a single CSV (`symbol,price,change_percent,market_cap`;
//! a blank price field marks the symbol as unavailable). NAV history lives
//! in one `<scheme>.csv` file per scheme (`date,nav`) under a directory.

use crate::domain::error::KhataError;
use crate::domain::nav::{NavPoint, NavSeries};
use crate::domain::quote::PriceQuote;
use crate::ports::market_data_port::{NavHistoryPort, QuotePort};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvMarketData {
    quotes_path: PathBuf,
    navs_dir: PathBuf,
}

impl CsvMarketData {
    pub fn new(quotes_path: PathBuf, navs_dir: PathBuf) -> Self {
        Self {
            quotes_path,
            navs_dir,
        }
    }

    fn nav_path(&self, scheme: &str) -> PathBuf {
        self.navs_dir.join(format!("{}.csv", scheme))
    }
}

fn parse_optional_f64(field: Option<&str>, name: &str) -> Result<Option<f64>, KhataError> {
    match field {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| KhataError::Data {
                reason: format!("invalid {} value '{}': {}", name, raw, e),
            }),
    }
}

impl QuotePort for CsvMarketData {
    fn quote(&self, symbol: &str) -> Result<Option<PriceQuote>, KhataError> {
        let content =
            fs::read_to_string(&self.quotes_path).map_err(|e| KhataError::Data {
                reason: format!("failed to read {}: {}", self.quotes_path.display(), e),
            })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        for result in rdr.records() {
            let record = result.map_err(|e| KhataError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let row_symbol = record.get(0).ok_or_else(|| KhataError::Data {
                reason: "missing symbol column".into(),
            })?;
            if row_symbol != symbol {
                continue;
            }

            return Ok(Some(PriceQuote {
                symbol: symbol.to_string(),
                price: parse_optional_f64(record.get(1), "price")?,
                day_change_percent: parse_optional_f64(record.get(2), "change_percent")?,
                market_cap: parse_optional_f64(record.get(3), "market_cap")?,
            }));
        }

        Ok(None)
    }
}

impl NavHistoryPort for CsvMarketData {
    fn nav_history(&self, scheme: &str) -> Result<NavSeries, KhataError> {
        let path = self.nav_path(scheme);
        if !path.exists() {
            return Ok(NavSeries::new(scheme, Vec::new()));
        }

        let content = fs::read_to_string(&path).map_err(|e| KhataError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| KhataError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| KhataError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                KhataError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let nav: f64 = record
                .get(1)
                .ok_or_else(|| KhataError::Data {
                    reason: "missing nav column".into(),
                })?
                .trim()
                .parse()
                .map_err(|e| KhataError::Data {
                    reason: format!("invalid nav value: {}", e),
                })?;

            points.push(NavPoint { date, nav });
        }

        Ok(NavSeries::new(scheme, points))
    }

    fn list_schemes(&self) -> Result<Vec<String>, KhataError> {
        let entries = fs::read_dir(&self.navs_dir).map_err(|e| KhataError::Data {
            reason: format!("failed to read directory {}: {}", self.navs_dir.display(), e),
        })?;

        let mut schemes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| KhataError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(scheme) = name_str.strip_suffix(".csv") {
                schemes.push(scheme.to_string());
            }
        }

        schemes.sort();
        Ok(schemes)
    }
}
