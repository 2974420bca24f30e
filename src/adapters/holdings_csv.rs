//! Holdings CSV loader.
//!
//! One row per position: `symbol,quantity,unit_cost,acquired`. The same
//! format serves both the equities and the mutual-fund ledgers (fund
//! rows use the scheme code as symbol and units as quantity).

use crate::domain::error::KhataError;
use crate::domain::holding::Holding;
use crate::domain::ledger::Ledger;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub fn load_holdings<P: AsRef<Path>>(path: P) -> Result<Ledger, KhataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| KhataError::Data {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;

    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut ledger = Ledger::new();

    for result in rdr.records() {
        let record = result.map_err(|e| KhataError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;

        let symbol = record.get(0).ok_or_else(|| KhataError::Data {
            reason: "missing symbol column".into(),
        })?;

        let quantity: f64 = record
            .get(1)
            .ok_or_else(|| KhataError::Data {
                reason: "missing quantity column".into(),
            })?
            .trim()
            .parse()
            .map_err(|e| KhataError::Data {
                reason: format!("invalid quantity value: {}", e),
            })?;

        let unit_cost: f64 = record
            .get(2)
            .ok_or_else(|| KhataError::Data {
                reason: "missing unit_cost column".into(),
            })?
            .trim()
            .parse()
            .map_err(|e| KhataError::Data {
                reason: format!("invalid unit_cost value: {}", e),
            })?;

        let acquired_str = record.get(3).ok_or_else(|| KhataError::Data {
            reason: "missing acquired column".into(),
        })?;
        let acquired = NaiveDate::parse_from_str(acquired_str.trim(), "%Y-%m-%d").map_err(|e| {
            KhataError::Data {
                reason: format!("invalid acquired date: {}", e),
            }
        })?;

        ledger.add_holding(Holding::new(symbol, quantity, unit_cost, acquired));
    }

    Ok(ledger)
}
