//! Configuration validation.
//!
//! Validates all config fields before any pipeline stage runs.

use crate::domain::error::KhataError;
use crate::ports::config_port::ConfigPort;

pub fn validate_tracker_config(config: &dyn ConfigPort) -> Result<(), KhataError> {
    validate_quotes_path(config)?;
    validate_navs_path(config)?;
    validate_bank_balance(config)?;
    Ok(())
}

pub fn validate_sip_config(config: &dyn ConfigPort) -> Result<(), KhataError> {
    validate_sip_scheme(config)?;
    validate_sip_amount(config)?;
    validate_sip_months(config)?;
    Ok(())
}

fn validate_quotes_path(config: &dyn ConfigPort) -> Result<(), KhataError> {
    match config.get_string("data", "quotes") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(KhataError::ConfigInvalid {
            section: "data".to_string(),
            key: "quotes".to_string(),
            reason: "quotes path must not be empty".to_string(),
        }),
        None => Err(KhataError::ConfigMissing {
            section: "data".to_string(),
            key: "quotes".to_string(),
        }),
    }
}

fn validate_navs_path(config: &dyn ConfigPort) -> Result<(), KhataError> {
    match config.get_string("data", "navs") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(KhataError::ConfigInvalid {
            section: "data".to_string(),
            key: "navs".to_string(),
            reason: "navs directory must not be empty".to_string(),
        }),
        None => Err(KhataError::ConfigMissing {
            section: "data".to_string(),
            key: "navs".to_string(),
        }),
    }
}

fn validate_bank_balance(config: &dyn ConfigPort) -> Result<(), KhataError> {
    let value = config.get_double("bank", "balance", 0.0);
    if value < 0.0 {
        return Err(KhataError::ConfigInvalid {
            section: "bank".to_string(),
            key: "balance".to_string(),
            reason: "balance must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_sip_scheme(config: &dyn ConfigPort) -> Result<(), KhataError> {
    match config.get_string("sip", "scheme") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(KhataError::ConfigInvalid {
            section: "sip".to_string(),
            key: "scheme".to_string(),
            reason: "scheme must not be empty".to_string(),
        }),
        None => Err(KhataError::ConfigMissing {
            section: "sip".to_string(),
            key: "scheme".to_string(),
        }),
    }
}

fn validate_sip_amount(config: &dyn ConfigPort) -> Result<(), KhataError> {
    let value = config.get_double("sip", "amount", 0.0);
    if value <= 0.0 {
        return Err(KhataError::ConfigInvalid {
            section: "sip".to_string(),
            key: "amount".to_string(),
            reason: "amount must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_sip_months(config: &dyn ConfigPort) -> Result<(), KhataError> {
    let value = config.get_int("sip", "months", 0);
    if value < 1 {
        return Err(KhataError::ConfigInvalid {
            section: "sip".to_string(),
            key: "months".to_string(),
            reason: "months must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    const VALID: &str = r#"
[data]
quotes = data/quotes.csv
navs = data/navs

[bank]
balance = 50000

[sip]
scheme = 119551
amount = 5000
months = 12
"#;

    #[test]
    fn valid_config_passes() {
        let adapter = config(VALID);
        assert!(validate_tracker_config(&adapter).is_ok());
        assert!(validate_sip_config(&adapter).is_ok());
    }

    #[test]
    fn missing_quotes_path() {
        let adapter = config("[data]\nnavs = data/navs\n");
        let err = validate_tracker_config(&adapter).unwrap_err();
        assert!(matches!(
            err,
            KhataError::ConfigMissing { section, key } if section == "data" && key == "quotes"
        ));
    }

    #[test]
    fn missing_navs_path() {
        let adapter = config("[data]\nquotes = data/quotes.csv\n");
        let err = validate_tracker_config(&adapter).unwrap_err();
        assert!(matches!(
            err,
            KhataError::ConfigMissing { section, key } if section == "data" && key == "navs"
        ));
    }

    #[test]
    fn negative_bank_balance_rejected() {
        let adapter = config("[data]\nquotes = q.csv\nnavs = navs\n\n[bank]\nbalance = -1\n");
        let err = validate_tracker_config(&adapter).unwrap_err();
        assert!(matches!(
            err,
            KhataError::ConfigInvalid { section, key, .. } if section == "bank" && key == "balance"
        ));
    }

    #[test]
    fn bank_balance_defaults_to_zero() {
        let adapter = config("[data]\nquotes = q.csv\nnavs = navs\n");
        assert!(validate_tracker_config(&adapter).is_ok());
    }

    #[test]
    fn sip_missing_scheme() {
        let adapter = config("[sip]\namount = 5000\nmonths = 12\n");
        let err = validate_sip_config(&adapter).unwrap_err();
        assert!(matches!(
            err,
            KhataError::ConfigMissing { section, key } if section == "sip" && key == "scheme"
        ));
    }

    #[test]
    fn sip_zero_amount_rejected() {
        let adapter = config("[sip]\nscheme = 119551\namount = 0\nmonths = 12\n");
        let err = validate_sip_config(&adapter).unwrap_err();
        assert!(matches!(
            err,
            KhataError::ConfigInvalid { section, key, .. } if section == "sip" && key == "amount"
        ));
    }

    #[test]
    fn sip_zero_months_rejected() {
        let adapter = config("[sip]\nscheme = 119551\namount = 5000\nmonths = 0\n");
        let err = validate_sip_config(&adapter).unwrap_err();
        assert!(matches!(
            err,
            KhataError::ConfigInvalid { section, key, .. } if section == "sip" && key == "months"
        ));
    }
}
