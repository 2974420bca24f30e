//! Fixed cash-balance adapter.
//!
//! Stands in for a real bank account-aggregator integration, which is
//! out of scope; the balance comes straight from configuration and
//! defaults to zero.

use crate::domain::error::KhataError;
use crate::ports::balance_port::BalancePort;

pub struct FixedBalance {
    amount: f64,
}

impl FixedBalance {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl BalancePort for FixedBalance {
    fn balance(&self) -> Result<f64, KhataError> {
        Ok(self.amount)
    }
}
