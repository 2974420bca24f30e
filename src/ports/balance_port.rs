//! Cash balance access port trait.

use crate::domain::error::KhataError;

/// Supplies the cash/bank balance folded into net worth.
pub trait BalancePort {
    fn balance(&self) -> Result<f64, KhataError>;
}
