//! Report generation port trait.

use crate::domain::error::KhataError;
use crate::domain::networth::Dashboard;

/// Port for writing the portfolio dashboard.
pub trait ReportPort {
    fn write(&self, dashboard: &Dashboard, output_path: &str) -> Result<(), KhataError>;
}
