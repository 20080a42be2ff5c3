//! Board Config

use clap::Args;
use dockside::metrics::DEFAULT_OVERDUE_THRESHOLD_DAYS;

/// Delivery board settings.
#[derive(Debug, Args)]
pub struct BoardConfig {
    /// Days at the dock after which a delivery is overdue
    #[arg(
        long,
        env = "OVERDUE_THRESHOLD_DAYS",
        default_value_t = DEFAULT_OVERDUE_THRESHOLD_DAYS
    )]
    pub overdue_threshold_days: u64,
}
