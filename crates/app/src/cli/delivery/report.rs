use std::io;

use clap::Args;
use dockside::{board::DeliveryBoard, metrics::DEFAULT_OVERDUE_THRESHOLD_DAYS};
use dockside_app::domain::deliveries::DeliveriesService;
use jiff::Timestamp;

#[derive(Debug, Args)]
pub(crate) struct ReportArgs {
    /// Days at the dock after which a delivery is overdue
    #[arg(long, default_value_t = DEFAULT_OVERDUE_THRESHOLD_DAYS)]
    threshold: u64,

    /// Point in time to count dock days to; now when omitted
    #[arg(long)]
    at: Option<Timestamp>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ReportArgs) -> Result<(), String> {
    let service = super::service(&args.database_url).await?;

    let deliveries = service
        .list_deliveries()
        .await
        .map_err(|error| format!("failed to list deliveries: {error}"))?;

    let report = DeliveryBoard::new(deliveries)
        .dock_report(args.at.unwrap_or_else(Timestamp::now), args.threshold);

    report
        .write_to(io::stdout().lock())
        .map_err(|error| error.to_string())
}
