use clap::Args;
use dockside::{
    board::DeliveryBoard,
    fields::DeliveryField,
    metrics::DEFAULT_OVERDUE_THRESHOLD_DAYS,
    sort::{SortDirection, SortOrder},
};
use dockside_app::domain::deliveries::DeliveriesService;
use jiff::Timestamp;

#[derive(Debug, Args)]
pub(crate) struct ListDeliveriesArgs {
    /// Field to sort on
    #[arg(long)]
    sort: Option<DeliveryField>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Put deliveries at the dock first
    #[arg(long)]
    group_by_status: bool,

    /// Only show deliveries whose field matches, e.g. `destination=Recife`
    #[arg(long = "filter", value_parser = super::parse_filter)]
    filters: Vec<(DeliveryField, String)>,

    /// Days at the dock after which a delivery is overdue
    #[arg(long, default_value_t = DEFAULT_OVERDUE_THRESHOLD_DAYS)]
    threshold: u64,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListDeliveriesArgs) -> Result<(), String> {
    let service = super::service(&args.database_url).await?;

    let deliveries = service
        .list_deliveries()
        .await
        .map_err(|error| format!("failed to list deliveries: {error}"))?;

    let mut board = DeliveryBoard::new(deliveries);

    if let Some(field) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        board.sort(SortOrder::new(field, direction));
    }

    if args.group_by_status {
        board.group_by_status();
    }

    for (field, value) in args.filters {
        board.set_filter(field, value);
    }

    let rows = board.rows(Timestamp::now(), args.threshold);

    if args.json {
        let records: Vec<_> = rows.iter().map(|row| &row.record).collect();

        let json = serde_json::to_string_pretty(&records)
            .map_err(|error| format!("failed to encode deliveries: {error}"))?;

        println!("{json}");

        return Ok(());
    }

    for row in &rows {
        let record = &row.record;

        let days = row
            .dock_days
            .map_or_else(|| "-".to_string(), |days| format!("{days} days"));

        let flag = if row.overdue { " OVERDUE" } else { "" };

        println!(
            "{}  {}  {}  {}  {} kg  {} m³  {}  {days}{flag}",
            record.uuid,
            record.invoice,
            record.client,
            record.destination,
            record.weight,
            record.volume,
            record.status,
        );
    }

    println!("{} deliveries", rows.len());

    Ok(())
}
