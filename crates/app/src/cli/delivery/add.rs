use clap::Args;
use dockside_app::domain::deliveries::{
    DeliveriesService, DeliveryStatus, data::NewDelivery,
};
use jiff::Timestamp;

#[derive(Debug, Args)]
pub(crate) struct AddDeliveryArgs {
    /// Client name
    #[arg(long)]
    client: String,

    /// Invoice number
    #[arg(long)]
    invoice: String,

    /// Destination city
    #[arg(long)]
    destination: String,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Volume in cubic metres
    #[arg(long)]
    volume: f64,

    /// Initial status
    #[arg(long, default_value_t = DeliveryStatus::AtDock)]
    status: DeliveryStatus,

    /// Free-form notes
    #[arg(long, default_value = "")]
    observation: String,

    /// Dock arrival time; now when omitted
    #[arg(long)]
    arrived_at: Option<Timestamp>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: AddDeliveryArgs) -> Result<(), String> {
    let delivery = NewDelivery {
        client: args.client,
        invoice: args.invoice,
        destination: args.destination,
        weight: args.weight,
        volume: args.volume,
        status: args.status,
        observation: args.observation,
        dock_arrival_time: args.arrived_at.unwrap_or_else(Timestamp::now),
    };

    delivery.validate().map_err(|error| error.to_string())?;

    let service = super::service(&args.database_url).await?;

    let created = service
        .create_delivery(delivery)
        .await
        .map_err(|error| format!("failed to create delivery: {error}"))?;

    println!("delivery_uuid: {}", created.uuid);
    println!("invoice: {}", created.invoice);
    println!("status: {}", created.status);

    Ok(())
}
