use clap::Args;
use dockside_app::domain::deliveries::{DeliveriesService, DeliveryStatus, DeliveryUuid};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct StatusArgs {
    /// Delivery UUID
    #[arg(long)]
    uuid: Uuid,

    /// New status (`AtDock` or `InTransit`)
    #[arg(long)]
    status: DeliveryStatus,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: StatusArgs) -> Result<(), String> {
    let service = super::service(&args.database_url).await?;

    let updated = service
        .update_status(DeliveryUuid::from_uuid(args.uuid), args.status)
        .await
        .map_err(|error| format!("failed to update delivery {}: {error}", args.uuid))?;

    println!("delivery_uuid: {}", updated.uuid);
    println!("status: {}", updated.status);

    Ok(())
}
