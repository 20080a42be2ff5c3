use clap::Args;
use dockside_app::domain::deliveries::{DeliveriesService, DeliveryUuid};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct DeleteDeliveryArgs {
    /// Delivery UUID
    #[arg(long)]
    uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: DeleteDeliveryArgs) -> Result<(), String> {
    let service = super::service(&args.database_url).await?;

    service
        .delete_delivery(DeliveryUuid::from_uuid(args.uuid))
        .await
        .map_err(|error| format!("failed to delete delivery {}: {error}", args.uuid))?;

    println!("deleted delivery: {}", args.uuid);

    Ok(())
}
