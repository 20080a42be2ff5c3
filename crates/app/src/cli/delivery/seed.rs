use std::path::PathBuf;

use clap::Args;
use dockside::{deliveries::DeliveryRecord, fixtures::DeliveryFixture};
use dockside_app::domain::deliveries::{DeliveriesService, data::NewDelivery};
use jiff::Timestamp;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// Fixture set name, read from `deliveries/<name>.yml`
    #[arg(long)]
    fixture: String,

    /// Fixture base directory
    #[arg(long, default_value = "./fixtures")]
    fixtures_dir: PathBuf,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let mut fixture = DeliveryFixture::with_base_path(&args.fixtures_dir);

    fixture
        .load(&args.fixture)
        .map_err(|error| format!("failed to load fixture `{}`: {error}", args.fixture))?;

    let service = super::service(&args.database_url).await?;

    for record in fixture.deliveries() {
        let created = service
            .create_delivery(new_delivery(record))
            .await
            .map_err(|error| format!("failed to seed {}: {error}", record.invoice))?;

        println!("{} {}", created.uuid, created.invoice);
    }

    println!("seeded {} deliveries", fixture.deliveries().len());

    Ok(())
}

/// Unparsable arrival times are stored as the time of seeding.
fn new_delivery(record: &DeliveryRecord) -> NewDelivery {
    NewDelivery {
        client: record.client.clone(),
        invoice: record.invoice.clone(),
        destination: record.destination.clone(),
        weight: record.weight,
        volume: record.volume,
        status: record.status,
        observation: record.observation.clone(),
        dock_arrival_time: record.dock_arrival().unwrap_or_else(Timestamp::now),
    }
}
