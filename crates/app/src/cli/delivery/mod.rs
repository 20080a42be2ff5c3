use clap::{Args, Subcommand};
use dockside::fields::DeliveryField;
use dockside_app::{
    database::{self, Db},
    domain::deliveries::PgDeliveriesService,
};

mod add;
mod delete;
mod list;
mod report;
mod seed;
mod status;

#[derive(Debug, Args)]
pub(crate) struct DeliveryCommand {
    #[command(subcommand)]
    command: DeliverySubcommand,
}

#[derive(Debug, Subcommand)]
enum DeliverySubcommand {
    /// Register a delivery arriving at the dock
    Add(add::AddDeliveryArgs),
    /// List deliveries with their dock day counts
    List(list::ListDeliveriesArgs),
    /// Change the status of a delivery
    Status(status::StatusArgs),
    /// Delete a delivery permanently
    Delete(delete::DeleteDeliveryArgs),
    /// Print the dock report
    Report(report::ReportArgs),
    /// Insert every delivery from a YAML fixture set
    Seed(seed::SeedArgs),
}

pub(crate) async fn run(command: DeliveryCommand) -> Result<(), String> {
    match command.command {
        DeliverySubcommand::Add(args) => add::run(args).await,
        DeliverySubcommand::List(args) => list::run(args).await,
        DeliverySubcommand::Status(args) => status::run(args).await,
        DeliverySubcommand::Delete(args) => delete::run(args).await,
        DeliverySubcommand::Report(args) => report::run(args).await,
        DeliverySubcommand::Seed(args) => seed::run(args).await,
    }
}

async fn service(database_url: &str) -> Result<PgDeliveriesService, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgDeliveriesService::new(Db::new(pool)))
}

/// Parse a `field=value` filter argument.
fn parse_filter(value: &str) -> Result<(DeliveryField, String), String> {
    let (field, selected) = value
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got `{value}`"))?;

    let field = field.parse::<DeliveryField>().map_err(|error| error.to_string())?;

    Ok((field, selected.to_string()))
}
