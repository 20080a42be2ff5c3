use clap::{Parser, Subcommand};

mod db;
mod delivery;

#[derive(Debug, Parser)]
#[command(name = "dockside-app", about = "Dockside CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Delivery(delivery::DeliveryCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Delivery(command) => delivery::run(command).await,
        }
    }
}
