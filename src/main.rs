mod cli;
mod error;
mod fetch;
mod reading;
mod reconcile;
mod season;
mod store;
mod table;
mod tracker;

use std::process::exit;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use store::Store;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let store = Store::new(cli.store.clone().unwrap_or_else(Store::default_path));

    match &cli.command {
        Commands::Update {} => match command::update(&store).await {
            Ok(message) => println!("{}", message),
            Err(e) => fail(e),
        },
        Commands::Backup {} => match command::backup(&store) {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => fail(e),
        },
        Commands::Restore { file } => match command::restore(&store, file) {
            Ok(message) => println!("{}", message),
            Err(e) => fail(e),
        },
    }

    Ok(())
}

// A failed run must surface to the scheduler as a failed invocation.
fn fail(e: Error) -> ! {
    eprintln!("Error: {}", e);
    exit(1);
}
