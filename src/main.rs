//! Foreman dynamic inventory - Main entry point

use clap::Parser;
use log::info;

use foreman_inventory::{run_inventory_command, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging (stderr only; stdout carries the inventory)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting foreman-inventory v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_inventory_command(&cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}
