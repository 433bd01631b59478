//! Inventory command handler

use log::{debug, info};

use crate::cli::{Cli, RequestMode};
use crate::error::Result;
use crate::foreman::client::ForemanClient;
use crate::foreman::inventory::ForemanInventory;
use crate::foreman::settings::SettingsResolver;
use crate::output::{output_inventory, InventoryOutput};

/// Load settings, check the API, build the requested inventory and print it
pub async fn run_inventory_command(cli: &Cli) -> Result<()> {
    let resolver = SettingsResolver::new(cli.config.as_deref());
    let settings = resolver.load()?;
    debug!("Loaded settings from {}: {:?}", resolver.path().display(), settings);

    let client = ForemanClient::new(&settings);
    client.check_connection().await?;

    let mut inventory = ForemanInventory::new(client);

    let output = match cli.mode() {
        RequestMode::Host(host) => {
            debug!("Describing host '{}'", host);
            InventoryOutput::Host(inventory.describe_host(&host).await)
        }
        RequestMode::List => {
            debug!("Listing all hosts");
            InventoryOutput::Groups(inventory.list_inventory().await?)
        }
        RequestMode::Nothing => InventoryOutput::Empty,
    };

    info!(
        "Inventory built with {} reference lookups",
        inventory.cache().len()
    );
    output_inventory(&output)
}
