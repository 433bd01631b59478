//! Foreman API module
//!
//! Client, reference cache and the two inventory views built on top of them.

mod cache;
mod client;
mod commands;
mod host;
mod inventory;
mod models;
mod reference;
mod settings;

pub use cache::ReferenceCache;
pub use client::ForemanClient;
pub use commands::run_inventory_command;
pub use host::HostVars;
pub use inventory::{ForemanInventory, GroupedInventory};
pub use models::Host;
pub use reference::ReferenceKind;
pub use settings::{Settings, SettingsResolver};
