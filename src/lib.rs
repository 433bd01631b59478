//! foreman-inventory - Ansible dynamic inventory backed by Foreman
//!
//! Queries the Foreman API and prints either every host grouped by
//! hostgroup (`--list`) or the variables of one host (`--host`).
//!
//! # Features
//!
//! - Settings read from `foreman.ini` (path overridable via `FOREMAN_INI_PATH`)
//! - Page-by-page host listing until an empty page
//! - Hostgroup, domain, OS, ... lookups memoized for the whole run
//! - Sorted, pretty-printed JSON on stdout
//!
//! # Example
//!
//! ```bash
//! # Full inventory
//! foreman-inventory --list
//!
//! # Variables of a single host
//! foreman-inventory --host web01.example.com
//!
//! # Use with Ansible
//! ansible -i foreman-inventory web -m shell -a "/bin/uname -a"
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod foreman;
pub mod output;

pub use cli::{Cli, RequestMode};
pub use error::{ForemanError, Result};
pub use foreman::{
    run_inventory_command, ForemanClient, ForemanInventory, GroupedInventory, Host, HostVars,
    ReferenceCache, ReferenceKind, Settings, SettingsResolver,
};
pub use output::{output_inventory, render, render_output, InventoryOutput};
