//! CLI argument parsing
//!
//! Follows the Ansible dynamic inventory protocol: `--list` for the grouped
//! inventory, `--host <HOST>` for a single host's variables.

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;

/// Foreman dynamic inventory for Ansible
#[derive(Parser, Debug)]
#[command(name = "foreman-inventory")]
#[command(version)]
#[command(about = "Produce an Ansible inventory based on Foreman", long_about = None)]
pub struct Cli {
    /// List instances grouped by hostgroup (default: true)
    #[arg(long, default_value_t = true)]
    pub list: bool,

    /// Get all the variables about a specific instance (ID or name)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Settings file (overrides FOREMAN_INI_PATH and ./foreman.ini next to the binary)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); logs go to stderr
    #[arg(
        short,
        long,
        default_value = defaults::LOG_LEVEL,
        env = defaults::LOG_LEVEL_ENV_VAR
    )]
    pub log_level: String,
}

/// What the invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMode {
    Host(String),
    List,
    Nothing,
}

impl Cli {
    /// A host identifier wins over `--list`
    pub fn mode(&self) -> RequestMode {
        match (&self.host, self.list) {
            (Some(host), _) => RequestMode::Host(host.clone()),
            (None, true) => RequestMode::List,
            (None, false) => RequestMode::Nothing,
        }
    }
}
