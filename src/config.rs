/// Configuration constants for the Foreman API
pub mod api {
    /// Base path of the Foreman REST API
    pub const BASE_PATH: &str = "/api";

    /// Accept header value selecting API v2 (v1 envelopes are still understood)
    pub const ACCEPT: &str = "application/json,version=2";

    /// Status endpoint used as the startup connectivity probe
    pub const STATUS: &str = "status";

    /// Hosts collection
    pub const HOSTS: &str = "hosts";

    /// Hosts requested per page when paginating the host list
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// First page number of the host index
    pub const FIRST_PAGE: u32 = 1;
}

/// Configuration constants for the settings file
pub mod settings {
    /// Environment variable overriding the settings file location
    pub const PATH_ENV_VAR: &str = "FOREMAN_INI_PATH";

    /// Settings file name, looked up next to the executable
    pub const FILE_NAME: &str = "foreman.ini";

    /// Section holding the connection settings
    pub const SECTION: &str = "foreman";

    /// Keys that must be present in the section
    pub const REQUIRED_KEYS: &[&str] = &["base_url", "username", "password"];
}

/// Inventory shape constants
pub mod inventory {
    /// Group receiving hosts without a hostgroup
    pub const UNGROUPED: &str = "ungrouped";

    /// Top-level key reserved for host variables in `--list` output
    pub const META_KEY: &str = "_meta";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable for the log level
    pub const LOG_LEVEL_ENV_VAR: &str = "FOREMAN_INVENTORY_LOG";
}
