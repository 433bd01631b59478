//! Connection settings loaded from the foreman.ini file

use ini::{Ini, ParseOption, Properties};
use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings as settings_config;
use crate::error::{ForemanError, Result};

/// The `[foreman]` section
#[derive(Debug, Default)]
struct ForemanSection {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl ForemanSection {
    fn from_properties(props: &Properties) -> Self {
        // Option names are case-insensitive in classic ini files
        let value = |key: &str| {
            props
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(key))
                .map(|(_, value)| value.to_string())
        };
        Self {
            base_url: value("base_url"),
            username: value("username"),
            password: value("password"),
        }
    }
}

/// Resolved connection settings for the Foreman API
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// Parse settings from ini content. `source` is only used in messages.
    ///
    /// Values are taken verbatim: no quote stripping, no backslash escapes.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let file = Ini::load_from_str_opt(content, options).map_err(|e| {
            ForemanError::Config(format!(
                "Could not parse settings file {}: {}",
                source.display(),
                e
            ))
        })?;

        let section = file
            .section(Some(settings_config::SECTION))
            .map(ForemanSection::from_properties)
            .unwrap_or_default();
        Self::from_section(section, source)
    }

    fn from_section(section: ForemanSection, source: &Path) -> Result<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let base_url = present(section.base_url);
        let username = present(section.username);
        let password = present(section.password);

        match (base_url, username, password) {
            (Some(base_url), Some(username), Some(password)) => Ok(Self {
                base_url: base_url.trim_end_matches('/').to_string(),
                username,
                password,
            }),
            (base_url, username, password) => {
                let missing: Vec<&str> = settings_config::REQUIRED_KEYS
                    .iter()
                    .zip([base_url.is_none(), username.is_none(), password.is_none()])
                    .filter_map(|(key, is_missing)| is_missing.then_some(*key))
                    .collect();
                Err(ForemanError::Config(missing_values_message(&missing, source)))
            }
        }
    }
}

/// Locates and reads the settings file
pub struct SettingsResolver {
    path: PathBuf,
}

impl SettingsResolver {
    /// Resolve the settings file path from multiple sources:
    /// 1. `--config` CLI argument
    /// 2. FOREMAN_INI_PATH environment variable
    /// 3. foreman.ini next to the executable
    pub fn new(cli_path: Option<&Path>) -> Self {
        let env_path = std::env::var(settings_config::PATH_ENV_VAR)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self {
            path: Self::select_path(cli_path, env_path),
        }
    }

    /// Create a resolver for a fixed path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn select_path(cli_path: Option<&Path>, env_path: Option<PathBuf>) -> PathBuf {
        if let Some(path) = cli_path {
            debug!("Using settings file from CLI argument: {}", path.display());
            return path.to_path_buf();
        }
        if let Some(path) = env_path {
            debug!(
                "Using settings file from {} environment variable: {}",
                settings_config::PATH_ENV_VAR,
                path.display()
            );
            return path;
        }
        Self::default_path()
    }

    /// foreman.ini in the directory holding the (symlink-resolved) executable
    fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.canonicalize().ok())
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::FILE_NAME)
    }

    /// Path the settings will be read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings. A missing file is reported the same way as missing keys.
    pub fn load(&self) -> Result<Settings> {
        debug!("Reading settings from: {}", self.path.display());

        if !self.path.exists() {
            debug!("Settings file {} does not exist", self.path.display());
            return Settings::from_section(ForemanSection::default(), &self.path);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ForemanError::Config(format!(
                "Failed to read settings file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Settings::parse(&content, &self.path)
    }
}

fn missing_values_message(missing: &[&str], source: &Path) -> String {
    format!(
        "Could not find values for Foreman {} in [{}] of {}.\n\
         base_url, username and password must be specified via the ini file \
         (set {} to use another file).",
        missing.join(", "),
        settings_config::SECTION,
        source.display(),
        settings_config::PATH_ENV_VAR,
    )
}
