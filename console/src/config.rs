//! Configuration loading for the console.
//!
//! Uses figment to layer defaults, an optional TOML file, environment
//! variables and command-line flags. The result is resolved once at startup
//! and only ever read afterwards.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://4.251.145.205/jimpe";

/// Seconds each API call may take before it counts as a connection error.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const CONFIG_DIR_NAME: &str = "customer-console";
const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "CUSTOMER_CONSOLE_";

/// Console configuration.
///
/// Precedence, highest first:
/// 1. Command-line flags ([`Overrides`])
/// 2. `API_URL` (plain, unprefixed)
/// 3. `CUSTOMER_CONSOLE_*` environment variables
/// 4. TOML config file
/// 5. Defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Root address of the customer API.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line. A `None` field leaves the lower layers
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConsoleConfig {
    /// Load configuration with an optional custom config file path, then
    /// apply `overrides` as the final layer.
    ///
    /// A missing file is not an error; its layer is simply empty. Validation
    /// runs once, on the fully merged result.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or validation fails.
    pub fn load_from(config_path: Option<PathBuf>, overrides: &Overrides) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let config: ConsoleConfig = Figment::new()
            .merge(Serialized::defaults(ConsoleConfig::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&["API_URL"]))
            .merge(Serialized::defaults(overrides.clone()))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// # Errors
    ///
    /// Returns an error if the URL is empty or not http(s), or the timeout is 0.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "api_url must not be empty".to_string(),
            });
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::ConfigValidation {
                message: format!("api_url must start with http:// or https://, got {}", self.api_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::ConfigValidation {
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
