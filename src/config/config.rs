//! Config file handling

use std::path::{Path, PathBuf};

use crate::cli::SecretString;
use crate::errors::SsoError;

/// Default SkyBoT cone-search endpoint
pub const DEFAULT_SKYBOT_URL: &str = "http://vo.imcce.fr/webservices/skybot/skybotconesearch_query.php";

/// Default MPC orbit search endpoint
pub const DEFAULT_MPC_URL: &str = "https://minorplanetcenter.net/web_service/search_orbits";

/// Public account of the MPC web service
pub const DEFAULT_MPC_USERNAME: &str = "mpc_ws";
pub const DEFAULT_MPC_PASSWORD: &str = "mpc!!ws";

/// Request timeout of the cone search, in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 2000.0;

/// Geocenter
pub const DEFAULT_OBSERVER: &str = "500";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SSOQUERY_CONFIG_DIR";

/// SkyBoT section of the config file
#[derive(Debug, Clone)]
pub struct SkybotConfig {
    pub url: String,
    pub timeout: f64,
    pub observer: String,
}

impl Default for SkybotConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SKYBOT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            observer: DEFAULT_OBSERVER.to_string(),
        }
    }
}

/// MPC section of the config file
#[derive(Debug, Clone)]
pub struct MpcConfig {
    pub url: String,
    pub timeout: f64,
    pub username: String,
    pub password: SecretString,
}

impl Default for MpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MPC_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            username: DEFAULT_MPC_USERNAME.to_string(),
            password: SecretString::from(DEFAULT_MPC_PASSWORD),
        }
    }
}

/// ssoquery configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub skybot: SkybotConfig,
    pub mpc: MpcConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            skybot: SkybotConfig::default(),
            mpc: MpcConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, SsoError> {
        Self::load_from_dir(&Self::default_config_dir())
    }

    /// Load `config.toml` from a specific directory
    pub fn load_from_dir(config_dir: &Path) -> Result<Self, SsoError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| SsoError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir.to_path_buf();
        Ok(config)
    }

    /// Parse the TOML text of a config file
    pub fn parse(content: &str) -> Result<Self, SsoError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| SsoError::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(skybot) = toml_value.get("skybot") {
            if let Some(url) = get_str(skybot, "url") {
                config.skybot.url = url;
            }
            if let Some(timeout) = get_timeout(skybot, "skybot")? {
                config.skybot.timeout = timeout;
            }
            if let Some(observer) = get_str(skybot, "observer") {
                config.skybot.observer = observer;
            }
        }

        if let Some(mpc) = toml_value.get("mpc") {
            if let Some(url) = get_str(mpc, "url") {
                config.mpc.url = url;
            }
            if let Some(timeout) = get_timeout(mpc, "mpc")? {
                config.mpc.timeout = timeout;
            }
            if let Some(username) = get_str(mpc, "username") {
                config.mpc.username = username;
            }
            if let Some(password) = get_str(mpc, "password") {
                config.mpc.password = SecretString(password);
            }
        }

        Ok(config)
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("ssoquery"))
            .unwrap_or_else(|| PathBuf::from(".ssoquery"))
    }
}

fn get_str(section: &toml::Value, key: &str) -> Option<String> {
    section.get(key).and_then(|v| v.as_str()).map(String::from)
}

/// Accept integer or float seconds; must be positive
fn get_timeout(section: &toml::Value, name: &str) -> Result<Option<f64>, SsoError> {
    let value = match section.get("timeout") {
        Some(v) => v,
        None => return Ok(None),
    };

    let secs = value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
        .ok_or_else(|| SsoError::Config(format!("{}.timeout must be a number", name)))?;

    if secs <= 0.0 {
        return Err(SsoError::Config(format!("{}.timeout must be positive", name)));
    }

    Ok(Some(secs))
}
