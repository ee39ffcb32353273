use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::engine::EngineConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::{DualStackPolicy, LookupConfig};

const LOCAL_CONFIG_PATH: &str = "ferrous-resolv.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-resolv/config.toml";

/// Main configuration structure for Ferrous Resolv
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Engine setup applied before the first query
    #[serde(default)]
    pub engine: EngineConfig,

    /// Behaviour of the lookup helpers
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-resolv.toml in current directory
    /// 3. /etc/ferrous-resolv/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(path) = overrides.resolv_conf {
            self.engine.resolv_conf = Some(path);
        }
        if let Some(path) = overrides.hosts_file {
            self.engine.hosts_file = Some(path);
        }
        if let Some(policy) = overrides.dual_stack_policy {
            self.lookup.dual_stack_policy = policy;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for forwarder in &self.engine.forwarders {
            validate_forwarder(forwarder)?;
        }

        for option in &self.engine.options {
            if option.name.trim_end_matches(':').is_empty() {
                return Err(ConfigError::Validation(
                    "Engine option name cannot be empty".to_string(),
                ));
            }
        }

        for zone in &self.engine.local_zones {
            if zone.name.is_empty() {
                return Err(ConfigError::Validation(
                    "Local zone name cannot be empty".to_string(),
                ));
            }
        }

        if self
            .engine
            .trust_anchors
            .iter()
            .chain(&self.engine.local_data)
            .any(|entry| entry.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "Trust anchors and local data entries cannot be empty".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// `ip` or `ip@port`, the form the engine takes for forwarders.
fn validate_forwarder(forwarder: &str) -> Result<(), ConfigError> {
    let (addr, port) = match forwarder.split_once('@') {
        Some((addr, port)) => (addr, Some(port)),
        None => (forwarder, None),
    };

    addr.parse::<IpAddr>().map_err(|_| {
        ConfigError::Validation(format!("Invalid forwarder address '{}'", forwarder))
    })?;

    if let Some(port) = port {
        match port.parse::<u16>() {
            Ok(p) if p != 0 => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "Invalid forwarder port in '{}'",
                    forwarder
                )))
            }
        }
    }

    Ok(())
}

/// Programmatic overrides layered on top of the loaded file
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub resolv_conf: Option<String>,
    pub hosts_file: Option<String>,
    pub dual_stack_policy: Option<DualStackPolicy>,
    pub log_level: Option<String>,
}
