/// Failures while loading, validating or saving a [`Config`](super::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Path and the underlying I/O error text.
    #[error("Cannot read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Cannot write config file {0}: {1}")]
    FileWrite(String, String),

    #[error("Invalid config TOML: {0}")]
    Parse(String),

    /// A value that parsed but cannot be handed to the engine.
    #[error("Invalid config value: {0}")]
    Validation(String),
}
