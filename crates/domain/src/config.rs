pub mod engine;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod root;

pub use engine::{EngineConfig, EngineOption, LocalZone, LocalZoneType};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use lookup::{DualStackPolicy, LookupConfig};
pub use root::{Config, ConfigOverrides};
