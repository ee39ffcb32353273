//! Ferrous Resolv Domain Layer
pub mod address_family;
pub mod answer;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use address_family::AddressFamily;
pub use answer::{Answer, AnswerFlags, AnswerParts};
pub use config::{
    Config, ConfigError, ConfigOverrides, DualStackPolicy, EngineConfig, EngineOption,
    LocalZone, LocalZoneType, LogFormat, LoggingConfig, LookupConfig,
};
pub use dns_query::QueryRequest;
pub use dns_record::{DnsClass, MxRecord, RecordType, SrvRecord, TlsaRecord};
pub use errors::ResolveError;
