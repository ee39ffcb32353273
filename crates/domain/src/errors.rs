use crate::AddressFamily;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Nonzero return code from the resolver engine.
    #[error("{message}")]
    Engine { code: i32, message: String },

    #[error("Cannot construct query name: {0}")]
    NameConstruction(String),

    #[error("Malformed engine answer: {0}")]
    MalformedAnswer(String),

    #[error("Invalid {record_type} record data: {reason}")]
    InvalidRecordData { record_type: String, reason: String },

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Query dispatch failed: {0}")]
    Dispatch(String),

    /// Strict dual-stack policy: one family failed, the other answered.
    #[error("{family} lookup failed: {source}")]
    PartialLookup {
        family: AddressFamily,
        source: Box<ResolveError>,
        addresses: Vec<IpAddr>,
    },

    /// Strict dual-stack policy: both families failed.
    #[error("Address lookup failed for both families (IPv4: {ipv4}; IPv6: {ipv6})")]
    DualStackFailed {
        ipv4: Box<ResolveError>,
        ipv6: Box<ResolveError>,
    },
}

impl ResolveError {
    /// Engine return code, when this error came from the engine.
    pub fn code(&self) -> Option<i32> {
        match self {
            ResolveError::Engine { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn invalid_rdata(record_type: impl ToString, reason: impl ToString) -> Self {
        ResolveError::InvalidRecordData {
            record_type: record_type.to_string(),
            reason: reason.to_string(),
        }
    }
}
