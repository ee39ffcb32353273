use super::{DnsClass, RecordType};
use std::sync::Arc;

/// One question for the engine: name, type code and class code.
///
/// Type and class are carried as raw codes so callers can ask for types
/// that [`RecordType`] does not enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub name: Arc<str>,
    pub record_type: u16,
    pub class: u16,
}

impl QueryRequest {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.to_u16(),
            class: DnsClass::IN.to_u16(),
        }
    }

    pub fn with_codes(name: impl Into<Arc<str>>, record_type: u16, class: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    pub fn known_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.record_type)
    }
}
