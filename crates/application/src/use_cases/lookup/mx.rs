use crate::services::RecordProjector;
use crate::use_cases::resolve::ResolveQueryUseCase;
use ferrous_resolv_domain::{MxRecord, QueryRequest, RecordType, ResolveError};
use std::sync::Arc;

pub struct LookupMxUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl LookupMxUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    /// MX records by ascending preference; equal preferences keep answer
    /// order.
    pub fn execute(&self, name: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let answer = self
            .resolver
            .execute(&QueryRequest::new(name, RecordType::MX))?;
        let mut records = RecordProjector::mx_records(&answer)?;
        records.sort_by_key(|mx| mx.preference);
        Ok(records)
    }
}
