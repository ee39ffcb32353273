use crate::use_cases::resolve::ResolveQueryUseCase;
use ferrous_resolv_domain::{QueryRequest, RecordType, ResolveError};
use std::sync::Arc;

/// Canonical name of a host, as the engine reports it for an A query.
///
/// There is no AAAA fallback: a host with only IPv6 addresses still gets
/// whatever canonical name the A answer carries, possibly empty.
pub struct LookupCanonicalNameUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl LookupCanonicalNameUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, host: &str) -> Result<String, ResolveError> {
        let answer = self
            .resolver
            .execute(&QueryRequest::new(host, RecordType::A))?;
        Ok(answer.canonical_name().to_string())
    }
}
