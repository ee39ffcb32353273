use crate::services::{QueryNames, RecordProjector};
use crate::use_cases::resolve::ResolveQueryUseCase;
use ferrous_resolv_domain::{QueryRequest, RecordType, ResolveError};
use std::sync::Arc;
use tracing::debug;

/// Names pointing back at an address, via its PTR records.
pub struct LookupReverseUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl LookupReverseUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    /// `addr` is a textual IPv4 or IPv6 address. Names come back in answer
    /// order.
    pub fn execute(&self, addr: &str) -> Result<Vec<String>, ResolveError> {
        let reverse_name = QueryNames::reverse_from_str(addr)?;
        debug!(addr = %addr, reverse_name = %reverse_name, "Reverse lookup");

        let answer = self
            .resolver
            .execute(&QueryRequest::new(reverse_name, RecordType::PTR))?;
        RecordProjector::ptr_names(&answer)
    }
}
