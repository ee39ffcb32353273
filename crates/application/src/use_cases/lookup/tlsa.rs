use crate::services::{QueryNames, RecordProjector};
use crate::use_cases::resolve::ResolveQueryUseCase;
use ferrous_resolv_domain::{QueryRequest, RecordType, ResolveError, TlsaRecord};
use std::sync::Arc;

pub struct LookupTlsaUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl LookupTlsaUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    /// TLSA records for `_port._proto.name`, in answer order.
    ///
    /// Fails with [`ResolveError::NameConstruction`] before any query when
    /// the name cannot be built.
    pub fn execute(
        &self,
        port: &str,
        proto: &str,
        name: &str,
    ) -> Result<Vec<TlsaRecord>, ResolveError> {
        let target = QueryNames::tlsa(port, proto, name)?;
        let answer = self
            .resolver
            .execute(&QueryRequest::new(target, RecordType::TLSA))?;
        RecordProjector::tlsa_records(&answer)
    }
}
