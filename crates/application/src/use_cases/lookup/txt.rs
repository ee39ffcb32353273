use crate::services::RecordProjector;
use crate::use_cases::resolve::ResolveQueryUseCase;
use ferrous_resolv_domain::{QueryRequest, RecordType, ResolveError};
use std::sync::Arc;

pub struct LookupTxtUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl LookupTxtUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    /// Every character string of every TXT record, in answer order.
    pub fn execute(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        let answer = self
            .resolver
            .execute(&QueryRequest::new(name, RecordType::TXT))?;
        RecordProjector::txt_strings(&answer)
    }
}
