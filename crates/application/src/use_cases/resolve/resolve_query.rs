use crate::ports::ResolverEngine;
use crate::services::AnswerBuilder;
use ferrous_resolv_domain::{Answer, QueryRequest, ResolveError};
use std::sync::Arc;
use tracing::debug;

/// Blocking resolve of one question against the engine.
pub struct ResolveQueryUseCase {
    engine: Arc<dyn ResolverEngine>,
}

impl ResolveQueryUseCase {
    pub fn new(engine: Arc<dyn ResolverEngine>) -> Self {
        Self { engine }
    }

    /// Calls the engine once and marshals its answer. Never retries.
    pub fn execute(&self, request: &QueryRequest) -> Result<Answer, ResolveError> {
        debug!(
            name = %request.name,
            qtype = request.record_type,
            qclass = request.class,
            "Resolving"
        );

        let (raw, code) =
            self.engine
                .resolve(&request.name, request.record_type, request.class);

        let result = AnswerBuilder::build(self.engine.as_ref(), raw, code);

        if let Err(e) = &result {
            debug!(name = %request.name, error = %e, "Resolve failed");
        }

        result
    }

    pub fn engine(&self) -> &Arc<dyn ResolverEngine> {
        &self.engine
    }
}
