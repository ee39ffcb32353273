use crate::services::{order_srv_records, QueryNames, RecordProjector};
use crate::use_cases::resolve::ResolveQueryUseCase;
use ferrous_resolv_domain::{QueryRequest, RecordType, ResolveError, SrvRecord};
use std::sync::Arc;
use tracing::debug;

pub struct LookupSrvUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl LookupSrvUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    /// Looks up `_service._proto.name`, or `name` when service and proto are
    /// both empty, and returns the records in RFC 2782 order.
    ///
    /// Returns the queried name alongside the records.
    pub fn execute(
        &self,
        service: &str,
        proto: &str,
        name: &str,
    ) -> Result<(String, Vec<SrvRecord>), ResolveError> {
        self.execute_with_rng(service, proto, name, &mut fastrand::Rng::new())
    }

    /// Same as [`execute`](Self::execute) with the weight shuffle driven by
    /// `rng`.
    pub fn execute_with_rng(
        &self,
        service: &str,
        proto: &str,
        name: &str,
        rng: &mut fastrand::Rng,
    ) -> Result<(String, Vec<SrvRecord>), ResolveError> {
        let target = QueryNames::srv(service, proto, name);
        debug!(target = %target, "SRV lookup");

        let answer = self
            .resolver
            .execute(&QueryRequest::new(target.as_str(), RecordType::SRV))?;
        let records = RecordProjector::srv_records(&answer)?;

        Ok((target, order_srv_records(records, rng)))
    }
}
