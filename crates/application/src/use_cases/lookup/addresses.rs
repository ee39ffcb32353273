use crate::services::RecordProjector;
use crate::use_cases::resolve::{DispatchQueryUseCase, QueryOutcome};
use ferrous_resolv_domain::{
    AddressFamily, DualStackPolicy, QueryRequest, ResolveError,
};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// A and AAAA lookups for one host, run concurrently and merged.
///
/// Addresses are appended in the order the two answers arrive; within a
/// family they keep the engine's record order. Nothing is sorted.
///
/// Under [`DualStackPolicy::Lenient`] a family that fails contributes
/// nothing and the failure is only logged, so the result may be partial
/// or empty without an error. [`DualStackPolicy::Strict`] reports it.
pub struct LookupAddressesUseCase {
    dispatcher: Arc<DispatchQueryUseCase>,
    policy: DualStackPolicy,
}

impl LookupAddressesUseCase {
    pub fn new(dispatcher: Arc<DispatchQueryUseCase>) -> Self {
        Self {
            dispatcher,
            policy: DualStackPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DualStackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DualStackPolicy {
        self.policy
    }

    pub async fn execute(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let mut ipv4 = self
            .dispatcher
            .dispatch(QueryRequest::new(host, AddressFamily::Ipv4.record_type()))?;
        let mut ipv6 = self
            .dispatcher
            .dispatch(QueryRequest::new(host, AddressFamily::Ipv6.record_type()))?;

        let mut addresses = Vec::new();
        let mut ipv4_error = None;
        let mut ipv6_error = None;
        let mut ipv4_done = false;
        let mut ipv6_done = false;

        while !(ipv4_done && ipv6_done) {
            tokio::select! {
                received = &mut ipv4, if !ipv4_done => {
                    ipv4_done = true;
                    ipv4_error = collect(host, AddressFamily::Ipv4, received, &mut addresses);
                }
                received = &mut ipv6, if !ipv6_done => {
                    ipv6_done = true;
                    ipv6_error = collect(host, AddressFamily::Ipv6, received, &mut addresses);
                }
            }
        }

        debug!(
            host = %host,
            addresses = addresses.len(),
            policy = self.policy.as_str(),
            "Dual-stack lookup complete"
        );

        match (self.policy, ipv4_error, ipv6_error) {
            (DualStackPolicy::Lenient, _, _) | (DualStackPolicy::Strict, None, None) => {
                Ok(addresses)
            }
            (DualStackPolicy::Strict, Some(ipv4), Some(ipv6)) => {
                Err(ResolveError::DualStackFailed {
                    ipv4: Box::new(ipv4),
                    ipv6: Box::new(ipv6),
                })
            }
            (DualStackPolicy::Strict, Some(source), None) => Err(ResolveError::PartialLookup {
                family: AddressFamily::Ipv4,
                source: Box::new(source),
                addresses,
            }),
            (DualStackPolicy::Strict, None, Some(source)) => Err(ResolveError::PartialLookup {
                family: AddressFamily::Ipv6,
                source: Box::new(source),
                addresses,
            }),
        }
    }
}

/// Appends one family's addresses, or returns why it has none.
fn collect(
    host: &str,
    family: AddressFamily,
    received: Result<QueryOutcome, oneshot::error::RecvError>,
    addresses: &mut Vec<IpAddr>,
) -> Option<ResolveError> {
    let projected = received
        .map_err(|_| ResolveError::Dispatch(format!("{} completion was lost", family)))
        .and_then(|outcome| outcome)
        .and_then(|answer| RecordProjector::addresses(&answer));

    match projected {
        Ok(found) => {
            addresses.extend(found);
            None
        }
        Err(e) => {
            warn!(host = %host, family = %family, error = %e, "Address family lookup failed");
            Some(e)
        }
    }
}
