use ferrous_resolv_application::ports::ResolverEngine;
use ferrous_resolv_application::use_cases::{
    DispatchQueryUseCase, LookupAddressesUseCase, LookupCanonicalNameUseCase, LookupHostUseCase,
    LookupMxUseCase, LookupReverseUseCase, LookupSrvUseCase, LookupTlsaUseCase, LookupTxtUseCase,
    QueryOutcome, ResolveQueryUseCase,
};
use ferrous_resolv_domain::{
    Answer, DualStackPolicy, LookupConfig, MxRecord, QueryRequest, ResolveError, SrvRecord,
    TlsaRecord,
};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::oneshot;

/// A configured engine and every lookup built on it.
///
/// Cheap to clone; clones share the engine.
#[derive(Clone)]
pub struct Resolver {
    engine: Arc<dyn ResolverEngine>,
    resolve: Arc<ResolveQueryUseCase>,
    dispatch: Arc<DispatchQueryUseCase>,
    addresses: Arc<LookupAddressesUseCase>,
    host: Arc<LookupHostUseCase>,
    reverse: Arc<LookupReverseUseCase>,
    canonical_name: Arc<LookupCanonicalNameUseCase>,
    mx: Arc<LookupMxUseCase>,
    srv: Arc<LookupSrvUseCase>,
    txt: Arc<LookupTxtUseCase>,
    tlsa: Arc<LookupTlsaUseCase>,
}

impl Resolver {
    pub(super) fn new(engine: Arc<dyn ResolverEngine>, lookup: &LookupConfig) -> Self {
        let resolve = Arc::new(ResolveQueryUseCase::new(Arc::clone(&engine)));
        let dispatch = Arc::new(DispatchQueryUseCase::new(Arc::clone(&resolve)));
        let addresses = Arc::new(
            LookupAddressesUseCase::new(Arc::clone(&dispatch))
                .with_policy(lookup.dual_stack_policy),
        );

        Self {
            host: Arc::new(LookupHostUseCase::new(Arc::clone(&addresses))),
            reverse: Arc::new(LookupReverseUseCase::new(Arc::clone(&resolve))),
            canonical_name: Arc::new(LookupCanonicalNameUseCase::new(Arc::clone(&resolve))),
            mx: Arc::new(LookupMxUseCase::new(Arc::clone(&resolve))),
            srv: Arc::new(LookupSrvUseCase::new(Arc::clone(&resolve))),
            txt: Arc::new(LookupTxtUseCase::new(Arc::clone(&resolve))),
            tlsa: Arc::new(LookupTlsaUseCase::new(Arc::clone(&resolve))),
            engine,
            resolve,
            dispatch,
            addresses,
        }
    }

    pub fn engine(&self) -> &Arc<dyn ResolverEngine> {
        &self.engine
    }

    pub fn dual_stack_policy(&self) -> DualStackPolicy {
        self.addresses.policy()
    }

    /// Blocking resolve. Call from a blocking context, not from async code.
    pub fn resolve(&self, request: &QueryRequest) -> Result<Answer, ResolveError> {
        self.resolve.execute(request)
    }

    /// Starts a resolve on the blocking pool; the outcome arrives on the
    /// receiver.
    pub fn resolve_async(
        &self,
        request: QueryRequest,
    ) -> Result<oneshot::Receiver<QueryOutcome>, ResolveError> {
        self.dispatch.dispatch(request)
    }

    /// Starts a resolve on the blocking pool and calls `callback` with
    /// `context` and the outcome.
    pub fn resolve_with_callback<C, F>(
        &self,
        request: QueryRequest,
        context: C,
        callback: F,
    ) -> Result<(), ResolveError>
    where
        C: Send + 'static,
        F: FnOnce(C, QueryOutcome) + Send + 'static,
    {
        self.dispatch.dispatch_with_callback(request, context, callback)
    }

    /// IPv4 and IPv6 addresses of `host`, queried concurrently.
    pub async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        self.addresses.execute(host).await
    }

    pub async fn lookup_host(&self, host: &str) -> Result<Vec<String>, ResolveError> {
        self.host.execute(host).await
    }

    pub fn lookup_addr(&self, addr: &str) -> Result<Vec<String>, ResolveError> {
        self.reverse.execute(addr)
    }

    pub fn lookup_cname(&self, host: &str) -> Result<String, ResolveError> {
        self.canonical_name.execute(host)
    }

    pub fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, ResolveError> {
        self.mx.execute(name)
    }

    pub fn lookup_srv(
        &self,
        service: &str,
        proto: &str,
        name: &str,
    ) -> Result<(String, Vec<SrvRecord>), ResolveError> {
        self.srv.execute(service, proto, name)
    }

    pub fn lookup_srv_with_rng(
        &self,
        service: &str,
        proto: &str,
        name: &str,
        rng: &mut fastrand::Rng,
    ) -> Result<(String, Vec<SrvRecord>), ResolveError> {
        self.srv.execute_with_rng(service, proto, name, rng)
    }

    pub fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        self.txt.execute(name)
    }

    pub fn lookup_tlsa(
        &self,
        port: &str,
        proto: &str,
        name: &str,
    ) -> Result<Vec<TlsaRecord>, ResolveError> {
        self.tlsa.execute(port, proto, name)
    }
}
