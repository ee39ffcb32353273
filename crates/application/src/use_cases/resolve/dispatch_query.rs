use super::ResolveQueryUseCase;
use ferrous_resolv_domain::{Answer, QueryRequest, ResolveError};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, error, warn};

/// What a dispatched query completes with.
pub type QueryOutcome = Result<Answer, ResolveError>;

/// Runs resolves on tokio's blocking pool and reports each outcome once.
///
/// A dispatched query cannot be cancelled. Dropping the receiver only
/// discards the outcome; the engine call still runs to completion.
pub struct DispatchQueryUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl DispatchQueryUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    /// Resolves `request` off the calling task and hands the outcome to
    /// `callback` together with `context`.
    ///
    /// The only synchronous error is a missing tokio runtime, in which case
    /// the callback is dropped without being called. Otherwise the callback
    /// runs exactly once, on the blocking thread, also when the resolve
    /// fails or panics. If the runtime is shutting down and discards the
    /// task, the callback runs on the calling thread with a dispatch error.
    pub fn dispatch_with_callback<C, F>(
        &self,
        request: QueryRequest,
        context: C,
        callback: F,
    ) -> Result<(), ResolveError>
    where
        C: Send + 'static,
        F: FnOnce(C, QueryOutcome) + Send + 'static,
    {
        let handle = Handle::try_current()
            .map_err(|e| ResolveError::Dispatch(format!("no tokio runtime: {}", e)))?;

        let resolver = Arc::clone(&self.resolver);
        let completion = Completion::new(context, callback);
        handle.spawn_blocking(move || {
            let outcome = resolve_guarded(&resolver, &request);
            completion.complete(outcome);
        });

        Ok(())
    }

    /// Resolves `request` off the calling task; the outcome arrives on the
    /// returned receiver, which belongs to this call alone.
    pub fn dispatch(
        &self,
        request: QueryRequest,
    ) -> Result<oneshot::Receiver<QueryOutcome>, ResolveError> {
        let (tx, rx) = oneshot::channel();

        self.dispatch_with_callback(request, tx, |tx, outcome| {
            if tx.send(outcome).is_err() {
                debug!("Query outcome dropped: receiver gone");
            }
        })?;

        Ok(rx)
    }

    /// Dispatches and waits for the outcome.
    pub async fn resolve(&self, request: QueryRequest) -> QueryOutcome {
        let rx = self.dispatch(request)?;
        rx.await
            .map_err(|_| ResolveError::Dispatch("query completion was lost".to_string()))?
    }
}

/// Hands the outcome to the callback exactly once. Dropped unfired, it
/// reports that the task never ran.
struct Completion<C, F>
where
    F: FnOnce(C, QueryOutcome),
{
    pending: Option<(C, F)>,
}

impl<C, F> Completion<C, F>
where
    F: FnOnce(C, QueryOutcome),
{
    fn new(context: C, callback: F) -> Self {
        Self {
            pending: Some((context, callback)),
        }
    }

    fn complete(mut self, outcome: QueryOutcome) {
        if let Some((context, callback)) = self.pending.take() {
            callback(context, outcome);
        }
    }
}

impl<C, F> Drop for Completion<C, F>
where
    F: FnOnce(C, QueryOutcome),
{
    fn drop(&mut self) {
        if let Some((context, callback)) = self.pending.take() {
            warn!("Dispatched query dropped before running");
            callback(
                context,
                Err(ResolveError::Dispatch(
                    "task dropped before running".to_string(),
                )),
            );
        }
    }
}

fn resolve_guarded(resolver: &ResolveQueryUseCase, request: &QueryRequest) -> QueryOutcome {
    catch_unwind(AssertUnwindSafe(|| resolver.execute(request))).unwrap_or_else(|payload| {
        let reason = panic_reason(payload.as_ref());
        error!(name = %request.name, qtype = request.record_type, reason = %reason, "Resolve panicked");
        Err(ResolveError::Dispatch(format!("resolve panicked: {}", reason)))
    })
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
