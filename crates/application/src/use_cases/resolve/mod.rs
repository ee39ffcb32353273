mod dispatch_query;
mod resolve_query;

pub use dispatch_query::{DispatchQueryUseCase, QueryOutcome};
pub use resolve_query::ResolveQueryUseCase;
