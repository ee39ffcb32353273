use super::facade::Resolver;
use ferrous_resolv_application::ports::EngineConfigurator;
use ferrous_resolv_application::use_cases::ConfigureEngineUseCase;
use ferrous_resolv_domain::{Config, EngineConfig, LookupConfig, ResolveError};
use hickory_proto::rr::Record;
use std::sync::Arc;
use tracing::info;

/// Owns the engine while it is being configured.
///
/// Configuration calls need `&mut` access and are only reachable here.
/// [`build`](Self::build) moves the engine behind an `Arc`, after which it
/// is only ever resolved against.
pub struct ResolverBuilder<E> {
    engine: E,
}

impl<E: EngineConfigurator + 'static> ResolverBuilder<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Applies `config` to the engine, stopping at the first rejected step.
    pub fn configure(mut self, config: &EngineConfig) -> Result<Self, ResolveError> {
        ConfigureEngineUseCase::new(&mut self.engine).execute(config)?;
        Ok(self)
    }

    pub fn add_trust_anchor_record(mut self, record: &Record) -> Result<Self, ResolveError> {
        ConfigureEngineUseCase::new(&mut self.engine).add_trust_anchor_record(record)?;
        Ok(self)
    }

    /// Serves `record` from local data instead of resolving it.
    pub fn add_local_record(mut self, record: &Record) -> Result<Self, ResolveError> {
        ConfigureEngineUseCase::new(&mut self.engine).add_local_record(record)?;
        Ok(self)
    }

    pub fn remove_local_record(mut self, record: &Record) -> Result<Self, ResolveError> {
        ConfigureEngineUseCase::new(&mut self.engine).remove_local_record(record)?;
        Ok(self)
    }

    /// Direct access for setup calls not covered by [`EngineConfig`], such
    /// as `zone_remove` or `get_option`.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn build(self, lookup: &LookupConfig) -> Resolver {
        info!(
            dual_stack_policy = lookup.dual_stack_policy.as_str(),
            "Building resolver"
        );
        Resolver::new(Arc::new(self.engine), lookup)
    }

    /// Configures and builds from a full [`Config`].
    pub fn from_config(engine: E, config: &Config) -> Result<Resolver, ResolveError> {
        Ok(Self::new(engine)
            .configure(&config.engine)?
            .build(&config.lookup))
    }
}
