mod engine_configurator;
mod resolver_engine;

pub use engine_configurator::EngineConfigurator;
pub use resolver_engine::{RawAnswer, ResolverEngine};
