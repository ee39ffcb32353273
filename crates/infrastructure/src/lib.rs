//! Ferrous Resolv Infrastructure Layer
pub mod engine;
pub mod logging;
pub mod resolver;
pub mod system;

pub use resolver::{Resolver, ResolverBuilder};
