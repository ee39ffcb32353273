mod builder;
mod facade;

pub use builder::ResolverBuilder;
pub use facade::Resolver;
