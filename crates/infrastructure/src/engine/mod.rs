#[cfg(feature = "libunbound")]
mod ffi;
#[cfg(feature = "libunbound")]
mod unbound;

#[cfg(feature = "libunbound")]
pub use unbound::UnboundEngine;
