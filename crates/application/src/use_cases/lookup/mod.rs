mod addresses;
mod canonical_name;
mod host;
mod mx;
mod reverse;
mod srv;
mod tlsa;
mod txt;

pub use addresses::LookupAddressesUseCase;
pub use canonical_name::LookupCanonicalNameUseCase;
pub use host::LookupHostUseCase;
pub use mx::LookupMxUseCase;
pub use reverse::LookupReverseUseCase;
pub use srv::LookupSrvUseCase;
pub use tlsa::LookupTlsaUseCase;
pub use txt::LookupTxtUseCase;
