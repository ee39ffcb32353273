pub mod engine;
pub mod lookup;
pub mod resolve;

pub use engine::ConfigureEngineUseCase;
pub use lookup::{
    LookupAddressesUseCase, LookupCanonicalNameUseCase, LookupHostUseCase, LookupMxUseCase,
    LookupReverseUseCase, LookupSrvUseCase, LookupTlsaUseCase, LookupTxtUseCase,
};
pub use resolve::{DispatchQueryUseCase, QueryOutcome, ResolveQueryUseCase};
