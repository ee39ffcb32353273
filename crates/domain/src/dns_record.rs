mod class;
mod record_type;
mod records;

pub use class::DnsClass;
pub use record_type::RecordType;
pub use records::{MxRecord, SrvRecord, TlsaRecord};
