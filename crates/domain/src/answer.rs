use super::RecordType;
use bytes::Bytes;

/// DNSSEC and presence flags reported by the engine for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerFlags {
    pub have_data: bool,
    pub nx_domain: bool,
    pub secure: bool,
    pub bogus: bool,
}

/// Everything needed to assemble an [`Answer`].
#[derive(Debug, Clone, Default)]
pub struct AnswerParts {
    pub qname: String,
    pub qtype: u16,
    pub qclass: u16,
    pub raw_data: Vec<Bytes>,
    pub canonical_name: String,
    pub rcode: i32,
    pub answer_packet: Bytes,
    pub flags: AnswerFlags,
    pub why_bogus: Option<String>,
}

/// The outcome of one successful engine resolve.
///
/// An `Answer` is built once from the engine's raw answer and never changes
/// afterwards. `raw_data` keeps the engine's record order; several lookup
/// helpers rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    qname: String,
    qtype: u16,
    qclass: u16,
    raw_data: Vec<Bytes>,
    canonical_name: String,
    rcode: i32,
    answer_packet: Bytes,
    flags: AnswerFlags,
    why_bogus: Option<String>,
}

impl From<AnswerParts> for Answer {
    fn from(parts: AnswerParts) -> Self {
        Self {
            qname: parts.qname,
            qtype: parts.qtype,
            qclass: parts.qclass,
            raw_data: parts.raw_data,
            canonical_name: parts.canonical_name,
            rcode: parts.rcode,
            answer_packet: parts.answer_packet,
            flags: parts.flags,
            why_bogus: parts.why_bogus,
        }
    }
}

impl Answer {
    /// The name as asked.
    pub fn qname(&self) -> &str {
        &self.qname
    }

    pub fn qtype(&self) -> u16 {
        self.qtype
    }

    pub fn qclass(&self) -> u16 {
        self.qclass
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    /// Rdata of each returned record, in engine order.
    pub fn raw_data(&self) -> &[Bytes] {
        &self.raw_data
    }

    /// Target of the CNAME chain, or an empty string if none was followed.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Response code; meaningful when there is no data.
    pub fn rcode(&self) -> i32 {
        self.rcode
    }

    /// The full wire-format answer, untouched.
    pub fn answer_packet(&self) -> &Bytes {
        &self.answer_packet
    }

    pub fn flags(&self) -> AnswerFlags {
        self.flags
    }

    pub fn have_data(&self) -> bool {
        self.flags.have_data
    }

    pub fn nx_domain(&self) -> bool {
        self.flags.nx_domain
    }

    pub fn secure(&self) -> bool {
        self.flags.secure
    }

    pub fn bogus(&self) -> bool {
        self.flags.bogus
    }

    /// Reason for a validation failure. Only set on bogus answers.
    pub fn why_bogus(&self) -> Option<&str> {
        self.why_bogus.as_deref()
    }
}
