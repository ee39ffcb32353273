use bytes::Bytes;

/// The engine's answer record exactly as it hands it over.
///
/// `data` and `len` are parallel tables: entry `i` is the first `len[i]`
/// octets of `data[i]`. The entry count is `data.len()`; there is no
/// terminator entry.
#[derive(Debug, Clone, Default)]
pub struct RawAnswer {
    pub qname: String,
    pub qtype: u16,
    pub qclass: u16,
    pub data: Vec<Bytes>,
    pub len: Vec<usize>,
    pub canonname: Option<String>,
    pub rcode: i32,
    pub answer_packet: Bytes,
    pub havedata: bool,
    pub nxdomain: bool,
    pub secure: bool,
    pub bogus: bool,
    pub why_bogus: Option<String>,
}

impl RawAnswer {
    pub fn new(qname: impl Into<String>, qtype: u16, qclass: u16) -> Self {
        Self {
            qname: qname.into(),
            qtype,
            qclass,
            ..Default::default()
        }
    }

    /// Appends one rdata entry and marks the answer as carrying data.
    pub fn push_rdata(&mut self, rdata: impl Into<Bytes>) {
        let rdata = rdata.into();
        self.len.push(rdata.len());
        self.data.push(rdata);
        self.havedata = true;
    }

    pub fn entry_count(&self) -> usize {
        self.data.len()
    }
}

/// The validating resolver engine the façade sits on.
///
/// `resolve` blocks until the engine has an answer. A zero code means
/// success; any other code is an engine error and the accompanying
/// `RawAnswer` carries nothing meaningful. Implementations must allow
/// concurrent `resolve` calls once configuration is complete.
pub trait ResolverEngine: Send + Sync {
    fn resolve(&self, name: &str, record_type: u16, class: u16) -> (RawAnswer, i32);

    /// Human-readable text for a nonzero return code.
    fn error_string(&self, code: i32) -> String;
}
