use bytes::Bytes;
use ferrous_resolv_domain::{AnswerFlags, AnswerParts, RecordType};

pub struct AnswerPartsBuilder {
    parts: AnswerParts,
}

impl AnswerPartsBuilder {
    pub fn new(qname: &str, record_type: RecordType) -> Self {
        Self {
            parts: AnswerParts {
                qname: qname.to_string(),
                qtype: record_type.to_u16(),
                qclass: 1,
                ..Default::default()
            },
        }
    }

    pub fn rdata(mut self, rdata: &[u8]) -> Self {
        self.parts.raw_data.push(Bytes::copy_from_slice(rdata));
        self.parts.flags.have_data = true;
        self
    }

    pub fn flags(mut self, flags: AnswerFlags) -> Self {
        self.parts.flags = flags;
        self
    }

    pub fn canonical_name(mut self, name: &str) -> Self {
        self.parts.canonical_name = name.to_string();
        self
    }

    pub fn build(self) -> AnswerParts {
        self.parts
    }
}
