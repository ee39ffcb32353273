use bytes::Bytes;
use ferrous_resolv_application::ports::RawAnswer;
use ferrous_resolv_domain::{DnsClass, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Uncompressed wire form of a presentation name.
pub fn wire_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        if label.is_empty() {
            continue;
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn a(ip: Ipv4Addr) -> Vec<u8> {
    ip.octets().to_vec()
}

pub fn aaaa(ip: Ipv6Addr) -> Vec<u8> {
    ip.octets().to_vec()
}

pub fn ptr(name: &str) -> Vec<u8> {
    wire_name(name)
}

pub fn mx(preference: u16, exchange: &str) -> Vec<u8> {
    let mut out = preference.to_be_bytes().to_vec();
    out.extend(wire_name(exchange));
    out
}

pub fn srv(priority: u16, weight: u16, port: u16, target: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&priority.to_be_bytes());
    out.extend_from_slice(&weight.to_be_bytes());
    out.extend_from_slice(&port.to_be_bytes());
    out.extend(wire_name(target));
    out
}

pub fn txt(segments: &[&str]) -> Vec<u8> {
    let mut out = Vec::new();
    for segment in segments {
        out.push(segment.len() as u8);
        out.extend_from_slice(segment.as_bytes());
    }
    out
}

pub fn tlsa(usage: u8, selector: u8, matching: u8, data: &[u8]) -> Vec<u8> {
    let mut out = vec![usage, selector, matching];
    out.extend_from_slice(data);
    out
}

/// Builds a successful [`RawAnswer`] for tests.
pub struct RawAnswerBuilder {
    raw: RawAnswer,
}

impl RawAnswerBuilder {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            raw: RawAnswer::new(name, record_type.to_u16(), DnsClass::IN.to_u16()),
        }
    }

    pub fn rdata(mut self, rdata: Vec<u8>) -> Self {
        self.raw.push_rdata(rdata);
        self
    }

    pub fn canonname(mut self, name: &str) -> Self {
        self.raw.canonname = Some(name.to_string());
        self
    }

    pub fn secure(mut self) -> Self {
        self.raw.secure = true;
        self
    }

    pub fn bogus(mut self, why: &str) -> Self {
        self.raw.bogus = true;
        self.raw.why_bogus = Some(why.to_string());
        self
    }

    pub fn packet(mut self, packet: &[u8]) -> Self {
        self.raw.answer_packet = Bytes::copy_from_slice(packet);
        self
    }

    pub fn build(self) -> RawAnswer {
        self.raw
    }
}
