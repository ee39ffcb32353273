use ferrous_resolv_application::ports::{EngineConfigurator, RawAnswer, ResolverEngine};
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Mutex;

/// Engine answering from `local_data` entries it was configured with.
///
/// Understands `<name> A <ipv4>`, `<name> AAAA <ipv6>` and
/// `<name> MX <pref> <exchange>`; anything else is rejected with code -3.
#[derive(Default)]
pub struct StaticEngine {
    records: HashMap<(String, u16), Vec<Vec<u8>>>,
    forwarders: Vec<String>,
    failing: HashMap<(String, u16), i32>,
    resolved: Mutex<Vec<(String, u16)>>,
}

impl StaticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, name: &str, qtype: u16, code: i32) {
        self.failing.insert((name.to_string(), qtype), code);
    }

    pub fn forwarders(&self) -> &[String] {
        &self.forwarders
    }

    pub fn resolved(&self) -> Vec<(String, u16)> {
        self.resolved.lock().unwrap().clone()
    }

    fn parse(data: &str) -> Option<(String, u16, Vec<u8>)> {
        // TTL and class are optional, as in the engine's local-data syntax.
        let mut fields: Vec<&str> = data.split_whitespace().collect();
        if fields.len() > 1 && fields[1].parse::<u32>().is_ok() {
            fields.remove(1);
        }
        if fields.len() > 1 && fields[1] == "IN" {
            fields.remove(1);
        }
        match fields.as_slice() {
            [name, "A", ip] => {
                let ip: Ipv4Addr = ip.parse().ok()?;
                Some((name.to_string(), 1, ip.octets().to_vec()))
            }
            [name, "AAAA", ip] => {
                let ip: Ipv6Addr = ip.parse().ok()?;
                Some((name.to_string(), 28, ip.octets().to_vec()))
            }
            [name, "MX", pref, exchange] => {
                let pref: u16 = pref.parse().ok()?;
                let mut rdata = pref.to_be_bytes().to_vec();
                for label in exchange.trim_end_matches('.').split('.') {
                    rdata.push(label.len() as u8);
                    rdata.extend_from_slice(label.as_bytes());
                }
                rdata.push(0);
                Some((name.to_string(), 15, rdata))
            }
            _ => None,
        }
    }
}

impl ResolverEngine for StaticEngine {
    fn resolve(&self, name: &str, record_type: u16, class: u16) -> (RawAnswer, i32) {
        self.resolved
            .lock()
            .unwrap()
            .push((name.to_string(), record_type));

        let key = (name.to_string(), record_type);
        if let Some(code) = self.failing.get(&key) {
            return (RawAnswer::default(), *code);
        }

        let mut raw = RawAnswer::new(name, record_type, class);
        match self.records.get(&key) {
            Some(entries) => {
                for rdata in entries {
                    raw.push_rdata(rdata.clone());
                }
            }
            None => raw.nxdomain = true,
        }
        (raw, 0)
    }

    fn error_string(&self, code: i32) -> String {
        match code {
            -3 => "syntax error".to_string(),
            -4 => "server failure".to_string(),
            _ => format!("error {}", code),
        }
    }
}

impl EngineConfigurator for StaticEngine {
    fn config_file(&mut self, _path: &str) -> i32 {
        0
    }

    fn set_option(&mut self, _name: &str, _value: &str) -> i32 {
        0
    }

    fn get_option(&mut self, _name: &str) -> (String, i32) {
        (String::new(), -3)
    }

    fn resolv_conf(&mut self, _path: &str) -> i32 {
        0
    }

    fn hosts(&mut self, _path: &str) -> i32 {
        0
    }

    fn set_forwarder(&mut self, addr: &str) -> i32 {
        self.forwarders.push(addr.to_string());
        0
    }

    fn add_trust_anchor(&mut self, _anchor: &str) -> i32 {
        0
    }

    fn add_trust_anchor_file(&mut self, _path: &str) -> i32 {
        0
    }

    fn trusted_keys(&mut self, _path: &str) -> i32 {
        0
    }

    fn zone_add(&mut self, _zone_name: &str, _zone_type: &str) -> i32 {
        0
    }

    fn zone_remove(&mut self, _zone_name: &str) -> i32 {
        0
    }

    fn data_add(&mut self, data: &str) -> i32 {
        match Self::parse(data) {
            Some((name, qtype, rdata)) => {
                self.records.entry((name, qtype)).or_default().push(rdata);
                0
            }
            None => -3,
        }
    }

    fn data_remove(&mut self, data: &str) -> i32 {
        match Self::parse(data) {
            Some((name, qtype, rdata)) => {
                if let Some(entries) = self.records.get_mut(&(name, qtype)) {
                    entries.retain(|existing| *existing != rdata);
                }
                0
            }
            None => -3,
        }
    }

    fn debug_level(&mut self, _level: i32) -> i32 {
        0
    }
}
