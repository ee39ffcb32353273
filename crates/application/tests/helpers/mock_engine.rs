use ferrous_resolv_application::ports::{EngineConfigurator, RawAnswer, ResolverEngine};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// One recorded configuration call: step name and argument.
pub type ConfigCall = (String, String);

/// In-memory engine with canned answers.
///
/// Unknown questions get an empty NXDOMAIN answer with code 0.
pub struct MockEngine {
    answers: Mutex<HashMap<(String, u16), (RawAnswer, i32)>>,
    delays: Mutex<HashMap<(String, u16), Duration>>,
    panics: Mutex<HashSet<(String, u16)>>,
    queries: Mutex<Vec<(String, u16, u16)>>,
    config_calls: Mutex<Vec<ConfigCall>>,
    config_failures: Mutex<HashMap<String, i32>>,
    options: Mutex<HashMap<String, String>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            panics: Mutex::new(HashSet::new()),
            queries: Mutex::new(Vec::new()),
            config_calls: Mutex::new(Vec::new()),
            config_failures: Mutex::new(HashMap::new()),
            options: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_answer(&self, name: &str, qtype: u16, answer: RawAnswer) {
        self.answers
            .lock()
            .unwrap()
            .insert((name.to_string(), qtype), (answer, 0));
    }

    pub fn set_error(&self, name: &str, qtype: u16, code: i32) {
        self.answers
            .lock()
            .unwrap()
            .insert((name.to_string(), qtype), (RawAnswer::default(), code));
    }

    /// Answer returned together with a nonzero code.
    pub fn set_error_with_answer(&self, name: &str, qtype: u16, answer: RawAnswer, code: i32) {
        self.answers
            .lock()
            .unwrap()
            .insert((name.to_string(), qtype), (answer, code));
    }

    pub fn set_delay(&self, name: &str, qtype: u16, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert((name.to_string(), qtype), delay);
    }

    pub fn set_panic(&self, name: &str, qtype: u16) {
        self.panics
            .lock()
            .unwrap()
            .insert((name.to_string(), qtype));
    }

    /// Makes the named configuration step return `code`.
    pub fn fail_config_step(&self, step: &str, code: i32) {
        self.config_failures
            .lock()
            .unwrap()
            .insert(step.to_string(), code);
    }

    pub fn queries(&self) -> Vec<(String, u16, u16)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn config_calls(&self) -> Vec<ConfigCall> {
        self.config_calls.lock().unwrap().clone()
    }

    pub fn config_steps(&self) -> Vec<String> {
        self.config_calls()
            .into_iter()
            .map(|(step, _)| step)
            .collect()
    }

    fn record(&mut self, step: &str, argument: &str) -> i32 {
        self.config_calls
            .lock()
            .unwrap()
            .push((step.to_string(), argument.to_string()));
        self.config_failures
            .lock()
            .unwrap()
            .get(step)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverEngine for MockEngine {
    fn resolve(&self, name: &str, record_type: u16, class: u16) -> (RawAnswer, i32) {
        self.queries
            .lock()
            .unwrap()
            .push((name.to_string(), record_type, class));

        let key = (name.to_string(), record_type);

        let delay = self.delays.lock().unwrap().get(&key).copied();
        if let Some(delay) = delay {
            thread::sleep(delay);
        }

        let should_panic = self.panics.lock().unwrap().contains(&key);
        if should_panic {
            panic!("engine blew up on {}", name);
        }

        let canned = self.answers.lock().unwrap().get(&key).cloned();
        canned.unwrap_or_else(|| {
            let mut raw = RawAnswer::new(name, record_type, class);
            raw.nxdomain = true;
            raw.rcode = 3;
            (raw, 0)
        })
    }

    fn error_string(&self, code: i32) -> String {
        format!("mock engine error {}", code)
    }
}

impl EngineConfigurator for MockEngine {
    fn config_file(&mut self, path: &str) -> i32 {
        self.record("config_file", path)
    }

    fn set_option(&mut self, name: &str, value: &str) -> i32 {
        let code = self.record("set_option", &format!("{}{}", name, value));
        if code == 0 {
            self.options
                .lock()
                .unwrap()
                .insert(name.to_string(), value.to_string());
        }
        code
    }

    fn get_option(&mut self, name: &str) -> (String, i32) {
        match self.options.lock().unwrap().get(name) {
            Some(value) => (value.clone(), 0),
            None => (String::new(), 1),
        }
    }

    fn resolv_conf(&mut self, path: &str) -> i32 {
        self.record("resolv_conf", path)
    }

    fn hosts(&mut self, path: &str) -> i32 {
        self.record("hosts", path)
    }

    fn set_forwarder(&mut self, addr: &str) -> i32 {
        self.record("set_forwarder", addr)
    }

    fn add_trust_anchor(&mut self, anchor: &str) -> i32 {
        self.record("add_trust_anchor", anchor)
    }

    fn add_trust_anchor_file(&mut self, path: &str) -> i32 {
        self.record("add_trust_anchor_file", path)
    }

    fn trusted_keys(&mut self, path: &str) -> i32 {
        self.record("trusted_keys", path)
    }

    fn zone_add(&mut self, zone_name: &str, zone_type: &str) -> i32 {
        self.record("zone_add", &format!("{} {}", zone_name, zone_type))
    }

    fn zone_remove(&mut self, zone_name: &str) -> i32 {
        self.record("zone_remove", zone_name)
    }

    fn data_add(&mut self, data: &str) -> i32 {
        self.record("data_add", data)
    }

    fn data_remove(&mut self, data: &str) -> i32 {
        self.record("data_remove", data)
    }

    fn debug_level(&mut self, level: i32) -> i32 {
        self.record("debug_level", &level.to_string())
    }
}
