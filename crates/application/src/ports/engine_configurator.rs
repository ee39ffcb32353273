use super::ResolverEngine;

/// Setup calls forwarded verbatim to the engine.
///
/// Every method returns the engine's raw return code. These calls take
/// `&mut self`: they must all complete before the engine is shared with
/// concurrent resolves.
pub trait EngineConfigurator: ResolverEngine {
    fn config_file(&mut self, path: &str) -> i32;

    fn set_option(&mut self, name: &str, value: &str) -> i32;

    fn get_option(&mut self, name: &str) -> (String, i32);

    fn resolv_conf(&mut self, path: &str) -> i32;

    fn hosts(&mut self, path: &str) -> i32;

    fn set_forwarder(&mut self, addr: &str) -> i32;

    fn add_trust_anchor(&mut self, anchor: &str) -> i32;

    fn add_trust_anchor_file(&mut self, path: &str) -> i32;

    fn trusted_keys(&mut self, path: &str) -> i32;

    fn zone_add(&mut self, zone_name: &str, zone_type: &str) -> i32;

    fn zone_remove(&mut self, zone_name: &str) -> i32;

    fn data_add(&mut self, data: &str) -> i32;

    fn data_remove(&mut self, data: &str) -> i32;

    fn debug_level(&mut self, level: i32) -> i32;
}
