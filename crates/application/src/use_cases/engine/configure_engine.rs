use crate::ports::EngineConfigurator;
use crate::services::AnswerBuilder;
use ferrous_resolv_domain::{EngineConfig, ResolveError};
use hickory_proto::rr::Record;
use tracing::{debug, info, warn};

/// Pushes an [`EngineConfig`] into the engine before it is shared.
///
/// Steps run in a fixed order: engine config file, options, resolv.conf,
/// hosts file, forwarders, trust anchors, trust anchor files, trusted-keys
/// files, local zones, local data, then the debug level. The first nonzero
/// engine code stops the run.
pub struct ConfigureEngineUseCase<'a> {
    engine: &'a mut dyn EngineConfigurator,
    applied: usize,
}

impl<'a> ConfigureEngineUseCase<'a> {
    pub fn new(engine: &'a mut dyn EngineConfigurator) -> Self {
        Self { engine, applied: 0 }
    }

    /// Returns how many engine calls were made.
    pub fn execute(&mut self, config: &EngineConfig) -> Result<usize, ResolveError> {
        self.applied = 0;

        if let Some(path) = &config.config_file {
            let code = self.engine.config_file(path);
            self.check("config_file", path, code)?;
        }

        for option in &config.options {
            let name = option.engine_name();
            let code = self.engine.set_option(&name, &option.value);
            self.check("option", &name, code)?;
        }

        if let Some(path) = &config.resolv_conf {
            let code = self.engine.resolv_conf(path);
            self.check("resolv_conf", path, code)?;
        }

        if let Some(path) = &config.hosts_file {
            let code = self.engine.hosts(path);
            self.check("hosts", path, code)?;
        }

        for forwarder in &config.forwarders {
            let code = self.engine.set_forwarder(forwarder);
            self.check("forwarder", forwarder, code)?;
        }

        for anchor in &config.trust_anchors {
            let code = self.engine.add_trust_anchor(anchor);
            self.check("trust_anchor", anchor, code)?;
        }

        for path in &config.trust_anchor_files {
            let code = self.engine.add_trust_anchor_file(path);
            self.check("trust_anchor_file", path, code)?;
        }

        for path in &config.trusted_keys_files {
            let code = self.engine.trusted_keys(path);
            self.check("trusted_keys", path, code)?;
        }

        for zone in &config.local_zones {
            let code = self.engine.zone_add(&zone.name, zone.zone_type.as_str());
            self.check("local_zone", &zone.name, code)?;
        }

        for data in &config.local_data {
            let code = self.engine.data_add(data);
            self.check("local_data", data, code)?;
        }

        if let Some(level) = config.debug_level {
            let code = self.engine.debug_level(i32::from(level));
            self.check("debug_level", &level.to_string(), code)?;
        }

        info!(steps = self.applied, "Resolver engine configured");
        Ok(self.applied)
    }

    /// Adds a trust anchor given as a DS or DNSKEY record.
    pub fn add_trust_anchor_record(&mut self, record: &Record) -> Result<(), ResolveError> {
        let anchor = record.to_string();
        let code = self.engine.add_trust_anchor(&anchor);
        self.check("trust_anchor", &anchor, code)
    }

    /// Adds a record to the engine's local data.
    pub fn add_local_record(&mut self, record: &Record) -> Result<(), ResolveError> {
        let data = record.to_string();
        let code = self.engine.data_add(&data);
        self.check("local_data", &data, code)
    }

    pub fn remove_local_record(&mut self, record: &Record) -> Result<(), ResolveError> {
        let data = record.to_string();
        let code = self.engine.data_remove(&data);
        self.check("local_data_remove", &data, code)
    }

    fn check(&mut self, step: &str, argument: &str, code: i32) -> Result<(), ResolveError> {
        self.applied += 1;

        AnswerBuilder::engine_status(&*self.engine, code)
            .inspect(|_| debug!(step = step, argument = %argument, "Engine setting applied"))
            .inspect_err(|e| {
                warn!(step = step, argument = %argument, code, error = %e, "Engine rejected setting")
            })
    }
}
