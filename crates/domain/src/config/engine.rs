use serde::{Deserialize, Serialize};

/// Settings handed to the resolver engine before it answers any query.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Engine-native configuration file, read before anything else.
    #[serde(default)]
    pub config_file: Option<String>,

    #[serde(default)]
    pub options: Vec<EngineOption>,

    #[serde(default)]
    pub resolv_conf: Option<String>,

    #[serde(default)]
    pub hosts_file: Option<String>,

    /// Upstream servers as `ip` or `ip@port`.
    #[serde(default)]
    pub forwarders: Vec<String>,

    /// Trust anchors in presentation format, e.g. a DS or DNSKEY record.
    #[serde(default)]
    pub trust_anchors: Vec<String>,

    #[serde(default)]
    pub trust_anchor_files: Vec<String>,

    /// BIND-style `trusted-keys` files.
    #[serde(default)]
    pub trusted_keys_files: Vec<String>,

    #[serde(default)]
    pub local_zones: Vec<LocalZone>,

    /// Local resource records in presentation format.
    #[serde(default)]
    pub local_data: Vec<String>,

    #[serde(default)]
    pub debug_level: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EngineOption {
    pub name: String,
    pub value: String,
}

impl EngineOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Option name in the engine's `name:` form.
    pub fn engine_name(&self) -> String {
        if self.name.ends_with(':') {
            self.name.clone()
        } else {
            format!("{}:", self.name)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LocalZone {
    pub name: String,

    #[serde(default)]
    pub zone_type: LocalZoneType,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocalZoneType {
    Deny,
    Refuse,
    #[default]
    Static,
    Transparent,
    TypeTransparent,
    Redirect,
    Nodefault,
    Inform,
    InformDeny,
    AlwaysTransparent,
    AlwaysRefuse,
    AlwaysNxdomain,
}

impl LocalZoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deny => "deny",
            Self::Refuse => "refuse",
            Self::Static => "static",
            Self::Transparent => "transparent",
            Self::TypeTransparent => "typetransparent",
            Self::Redirect => "redirect",
            Self::Nodefault => "nodefault",
            Self::Inform => "inform",
            Self::InformDeny => "inform_deny",
            Self::AlwaysTransparent => "always_transparent",
            Self::AlwaysRefuse => "always_refuse",
            Self::AlwaysNxdomain => "always_nxdomain",
        }
    }
}
