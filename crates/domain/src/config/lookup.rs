use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct LookupConfig {
    #[serde(default)]
    pub dual_stack_policy: DualStackPolicy,
}

/// What a dual-stack address lookup does when a family fails.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DualStackPolicy {
    /// Failed families contribute nothing and the lookup still succeeds.
    #[default]
    Lenient,

    /// One failed family is a partial error, two are a hard error.
    Strict,
}

impl DualStackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}
