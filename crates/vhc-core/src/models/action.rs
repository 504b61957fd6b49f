use serde::{Deserialize, Serialize};
use std::fmt;

/// Remedial actions a suggestion can recommend. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemedialAction {
    Replace,
    Clean,
    Adjust,
    Diagnose,
    Inspect,
    Repair,
    Lubricate,
    Align,
    Secure,
}

impl RemedialAction {
    /// Stable snake_case key, used inside dedup keys.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Clean => "clean",
            Self::Adjust => "adjust",
            Self::Diagnose => "diagnose",
            Self::Inspect => "inspect",
            Self::Repair => "repair",
            Self::Lubricate => "lubricate",
            Self::Align => "align",
            Self::Secure => "secure",
        }
    }
}

impl fmt::Display for RemedialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
