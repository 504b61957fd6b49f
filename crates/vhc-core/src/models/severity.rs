use serde::{Deserialize, Serialize};

/// Traffic-light severity used on VHC sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory only — no work required.
    Green,
    /// Attention needed soon.
    Amber,
    /// Immediate attention required.
    Red,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Green, Severity::Amber, Severity::Red];
}
