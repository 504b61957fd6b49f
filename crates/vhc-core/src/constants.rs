/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest assignable priority for components and symptoms.
pub const PRIORITY_MIN: u8 = 1;

/// Highest assignable priority for components and symptoms.
pub const PRIORITY_MAX: u8 = 10;

/// Component list index past which priority decays by one step.
pub const PRIORITY_DECAY_FIRST: usize = 15;

/// Component list index past which priority decays by a second step.
pub const PRIORITY_DECAY_SECOND: usize = 30;
