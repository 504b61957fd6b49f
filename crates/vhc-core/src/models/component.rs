use serde::{Deserialize, Serialize};

use super::location::LocationSet;

/// Component type resolved by name-pattern matching.
///
/// Each type maps to one symptom group; `DefaultMechanical` is the fallback
/// for anything the cascade cannot classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    WiperBlade,
    WasherJet,
    WiperLinkage,
    WiperMotor,
    Horn,
    LightBulb,
    LightAssembly,
    Bush,
    DropLink,
    BallJoint,
    ShockAbsorber,
    BrakePad,
    BrakeDisc,
    Tyre,
    DefaultMechanical,
}

/// One component within a built section taxonomy.
///
/// Created once at taxonomy-build time from seed data; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Deterministic id: `sectionKey + "_" + slug(name)`.
    pub id: String,
    /// Display name, first-seen casing from the seed list.
    pub name: String,
    /// Resolved component type; selects the symptom group.
    pub component_type: ComponentType,
    /// Resolved locations this component applies to.
    pub locations: LocationSet,
    /// Ranking priority in [1, 10]; decays mildly with list position.
    pub priority: u8,
}
