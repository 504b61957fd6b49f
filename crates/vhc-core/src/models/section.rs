use serde::{Deserialize, Serialize};

use super::component::ComponentEntry;
use super::location::LocationSet;

/// Hand-authored seed for one inspection section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSeed {
    /// Display title, e.g. "Front suspension".
    pub title: String,
    /// Default location set; components may override it.
    pub locations: LocationSet,
    /// Authored component names, in sheet order.
    pub components: Vec<String>,
}

/// A built inspection section: between 30 and 120 components, built once per
/// key and memoized for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTaxonomy {
    pub key: String,
    pub title: String,
    pub components: Vec<ComponentEntry>,
}
