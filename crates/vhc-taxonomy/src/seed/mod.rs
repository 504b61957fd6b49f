//! Hand-authored seed vocabulary.
//!
//! This is the engine's only input surface: if taxonomy content needs to
//! change, it is edited here (or supplied as a TOML overlay), never computed.

pub mod actions;
pub mod aliases;
pub mod locations;
pub mod overlay;
pub mod sections;
pub mod symptoms;

use std::collections::HashMap;

use vhc_core::models::SectionSeed;

use overlay::SeedOverlay;

/// Generic suffix words used to pad short component lists.
pub const GENERIC_SUFFIXES: [&str; 12] = [
    "Connector",
    "Wiring",
    "Harness",
    "Mount",
    "Bracket",
    "Fixing",
    "Support",
    "Housing",
    "Seal",
    "Retainer",
    "Clip",
    "Sensor",
];

/// The full authored seed table, in sheet order.
pub struct SeedData {
    sections: Vec<(String, SectionSeed)>,
    index: HashMap<String, usize>,
}

impl SeedData {
    /// Built-in seed data covering the standard VHC sheet.
    pub fn builtin() -> Self {
        Self::from_sections(sections::authored_sections())
    }

    fn from_sections(sections: Vec<(String, SectionSeed)>) -> Self {
        let index = sections
            .iter()
            .enumerate()
            .map(|(i, (key, _))| (key.clone(), i))
            .collect();
        Self { sections, index }
    }

    /// Look up a section seed by resolved key.
    pub fn get(&self, key: &str) -> Option<&SectionSeed> {
        self.index.get(key).map(|&i| &self.sections[i].1)
    }

    /// Iterate sections in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionSeed)> {
        self.sections.iter().map(|(k, s)| (k.as_str(), s))
    }

    /// Number of authored sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Merge a validated overlay: overlay sections replace same-keyed
    /// built-ins; new keys append in overlay order.
    pub fn merged(mut self, overlay: SeedOverlay) -> Self {
        for (key, seed) in overlay.into_sections() {
            match self.index.get(&key) {
                Some(&i) => self.sections[i].1 = seed,
                None => {
                    self.index.insert(key.clone(), self.sections.len());
                    self.sections.push((key, seed));
                }
            }
        }
        self
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::builtin()
    }
}
