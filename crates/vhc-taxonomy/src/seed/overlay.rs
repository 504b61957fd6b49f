//! TOML seed overlays.
//!
//! Lets a workshop add or replace inspection sections without recompiling:
//!
//! ```toml
//! [sections.underside_gearbox]
//! title = "Gearbox and clutch"
//! locations = "none"
//! components = ["Clutch slave cylinder", "Gearbox mount", "Selector cable"]
//! ```
//!
//! Symptom groups, actions, and templates stay code-only; an overlay can only
//! reshape the section table.

use std::collections::BTreeMap;

use serde::Deserialize;

use vhc_core::errors::{TaxonomyError, TaxonomyResult};
use vhc_core::models::{LocationSet, SectionSeed};

#[derive(Debug, Deserialize)]
struct RawOverlay {
    #[serde(default)]
    sections: BTreeMap<String, RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    title: String,
    #[serde(default)]
    locations: Option<String>,
    components: Vec<String>,
}

/// A parsed, validated set of section seeds to merge over the built-ins.
#[derive(Debug, Default)]
pub struct SeedOverlay {
    sections: Vec<(String, SectionSeed)>,
}

impl SeedOverlay {
    /// Parse and validate a TOML overlay document.
    pub fn from_toml(input: &str) -> TaxonomyResult<Self> {
        let raw: RawOverlay =
            toml::from_str(input).map_err(|e| TaxonomyError::OverlayParse {
                reason: e.to_string(),
            })?;

        let mut sections = Vec::with_capacity(raw.sections.len());
        for (key, section) in raw.sections {
            if !is_snake_case_key(&key) {
                return Err(TaxonomyError::InvalidSectionKey { key });
            }
            if section.components.iter().all(|c| c.trim().is_empty()) {
                return Err(TaxonomyError::EmptySection { key });
            }
            let locations = match section.locations.as_deref() {
                None => LocationSet::None,
                Some(name) => LocationSet::from_key(name).ok_or_else(|| {
                    TaxonomyError::UnknownLocationSet {
                        key: key.clone(),
                        value: name.to_string(),
                    }
                })?,
            };
            sections.push((
                key,
                SectionSeed {
                    title: section.title,
                    locations,
                    components: section.components,
                },
            ));
        }
        Ok(Self { sections })
    }

    /// Number of sections in the overlay.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(crate) fn into_sections(self) -> Vec<(String, SectionSeed)> {
        self.sections
    }
}

fn is_snake_case_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
