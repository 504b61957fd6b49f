//! Taxonomy builder: seed section → bounded, resolved component list.

use tracing::debug;

use vhc_core::config::TaxonomyConfig;
use vhc_core::constants::{
    PRIORITY_DECAY_FIRST, PRIORITY_DECAY_SECOND, PRIORITY_MAX, PRIORITY_MIN,
};
use vhc_core::models::{ComponentEntry, SectionSeed, SectionTaxonomy};

use crate::resolve;
use crate::seed::symptoms::base_priority;
use crate::seed::GENERIC_SUFFIXES;

/// Build one section taxonomy from its seed.
///
/// The component list is deduplicated case-insensitively (first-seen casing
/// wins), padded with synthetic filler names up to the configured floor, and
/// truncated at the ceiling. A section seeded with zero components builds
/// empty rather than erroring.
pub fn build_section(key: &str, seed: &SectionSeed, config: &TaxonomyConfig) -> SectionTaxonomy {
    let mut names = dedupe_case_insensitive(&seed.components);

    if !names.is_empty() && names.len() < config.min_components {
        pad_with_suffixes(&mut names, config.min_components, config.component_pad_attempts);
    }
    names.truncate(config.max_components);

    let components = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let component_type = resolve::component_type(name, key);
            ComponentEntry {
                id: format!("{key}_{}", slug(name)),
                name: name.clone(),
                component_type,
                locations: resolve::location_set(key, name, seed.locations),
                priority: positional_priority(base_priority(component_type), i),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        section = key,
        seeded = seed.components.len(),
        built = components.len(),
        "built section taxonomy"
    );

    SectionTaxonomy {
        key: key.to_string(),
        title: seed.title.clone(),
        components,
    }
}

/// Later-listed components receive a mildly decayed priority.
fn positional_priority(base: u8, index: usize) -> u8 {
    let mut priority = base as i8;
    if index > PRIORITY_DECAY_FIRST {
        priority -= 1;
    }
    if index > PRIORITY_DECAY_SECOND {
        priority -= 1;
    }
    priority.clamp(PRIORITY_MIN as i8, PRIORITY_MAX as i8) as u8
}

fn dedupe_case_insensitive(names: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_lowercase();
        if !seen.contains(&lower) {
            seen.push(lower);
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Extend a short list with "existing name + generic suffix" fillers,
/// cycling names within each suffix, re-deduplicating as it goes. The
/// attempt cap is a safety valve against degenerate seed lists.
fn pad_with_suffixes(names: &mut Vec<String>, floor: usize, attempt_cap: usize) {
    let mut seen: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    let mut attempts = 0;

    // Cycles over the growing list, so even a single-name seed can compound
    // its way up to the floor.
    while names.len() < floor && attempts < attempt_cap {
        let name = names[attempts % names.len()].clone();
        let suffix = GENERIC_SUFFIXES[attempts % GENERIC_SUFFIXES.len()];
        attempts += 1;

        let candidate = format!("{name} {suffix}");
        let lower = candidate.to_lowercase();
        if !seen.contains(&lower) {
            seen.push(lower);
            names.push(candidate);
        }
    }
}

/// Lower-case slug for deterministic component ids.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_underscore = true;
    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_underscore = false;
        } else if !last_underscore {
            out.push('_');
            last_underscore = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
