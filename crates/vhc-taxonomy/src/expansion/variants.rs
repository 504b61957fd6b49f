//! Location variants: one rendering variant per location display token,
//! with location words stripped from the component's own name so "Front
//! wiper blade" under a Front prefix does not render twice.

use vhc_core::models::{ComponentEntry, LocationTag};

use crate::seed::locations::{display_tokens, match_aliases, STRIPPABLE_LOCATION_WORDS};

/// One way of situating a component for rendering.
#[derive(Debug, Clone)]
pub struct LocationVariant {
    /// Resolved tag, or `None` for location-less components.
    pub location: Option<LocationTag>,
    /// Display prefix prepended to the sentence; empty for `None`.
    pub prefix: String,
    /// Lower-cased match aliases for the tag; empty for `None`.
    pub aliases: Vec<String>,
    /// Component name with leading location words stripped.
    pub base_name: String,
}

/// Expand a component into its location variants.
pub fn location_variants(component: &ComponentEntry) -> Vec<LocationVariant> {
    let tags = component.locations.tags();
    if tags.is_empty() {
        return vec![LocationVariant {
            location: None,
            prefix: String::new(),
            aliases: Vec::new(),
            base_name: component.name.clone(),
        }];
    }

    let base_name = strip_location_words(&component.name);
    let mut variants = Vec::new();
    for &tag in tags {
        let aliases = match_aliases(tag);
        for token in display_tokens(tag) {
            variants.push(LocationVariant {
                location: Some(tag),
                prefix: (*token).to_string(),
                aliases: aliases.clone(),
                base_name: base_name.clone(),
            });
        }
    }
    variants
}

/// Strip leading location words from a component name. A name made entirely
/// of location words is kept as-is rather than stripped to nothing.
pub fn strip_location_words(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let mut start = 0;
    while start < words.len() {
        let lowered = words[start].to_lowercase();
        let bare = lowered.trim_matches('/');
        let stripped = bare.replace('/', "");
        if STRIPPABLE_LOCATION_WORDS.contains(&bare) || STRIPPABLE_LOCATION_WORDS.contains(&stripped.as_str()) {
            start += 1;
        } else {
            break;
        }
    }
    if start == words.len() {
        return name.trim().to_string();
    }
    words[start..].join(" ")
}
