//! Property tests for the taxonomy engine's pure functions.

use proptest::prelude::*;

use vhc_core::TaxonomyConfig;
use vhc_taxonomy::builder::{build_section, slug};
use vhc_taxonomy::normalize_query;
use vhc_taxonomy::ranking::fuzzy::subsequence_distance;
use vhc_core::models::{LocationSet, SectionSeed};

proptest! {
    #[test]
    fn normalize_is_idempotent(query in ".{0,80}") {
        let once = normalize_query(&query);
        prop_assert_eq!(normalize_query(&once), once);
    }

    #[test]
    fn normalized_queries_have_no_uppercase_or_double_spaces(query in ".{0,80}") {
        let normalized = normalize_query(&query);
        prop_assert!(!normalized.contains("  "));
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn slug_output_is_id_safe(name in ".{1,60}") {
        let s = slug(&name);
        prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!s.ends_with('_'));
    }

    #[test]
    fn fuzzy_match_is_reflexive(text in "[a-z ]{1,40}") {
        // A string always matches itself, starting at zero.
        let distance = subsequence_distance(&text, &text);
        prop_assert_eq!(distance, Some(text.chars().count() - 1));
    }

    #[test]
    fn fuzzy_distance_never_beats_the_substring_position(
        prefix in "[a-z ]{0,20}",
        needle in "[a-z]{1,10}",
    ) {
        // When the needle occurs literally, the subsequence must match too.
        let text = format!("{prefix}{needle}");
        prop_assert!(subsequence_distance(&needle, &text).is_some());
    }

    #[test]
    fn built_sections_stay_within_bounds(
        names in proptest::collection::vec("[A-Za-z][A-Za-z ]{0,24}", 1..160),
    ) {
        let section = build_section(
            "prop_section",
            &SectionSeed {
                title: "Property".into(),
                locations: LocationSet::None,
                components: names,
            },
            &TaxonomyConfig::default(),
        );
        // Seeded with at least one non-blank name, the floor/ceiling holds.
        if !section.components.is_empty() {
            prop_assert!(section.components.len() >= 30);
            prop_assert!(section.components.len() <= 120);
        }
        // Priorities always land in range.
        for c in &section.components {
            prop_assert!((1..=10).contains(&c.priority));
        }
    }

    #[test]
    fn component_ids_are_unique_within_a_section(
        names in proptest::collection::vec("[A-Za-z][A-Za-z]{2,12}", 1..60),
    ) {
        let section = build_section(
            "prop_section",
            &SectionSeed {
                title: "Property".into(),
                locations: LocationSet::None,
                components: names,
            },
            &TaxonomyConfig::default(),
        );
        let ids: std::collections::HashSet<_> =
            section.components.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(ids.len(), section.components.len());
    }
}
