//! End-to-end tests for the suggestion engine over the built-in seed data,
//! exercised at full production limits.

use vhc_core::models::{MatchTier, RemedialAction};
use vhc_core::TaxonomyConfig;
use vhc_taxonomy::{normalize_query, TaxonomyEngine};

#[test]
fn every_built_section_respects_the_component_bounds() {
    let engine = TaxonomyEngine::new();
    for key in engine.section_keys() {
        let section = engine.taxonomy(&key).unwrap();
        assert!(
            (30..=120).contains(&section.components.len()),
            "{key}: {} components",
            section.components.len()
        );
    }
}

#[test]
fn corpus_reaches_the_floor_for_every_section() {
    let engine = TaxonomyEngine::new();
    for key in engine.section_keys() {
        let corpus = engine.suggestions(&key);
        assert_eq!(corpus.len(), 1000, "{key}: {} entries", corpus.len());
    }
}

#[test]
fn no_section_contains_duplicate_suggestion_text() {
    let engine = TaxonomyEngine::new();
    for key in ["underside_front_suspension", "brakes_front_pads_discs", "tyres_nsf"] {
        let corpus = engine.suggestions(key);
        let unique: std::collections::HashSet<&str> =
            corpus.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(unique.len(), corpus.len(), "{key} has duplicate text");
    }
}

#[test]
fn regeneration_is_deterministic_across_engines() {
    let a = TaxonomyEngine::new();
    let b = TaxonomyEngine::new();
    let corpus_a = a.suggestions("underside_rear_suspension");
    let corpus_b = b.suggestions("underside_rear_suspension");
    assert_eq!(*corpus_a, *corpus_b);
}

#[test]
fn human_labels_resolve_like_literal_keys() {
    let engine = TaxonomyEngine::new();
    let by_label = engine.suggestions("Front suspension");
    let by_key = engine.suggestions("underside_front_suspension");
    assert_eq!(*by_label, *by_key);
}

#[test]
fn component_prefix_query_ranks_tier_zero() {
    let engine = TaxonomyEngine::new();
    let ranked = engine.rank("interior_wipers_washers_horn", "wiper");
    assert!(!ranked.is_empty());
    assert_eq!(ranked[0].tier, MatchTier::ComponentOrSymptomPrefix);
    assert!(ranked[0]
        .entry
        .component_name
        .to_lowercase()
        .starts_with("wiper"));
}

#[test]
fn symptom_phrase_prefix_query_ranks_tier_zero() {
    let engine = TaxonomyEngine::new();
    let ranked = engine.rank("brakes_front_pads_discs", "lipped");
    assert!(!ranked.is_empty());
    assert_eq!(ranked[0].tier, MatchTier::ComponentOrSymptomPrefix);
    assert_eq!(ranked[0].entry.symptom_phrase, "lipped");
}

#[test]
fn empty_and_blank_queries_rank_empty() {
    let engine = TaxonomyEngine::new();
    assert!(engine.rank("underside_front_suspension", "").is_empty());
    assert!(engine.rank("underside_front_suspension", "   ").is_empty());
}

#[test]
fn unknown_section_ranks_empty_without_panicking() {
    let engine = TaxonomyEngine::new();
    assert!(engine.rank("not_a_real_section", "front").is_empty());
}

#[test]
fn location_abbreviations_normalize() {
    assert_eq!(normalize_query("nsf brake"), "near side front brake");
}

#[test]
fn front_bush_query_surfaces_front_bushes_first() {
    let engine = TaxonomyEngine::new();
    let ranked = engine.rank("underside_front_suspension", "front bush");
    assert!(!ranked.is_empty());

    let bush_phrases = ["worn", "split", "excess movement", "perished"];
    for result in ranked.iter().take(5) {
        let location = result.entry.location.expect("top results must be located");
        assert!(location.is_front(), "top result located at {location}");
        assert_eq!(result.entry.symptom_id, "bush_wear");
        assert!(bush_phrases.contains(&result.entry.symptom_phrase.as_str()));
        assert_eq!(result.entry.action, RemedialAction::Replace);
    }
}

#[test]
fn rank_order_is_stable_between_calls() {
    let engine = TaxonomyEngine::new();
    let first = engine.rank("brakes_rear_pads_discs", "rear pad");
    let second = engine.rank("brakes_rear_pads_discs", "rear pad");
    assert_eq!(*first, *second);
}

#[test]
fn shrunk_config_still_honors_floors() {
    let engine = TaxonomyEngine::with_config(TaxonomyConfig {
        min_suggestions: 120,
        ..TaxonomyConfig::default()
    });
    let corpus = engine.suggestions("under_bonnet_coolant");
    assert_eq!(corpus.len(), 120);
}
