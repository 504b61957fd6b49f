//! Tiered ranking of a section's suggestion corpus against one query.
//!
//! Tiering is evaluated in priority order, first match wins; entries that
//! match no tier are excluded entirely. Sort order: tier ↑, boost ↓,
//! component priority ↓, symptom priority ↓, distance ↑, corpus index ↑.

pub mod boost;
pub mod fuzzy;

use std::cmp::Ordering;

use vhc_core::models::{MatchTier, RankedSuggestion, SuggestionEntry};

use boost::query_boost;
use fuzzy::subsequence_distance;

/// Rank a corpus against an already-normalized, non-empty query.
pub fn rank_corpus(corpus: &[SuggestionEntry], query: &str) -> Vec<RankedSuggestion> {
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let mut ranked: Vec<RankedSuggestion> = corpus
        .iter()
        .enumerate()
        .filter_map(|(corpus_index, entry)| {
            let (tier, distance) = tier_for_entry(entry, query, &tokens)?;
            Some(RankedSuggestion {
                entry: entry.clone(),
                tier,
                distance,
                boost: query_boost(query, &entry.index_text),
                corpus_index,
            })
        })
        .collect();

    ranked.sort_by(compare);
    ranked
}

/// Evaluate the tier cascade for one entry. `None` excludes the entry.
fn tier_for_entry(
    entry: &SuggestionEntry,
    query: &str,
    tokens: &[&str],
) -> Option<(MatchTier, usize)> {
    let component = entry.component_name.to_lowercase();
    let symptom = entry.symptom_phrase.to_lowercase();
    if tokens
        .iter()
        .any(|t| component.starts_with(t) || symptom.starts_with(t))
    {
        return Some((MatchTier::ComponentOrSymptomPrefix, 0));
    }

    if entry
        .location_aliases
        .iter()
        .any(|alias| tokens.iter().any(|t| alias.starts_with(t)))
    {
        return Some((MatchTier::LocationPrefix, 0));
    }

    // Full-string containment, not token-wise.
    if let Some(index) = entry.index_text.find(query) {
        return Some((MatchTier::Substring, index));
    }

    subsequence_distance(query, &entry.index_text)
        .map(|distance| (MatchTier::FuzzySubsequence, distance))
}

fn compare(a: &RankedSuggestion, b: &RankedSuggestion) -> Ordering {
    a.tier
        .cmp(&b.tier)
        .then_with(|| b.boost.cmp(&a.boost))
        .then_with(|| b.entry.component_priority.cmp(&a.entry.component_priority))
        .then_with(|| b.entry.symptom_priority.cmp(&a.entry.symptom_priority))
        .then_with(|| a.distance.cmp(&b.distance))
        .then_with(|| a.corpus_index.cmp(&b.corpus_index))
}
