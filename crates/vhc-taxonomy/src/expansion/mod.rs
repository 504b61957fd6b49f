//! Suggestion corpus generation.
//!
//! Two phases, both bounded:
//! 1. Generation — a deterministic sweep over pass × component × location
//!    variant × symptom phrase, rotating action phrasings and sentence
//!    templates so later passes surface new wordings of the same facts.
//! 2. Padding — if the corpus is still short, existing entries are re-issued
//!    with trailing clauses until the floor is reached or the cap is hit.

pub mod templates;
pub mod variants;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use vhc_core::config::TaxonomyConfig;
use vhc_core::models::{ComponentType, SectionTaxonomy, SuggestionEntry, SymptomDefinition};

use crate::seed::actions::phrasing_at;
use templates::{render, PADDING_CLAUSES, TEMPLATE_COUNT};
use variants::location_variants;

/// Generate the full suggestion corpus for a built section.
///
/// Deterministic: same section and config produce the same ordered list.
/// A section with no components yields an empty corpus.
pub fn expand_section(
    section: &SectionTaxonomy,
    groups: &HashMap<ComponentType, SymptomDefinition>,
    config: &TaxonomyConfig,
) -> Vec<SuggestionEntry> {
    let mut entries: Vec<SuggestionEntry> = Vec::new();
    let mut seen_keys: HashSet<String> = HashSet::new();
    let mut seen_texts: HashSet<String> = HashSet::new();

    'passes: for pass in 0..config.generation_passes {
        for (ci, component) in section.components.iter().enumerate() {
            let Some(group) = groups
                .get(&component.component_type)
                .or_else(|| groups.get(&ComponentType::DefaultMechanical))
            else {
                continue;
            };

            for (vi, variant) in location_variants(component).iter().enumerate() {
                for (pi, phrase) in group.phrases.iter().enumerate() {
                    let action = group.action_for_phrase(phrase);
                    let action_phrase = phrasing_at(action, pass + ci + pi);
                    let template = (pass + pi + vi) % TEMPLATE_COUNT;

                    let text =
                        render(template, &variant.prefix, &variant.base_name, phrase, action_phrase);
                    let lowered = text.to_lowercase();

                    let location_key =
                        variant.location.map(|t| t.as_key()).unwrap_or("none");
                    let semantic_key = format!(
                        "{}|{}|{}|{}",
                        component.id,
                        location_key,
                        group.id,
                        action.as_key()
                    );

                    // Same fact rendered identically is dropped; the same
                    // fact in a new wording is kept — that is how the corpus
                    // grows across passes.
                    let dedup_key = format!("{semantic_key}|{lowered}");
                    if !seen_keys.insert(dedup_key) || !seen_texts.insert(lowered.clone()) {
                        continue;
                    }

                    entries.push(SuggestionEntry {
                        text,
                        index_text: lowered,
                        section_key: section.key.clone(),
                        component_id: component.id.clone(),
                        component_name: component.name.clone(),
                        component_priority: component.priority,
                        location: variant.location,
                        location_aliases: variant.aliases.clone(),
                        symptom_id: group.id.clone(),
                        symptom_phrase: phrase.clone(),
                        symptom_priority: group.priority,
                        action,
                        severities: group.severities.clone(),
                        semantic_key,
                    });

                    if entries.len() >= config.min_suggestions {
                        break 'passes;
                    }
                }
            }
        }
    }

    if entries.len() < config.min_suggestions && !entries.is_empty() {
        pad_corpus(&mut entries, &mut seen_texts, config);
    }
    entries.truncate(config.min_suggestions);

    debug!(
        section = %section.key,
        entries = entries.len(),
        "expanded suggestion corpus"
    );
    entries
}

/// Pad a short corpus by re-issuing existing entries with trailing clauses,
/// cycling sources within each clause. Bounded by the configured cap so a
/// degenerate seed can never loop forever.
fn pad_corpus(
    entries: &mut Vec<SuggestionEntry>,
    seen_texts: &mut HashSet<String>,
    config: &TaxonomyConfig,
) {
    let base_len = entries.len();
    let mut seen_pad_keys: HashSet<String> = HashSet::new();
    let mut attempts = 0;
    let cap = config.corpus_pad_attempts();

    while entries.len() < config.min_suggestions && attempts < cap {
        let source_index = attempts % base_len;
        let clause_index = (attempts / base_len) % PADDING_CLAUSES.len();
        attempts += 1;

        let source = &entries[source_index];
        let pad_key = format!("{}|note|{}", source.semantic_key, clause_index);
        if !seen_pad_keys.insert(pad_key) {
            continue;
        }

        let text = format!("{} - {}", source.text, PADDING_CLAUSES[clause_index]);
        let lowered = text.to_lowercase();
        if !seen_texts.insert(lowered.clone()) {
            continue;
        }

        let mut padded = source.clone();
        padded.text = text;
        padded.index_text = lowered;
        entries.push(padded);
    }
}
