use serde::{Deserialize, Serialize};

use super::action::RemedialAction;
use super::location::LocationTag;
use super::severity::Severity;

/// One generated natural-language fault suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    /// Rendered sentence shown to the user.
    pub text: String,
    /// Lower-cased text used for matching.
    pub index_text: String,
    /// Owning section key (resolved, never an alias).
    pub section_key: String,
    pub component_id: String,
    pub component_name: String,
    pub component_priority: u8,
    /// Resolved location, or `None` for location-less components.
    pub location: Option<LocationTag>,
    /// Lower-cased display aliases for the location, e.g. "near side", "nsf".
    pub location_aliases: Vec<String>,
    pub symptom_id: String,
    pub symptom_phrase: String,
    pub symptom_priority: u8,
    pub action: RemedialAction,
    /// Severities the source symptom group permits.
    pub severities: Vec<Severity>,
    /// Semantic dedup key: `componentId|location|symptomId|actionId`.
    pub semantic_key: String,
}

/// Match strength tier. Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// A query token is a prefix of the component name or symptom phrase.
    ComponentOrSymptomPrefix = 0,
    /// A query token prefixes one of the location aliases.
    LocationPrefix = 1,
    /// The full normalized query occurs as a substring of the text.
    Substring = 2,
    /// Every query character appears in order within the indexed text.
    FuzzySubsequence = 3,
}

/// A suggestion scored against one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSuggestion {
    pub entry: SuggestionEntry,
    pub tier: MatchTier,
    /// Match distance; lower is better within a tier.
    pub distance: usize,
    /// Additive heuristic boost for domain-relevant token overlap.
    pub boost: u32,
    /// Position in the source corpus; final deterministic tie-break.
    pub corpus_index: usize,
}
