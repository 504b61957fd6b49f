use serde::{Deserialize, Serialize};

/// Default values for [`TaxonomyConfig`].
///
/// The caps are safety valves against degenerate seed data, not business
/// tunables; they are named here so tests can shrink them deliberately.
pub mod defaults {
    /// Minimum component count per built section (padded up to this).
    pub const MIN_COMPONENTS_PER_SECTION: usize = 30;
    /// Maximum component count per built section (truncated down to this).
    pub const MAX_COMPONENTS_PER_SECTION: usize = 120;
    /// Iteration cap while padding a short component list.
    pub const COMPONENT_PAD_ATTEMPTS: usize = 200;
    /// Minimum suggestion corpus size per section.
    pub const MIN_SUGGESTIONS_PER_SECTION: usize = 1000;
    /// Number of generation passes over the component/symptom cross product.
    pub const GENERATION_PASSES: usize = 12;
    /// Corpus padding cap, as a multiple of the corpus minimum.
    pub const CORPUS_PAD_ATTEMPT_FACTOR: usize = 10;
}

/// Taxonomy engine configuration.
///
/// `default()` reproduces the production limits; tests shrink these to build
/// small corpora quickly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Floor for built component lists; short seed lists are padded up to it.
    pub min_components: usize,
    /// Ceiling for built component lists; longer lists are truncated.
    pub max_components: usize,
    /// Iteration cap while padding a short component list.
    pub component_pad_attempts: usize,
    /// Floor for a section's generated suggestion corpus.
    pub min_suggestions: usize,
    /// Generation passes over the component × symptom cross product.
    pub generation_passes: usize,
    /// Corpus padding cap, as a multiple of `min_suggestions`.
    pub corpus_pad_attempt_factor: usize,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            min_components: defaults::MIN_COMPONENTS_PER_SECTION,
            max_components: defaults::MAX_COMPONENTS_PER_SECTION,
            component_pad_attempts: defaults::COMPONENT_PAD_ATTEMPTS,
            min_suggestions: defaults::MIN_SUGGESTIONS_PER_SECTION,
            generation_passes: defaults::GENERATION_PASSES,
            corpus_pad_attempt_factor: defaults::CORPUS_PAD_ATTEMPT_FACTOR,
        }
    }
}

impl TaxonomyConfig {
    /// Hard cap on corpus padding iterations.
    pub fn corpus_pad_attempts(&self) -> usize {
        self.min_suggestions.saturating_mul(self.corpus_pad_attempt_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_named_constants() {
        let config = TaxonomyConfig::default();
        assert_eq!(config.min_components, 30);
        assert_eq!(config.max_components, 120);
        assert_eq!(config.min_suggestions, 1000);
        assert_eq!(config.generation_passes, 12);
        assert_eq!(config.corpus_pad_attempts(), 10_000);
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: TaxonomyConfig = serde_json::from_str(r#"{"min_suggestions": 50}"#).unwrap();
        assert_eq!(config.min_suggestions, 50);
        assert_eq!(config.min_components, 30);
    }
}
