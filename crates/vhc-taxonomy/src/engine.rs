//! TaxonomyEngine: owns the seed data and the three memoization caches.
//!
//! Section taxonomies are built eagerly at construction; suggestion corpora
//! and rank results are computed lazily per key and cached for the engine's
//! lifetime. Everything is a pure function of the seed data, so a concurrent
//! duplicate computation of the same cache key is wasteful but harmless.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use vhc_core::config::TaxonomyConfig;
use vhc_core::models::{
    ComponentType, RankedSuggestion, SectionTaxonomy, SuggestionEntry, SymptomDefinition,
};

use crate::builder::build_section;
use crate::expansion::expand_section;
use crate::query::normalize_query;
use crate::ranking::rank_corpus;
use crate::seed::aliases::section_alias;
use crate::seed::overlay::SeedOverlay;
use crate::seed::symptoms::symptom_groups;
use crate::seed::SeedData;

/// The fault-suggestion engine.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct TaxonomyEngine {
    config: TaxonomyConfig,
    seed: SeedData,
    groups: HashMap<ComponentType, SymptomDefinition>,
    /// Section key → built taxonomy. Populated eagerly.
    taxonomies: DashMap<String, Arc<SectionTaxonomy>>,
    /// Section key → generated suggestion corpus.
    corpora: DashMap<String, Arc<Vec<SuggestionEntry>>>,
    /// (section key, normalized query) → ranked results.
    ranks: DashMap<(String, String), Arc<Vec<RankedSuggestion>>>,
}

impl TaxonomyEngine {
    /// Engine over the built-in seed data with production limits.
    pub fn new() -> Self {
        Self::with_config(TaxonomyConfig::default())
    }

    /// Engine over the built-in seed data with custom limits.
    pub fn with_config(config: TaxonomyConfig) -> Self {
        Self::from_seed(SeedData::builtin(), config)
    }

    /// Merge a validated TOML overlay over the engine's current seed and
    /// rebuild. Overlays accumulate: each call layers on top of whatever was
    /// applied before.
    ///
    /// Discards anything already cached: caches are memoization, never a
    /// source of truth.
    pub fn with_overlay(self, overlay: SeedOverlay) -> Self {
        Self::from_seed(self.seed.merged(overlay), self.config)
    }

    fn from_seed(seed: SeedData, config: TaxonomyConfig) -> Self {
        let taxonomies = DashMap::new();
        for (key, section_seed) in seed.iter() {
            let section = build_section(key, section_seed, &config);
            taxonomies.insert(key.to_string(), Arc::new(section));
        }
        info!(sections = taxonomies.len(), "taxonomy tables built");

        Self {
            config,
            seed,
            groups: symptom_groups(),
            taxonomies,
            corpora: DashMap::new(),
            ranks: DashMap::new(),
        }
    }

    /// Resolve a human section label or literal key to a stable key.
    ///
    /// Unrecognized input passes through normalized (trimmed, lower-cased)
    /// for a literal key lookup.
    pub fn resolve_section_key(&self, key_or_alias: &str) -> String {
        let normalized = key_or_alias.trim().to_lowercase();
        match section_alias(&normalized) {
            Some(key) => key.to_string(),
            None => normalized,
        }
    }

    /// The built taxonomy for a section, if the key resolves.
    pub fn taxonomy(&self, key_or_alias: &str) -> Option<Arc<SectionTaxonomy>> {
        let key = self.resolve_section_key(key_or_alias);
        self.taxonomies.get(&key).map(|s| Arc::clone(s.value()))
    }

    /// The suggestion corpus for a section. Unknown keys yield an empty
    /// list, never an error.
    pub fn suggestions(&self, key_or_alias: &str) -> Arc<Vec<SuggestionEntry>> {
        let key = self.resolve_section_key(key_or_alias);
        if let Some(cached) = self.corpora.get(&key) {
            return Arc::clone(cached.value());
        }

        let Some(section) = self.taxonomies.get(&key).map(|s| Arc::clone(s.value())) else {
            debug!(section = %key, "no taxonomy for key");
            return Arc::new(Vec::new());
        };

        let corpus = Arc::new(expand_section(&section, &self.groups, &self.config));
        info!(section = %key, entries = corpus.len(), "suggestion corpus generated");
        self.corpora.insert(key, Arc::clone(&corpus));
        corpus
    }

    /// Rank a section's corpus against a free-text query.
    ///
    /// Empty or whitespace-only queries and unknown sections both yield an
    /// empty list.
    pub fn rank(&self, key_or_alias: &str, query: &str) -> Arc<Vec<RankedSuggestion>> {
        let key = self.resolve_section_key(key_or_alias);
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Arc::new(Vec::new());
        }

        let cache_key = (key.clone(), normalized.clone());
        if let Some(cached) = self.ranks.get(&cache_key) {
            return Arc::clone(cached.value());
        }

        let corpus = self.suggestions(&key);
        if corpus.is_empty() {
            // Unknown or empty section: nothing to rank, nothing to cache.
            return Arc::new(Vec::new());
        }

        let ranked = Arc::new(rank_corpus(&corpus, &normalized));
        debug!(
            section = %key,
            query = %normalized,
            candidates = corpus.len(),
            matched = ranked.len(),
            "ranked suggestions"
        );
        self.ranks.insert(cache_key, Arc::clone(&ranked));
        ranked
    }

    /// Section keys known to this engine, for diagnostics.
    pub fn section_keys(&self) -> Vec<String> {
        self.taxonomies.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for TaxonomyEngine {
    fn default() -> Self {
        Self::new()
    }
}
