//! # vhc-taxonomy
//!
//! The VHC fault-suggestion engine: expands a small hand-authored
//! component/symptom taxonomy into a large deduplicated corpus of
//! natural-language fault suggestions per inspection section, and ranks that
//! corpus against free-text autocomplete queries.
//!
//! Pipeline: seed vocabulary → component/location resolution → taxonomy
//! builder → suggestion expander (cached) → query normalizer → ranker
//! (cached). Everything is a pure function of the static seed data; the
//! caches are memoization, never a source of truth.

pub mod builder;
pub mod engine;
pub mod expansion;
pub mod query;
pub mod ranking;
pub mod resolve;
pub mod seed;

pub use engine::TaxonomyEngine;
pub use query::normalize_query;
pub use seed::overlay::SeedOverlay;
