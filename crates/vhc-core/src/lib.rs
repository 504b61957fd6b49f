//! # vhc-core
//!
//! Foundation crate for the VHC (vehicle health check) suggestion engine.
//! Defines all models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::TaxonomyConfig;
pub use errors::{TaxonomyError, TaxonomyResult};
pub use models::{
    ComponentEntry, ComponentType, LocationSet, LocationTag, MatchTier, RankedSuggestion,
    RemedialAction, SectionSeed, SectionTaxonomy, Severity, SuggestionEntry, SymptomDefinition,
};
