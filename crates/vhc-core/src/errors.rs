//! Error types for the authoring surface.
//!
//! The query-time API never fails: unknown section keys and blank queries
//! degrade to empty results. Errors exist only for user-supplied seed
//! overlays, which are parsed and validated before they reach the engine.

/// Result alias used across the workspace.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// Seed-overlay authoring errors.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("overlay parse failed: {reason}")]
    OverlayParse { reason: String },

    #[error("section '{key}' has an empty component list")]
    EmptySection { key: String },

    #[error("section '{key}' names unknown location set '{value}'")]
    UnknownLocationSet { key: String, value: String },

    #[error("section key '{key}' is not a valid snake_case identifier")]
    InvalidSectionKey { key: String },
}
