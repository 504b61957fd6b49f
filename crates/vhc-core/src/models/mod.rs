pub mod action;
pub mod component;
pub mod location;
pub mod section;
pub mod severity;
pub mod suggestion;
pub mod symptom;

pub use action::RemedialAction;
pub use component::{ComponentEntry, ComponentType};
pub use location::{LocationSet, LocationTag};
pub use section::{SectionSeed, SectionTaxonomy};
pub use severity::Severity;
pub use suggestion::{MatchTier, RankedSuggestion, SuggestionEntry};
pub use symptom::SymptomDefinition;
