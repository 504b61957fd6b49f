use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::action::RemedialAction;
use super::severity::Severity;

/// A symptom group authored against a component *type*, not an instance.
///
/// Invariant: every phrase resolves to an action — via `action_by_phrase`,
/// else the first entry of `actions_allowed`, else a generic inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomDefinition {
    /// Stable group id, e.g. `"bush_wear"`.
    pub id: String,
    /// English symptom fragments, e.g. "split", "blocked".
    pub phrases: Vec<String>,
    /// Severities for which this group is valid.
    pub severities: Vec<Severity>,
    /// Remedial actions this group may recommend, preference-ordered.
    pub actions_allowed: Vec<RemedialAction>,
    /// Per-phrase preferred action, overriding `actions_allowed` order.
    pub action_by_phrase: HashMap<String, RemedialAction>,
    /// Ranking priority in [1, 10].
    pub priority: u8,
    /// Authored template notes. Part of the authored contract; not rendered.
    pub template_notes: String,
}

impl SymptomDefinition {
    /// Resolve the action for a phrase: override map first, then the first
    /// allowed action, then `Inspect` as the last-resort fallback.
    pub fn action_for_phrase(&self, phrase: &str) -> RemedialAction {
        self.action_by_phrase
            .get(phrase)
            .copied()
            .or_else(|| self.actions_allowed.first().copied())
            .unwrap_or(RemedialAction::Inspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> SymptomDefinition {
        SymptomDefinition {
            id: "test".into(),
            phrases: vec!["worn".into(), "blocked".into()],
            severities: vec![Severity::Amber, Severity::Red],
            actions_allowed: vec![RemedialAction::Replace, RemedialAction::Clean],
            action_by_phrase: [("blocked".to_string(), RemedialAction::Clean)]
                .into_iter()
                .collect(),
            priority: 5,
            template_notes: String::new(),
        }
    }

    #[test]
    fn phrase_override_wins() {
        assert_eq!(group().action_for_phrase("blocked"), RemedialAction::Clean);
    }

    #[test]
    fn falls_back_to_first_allowed() {
        assert_eq!(group().action_for_phrase("worn"), RemedialAction::Replace);
    }

    #[test]
    fn empty_actions_fall_back_to_inspect() {
        let mut g = group();
        g.actions_allowed.clear();
        g.action_by_phrase.clear();
        assert_eq!(g.action_for_phrase("worn"), RemedialAction::Inspect);
    }
}
