//! Worded phrasing variants per remedial action.
//!
//! Repeated generation passes rotate through these so the same semantic fact
//! can surface with different wording.

use vhc_core::models::RemedialAction;

/// Up to three phrasing variants per action, preference-ordered.
pub fn phrasings(action: RemedialAction) -> &'static [&'static str] {
    use RemedialAction::*;
    match action {
        Replace => &["replacement required", "renew", "replace"],
        Clean => &["clean and clear", "clean", "clear out"],
        Adjust => &["adjust", "re-adjust", "adjustment required"],
        Diagnose => &["further diagnosis required", "diagnose", "investigate fault"],
        Inspect => &["inspect", "further inspection advised", "check"],
        Repair => &["repair", "rectify", "repair required"],
        Lubricate => &["lubricate", "grease", "free off and lubricate"],
        Align => &["align", "re-align", "alignment check required"],
        Secure => &["secure", "re-secure", "refit and secure"],
    }
}

/// Pick a phrasing variant by rotating index. Never empty.
pub fn phrasing_at(action: RemedialAction, rotation: usize) -> &'static str {
    let variants = phrasings(action);
    variants[rotation % variants.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_phrasings() {
        use RemedialAction::*;
        for action in [
            Replace, Clean, Adjust, Diagnose, Inspect, Repair, Lubricate, Align, Secure,
        ] {
            assert!(!phrasings(action).is_empty());
            assert!(phrasings(action).len() <= 3);
        }
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(
            phrasing_at(RemedialAction::Replace, 0),
            phrasing_at(RemedialAction::Replace, 3)
        );
    }
}
