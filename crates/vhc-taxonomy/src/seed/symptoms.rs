//! Symptom groups, authored per component type.
//!
//! Phrases are English fragments slotted into sentence templates. Every
//! phrase must resolve to an action: `action_by_phrase` first, else the
//! first entry of `actions_allowed`.

use std::collections::HashMap;

use vhc_core::models::{ComponentType, RemedialAction, Severity, SymptomDefinition};

use RemedialAction::*;
use Severity::*;

fn group(
    id: &str,
    phrases: &[&str],
    severities: &[Severity],
    actions_allowed: &[RemedialAction],
    overrides: &[(&str, RemedialAction)],
    priority: u8,
    template_notes: &str,
) -> SymptomDefinition {
    SymptomDefinition {
        id: id.to_string(),
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
        severities: severities.to_vec(),
        actions_allowed: actions_allowed.to_vec(),
        action_by_phrase: overrides
            .iter()
            .map(|(p, a)| (p.to_string(), *a))
            .collect(),
        priority,
        template_notes: template_notes.to_string(),
    }
}

/// Base component priority per type, before positional decay.
pub fn base_priority(component_type: ComponentType) -> u8 {
    use ComponentType::*;
    match component_type {
        BrakePad | BrakeDisc | Tyre => 9,
        BallJoint | ShockAbsorber => 8,
        Bush | DropLink => 7,
        WiperBlade | WiperMotor | LightBulb => 6,
        WasherJet | WiperLinkage | Horn | LightAssembly => 5,
        DefaultMechanical => 4,
    }
}

/// The symptom group table, one group per component type.
pub fn symptom_groups() -> HashMap<ComponentType, SymptomDefinition> {
    use ComponentType::*;
    let mut groups = HashMap::new();

    groups.insert(
        WiperBlade,
        group(
            "wiper_blade_wear",
            &["split", "smearing", "perished", "torn", "juddering"],
            &[Amber, Red],
            &[Replace],
            &[],
            6,
            "rubber condition; note screen scratching if torn",
        ),
    );
    groups.insert(
        WasherJet,
        group(
            "washer_jet_flow",
            &["blocked", "misaligned", "weak flow"],
            &[Green, Amber],
            &[Clean, Adjust],
            &[("misaligned", Adjust)],
            5,
            "check aim against screen sweep area",
        ),
    );
    groups.insert(
        WiperLinkage,
        group(
            "wiper_linkage_wear",
            &["worn", "seized", "excess play"],
            &[Amber, Red],
            &[Replace, Lubricate],
            &[("seized", Lubricate)],
            5,
            "",
        ),
    );
    groups.insert(
        WiperMotor,
        group(
            "wiper_motor_fault",
            &["inoperative", "slow in operation", "noisy"],
            &[Amber, Red],
            &[Diagnose, Replace],
            &[],
            6,
            "confirm fuse and relay before condemning motor",
        ),
    );
    groups.insert(
        Horn,
        group(
            "horn_fault",
            &["inoperative", "intermittent", "weak tone"],
            &[Amber, Red],
            &[Diagnose, Replace],
            &[],
            5,
            "",
        ),
    );
    groups.insert(
        LightBulb,
        group(
            "bulb_failure",
            &["blown", "dim", "flickering"],
            &[Amber, Red],
            &[Replace],
            &[],
            6,
            "",
        ),
    );
    groups.insert(
        LightAssembly,
        group(
            "light_assembly_damage",
            &["cracked", "misted", "water ingress", "insecure"],
            &[Green, Amber, Red],
            &[Replace, Secure],
            &[("insecure", Secure)],
            5,
            "misting alone is advisory unless water pooling",
        ),
    );
    groups.insert(
        Bush,
        group(
            "bush_wear",
            &["worn", "split", "excess movement", "perished"],
            &[Amber, Red],
            &[Replace],
            &[],
            7,
            "lever check under load",
        ),
    );
    groups.insert(
        DropLink,
        group(
            "drop_link_wear",
            &["worn", "knocking", "excess play"],
            &[Amber, Red],
            &[Replace],
            &[],
            7,
            "",
        ),
    );
    groups.insert(
        BallJoint,
        group(
            "ball_joint_wear",
            &["worn", "excess play", "boot split", "boot perished"],
            &[Amber, Red],
            &[Replace],
            &[],
            8,
            "boot damage is an MOT failure point",
        ),
    );
    groups.insert(
        ShockAbsorber,
        group(
            "shock_absorber_leak",
            &["leaking", "misted", "corroded", "weak damping"],
            &[Green, Amber, Red],
            &[Replace],
            &[],
            8,
            "misting is advisory; active leak is red",
        ),
    );
    groups.insert(
        BrakePad,
        group(
            "brake_pad_wear",
            &["worn", "low", "contaminated", "wearing unevenly"],
            &[Green, Amber, Red],
            &[Replace],
            &[],
            9,
            "record remaining friction material in mm",
        ),
    );
    groups.insert(
        BrakeDisc,
        group(
            "brake_disc_wear",
            &["lipped", "corroded", "scored", "warped", "below minimum thickness"],
            &[Green, Amber, Red],
            &[Replace],
            &[],
            9,
            "measure against stamped minimum thickness",
        ),
    );
    groups.insert(
        Tyre,
        group(
            "tyre_wear",
            &[
                "worn",
                "low tread",
                "wearing unevenly",
                "perished",
                "cracked",
                "damaged",
                "bulged",
            ],
            &[Green, Amber, Red],
            &[Replace],
            &[],
            9,
            "record tread depths inner/centre/outer",
        ),
    );
    groups.insert(
        DefaultMechanical,
        group(
            "default_mechanical",
            &["worn", "loose", "corroded", "damaged", "insecure", "leaking"],
            &[Green, Amber, Red],
            &[Inspect, Secure, Replace],
            &[("loose", Secure), ("insecure", Secure), ("damaged", Replace)],
            4,
            "",
        ),
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_component_type_has_a_group() {
        use ComponentType::*;
        let groups = symptom_groups();
        for t in [
            WiperBlade,
            WasherJet,
            WiperLinkage,
            WiperMotor,
            Horn,
            LightBulb,
            LightAssembly,
            Bush,
            DropLink,
            BallJoint,
            ShockAbsorber,
            BrakePad,
            BrakeDisc,
            Tyre,
            DefaultMechanical,
        ] {
            assert!(groups.contains_key(&t), "{t:?} has no symptom group");
        }
    }

    #[test]
    fn every_phrase_resolves_to_an_action() {
        for (t, g) in symptom_groups() {
            for phrase in &g.phrases {
                // Must resolve via override or first allowed action, never the
                // last-resort Inspect fallback (that path is for malformed
                // overlays, not authored data).
                assert!(
                    g.action_by_phrase.contains_key(phrase) || !g.actions_allowed.is_empty(),
                    "{t:?}/{phrase} cannot resolve an action"
                );
            }
        }
    }

    #[test]
    fn overrides_reference_allowed_actions() {
        for (t, g) in symptom_groups() {
            for (phrase, action) in &g.action_by_phrase {
                assert!(
                    g.actions_allowed.contains(action),
                    "{t:?}/{phrase} override names a disallowed action"
                );
            }
        }
    }

    #[test]
    fn priorities_stay_in_range() {
        for (_, g) in symptom_groups() {
            assert!((1..=10).contains(&g.priority));
        }
    }
}
