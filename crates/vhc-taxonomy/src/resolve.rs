//! Component type and location resolution.
//!
//! Both functions are ordered predicate cascades evaluated top to bottom;
//! first match wins. The order is load-bearing: a name like "Horn relay"
//! inside the wiper section must hit the section-specific horn check before
//! any general light/lamp test could see it.

use vhc_core::models::{ComponentType, LocationSet};

fn is_wiper_section(section_key: &str) -> bool {
    section_key.contains("wipers")
}

/// Classify a component by name. Pure, deterministic.
pub fn component_type(component_name: &str, section_key: &str) -> ComponentType {
    use ComponentType::*;
    let name = component_name.trim().to_lowercase();

    // Section-specific checks run first: within the wiper/washer/horn
    // section, "motor" means wiper motor, never a generic assembly.
    if is_wiper_section(section_key) {
        if name.contains("blade") {
            return WiperBlade;
        }
        if name.contains("jet") || name.contains("washer") {
            return WasherJet;
        }
        if name.contains("linkage") {
            return WiperLinkage;
        }
        if name.contains("motor") {
            return WiperMotor;
        }
        if name.contains("horn") {
            return Horn;
        }
    }

    if name.contains("bulb") {
        return LightBulb;
    }
    if name.contains("lamp") || name.contains("light") {
        return LightAssembly;
    }
    if name.contains("bush") || name.contains("d-bush") {
        return Bush;
    }
    if name.contains("drop link")
        || name.contains("stabiliser link")
        || name.contains("sway bar link")
    {
        return DropLink;
    }
    if name.contains("ball joint") {
        return BallJoint;
    }
    if name.contains("shock") || name.contains("damper") || name.contains("strut") {
        return ShockAbsorber;
    }
    if name.contains("pad") {
        return BrakePad;
    }
    if name.contains("disc") || name.contains("rotor") || name.contains("drum") {
        return BrakeDisc;
    }
    if name.contains("tyre") || name.contains("tire") || name.contains("wheel") {
        return Tyre;
    }

    DefaultMechanical
}

/// Resolve a component's location set: component-name overrides layered over
/// section-key promotion, falling back to the section's authored default.
pub fn location_set(
    section_key: &str,
    component_name: &str,
    section_default: LocationSet,
) -> LocationSet {
    let name = component_name.trim().to_lowercase();

    if is_wiper_section(section_key) {
        if name.contains("horn") {
            return LocationSet::None;
        }
        if name.contains("rear") {
            return LocationSet::RearCorners;
        }
        if name.contains("front") || name.contains("windscreen") {
            return LocationSet::FrontCorners;
        }
        return LocationSet::FrontRearCorners;
    }

    // Corner-aware promotion for suspension and brake sections, regardless
    // of component name.
    if section_key.contains("front_suspension") {
        return LocationSet::FrontCorners;
    }
    if section_key.contains("rear_suspension") {
        return LocationSet::RearCorners;
    }
    let braking = section_key.contains("pads")
        || section_key.contains("discs")
        || section_key.contains("drum");
    if braking && section_key.contains("front") {
        return LocationSet::FrontCorners;
    }
    if braking && section_key.contains("rear") {
        return LocationSet::RearCorners;
    }

    section_default
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIPERS: &str = "interior_wipers_washers_horn";

    #[test]
    fn wiper_section_distinguishes_blade_jet_motor_horn() {
        assert_eq!(component_type("Front wiper blade", WIPERS), ComponentType::WiperBlade);
        assert_eq!(component_type("Windscreen washer jet", WIPERS), ComponentType::WasherJet);
        assert_eq!(component_type("Wiper linkage", WIPERS), ComponentType::WiperLinkage);
        assert_eq!(component_type("Rear wiper motor", WIPERS), ComponentType::WiperMotor);
        assert_eq!(component_type("Horn", WIPERS), ComponentType::Horn);
    }

    #[test]
    fn section_checks_win_over_general_light_checks() {
        // "Horn light relay" contains "light"; inside the wiper section the
        // horn check must win.
        assert_eq!(component_type("Horn light relay", WIPERS), ComponentType::Horn);
        // Outside it, the general cascade sees a light assembly.
        assert_eq!(
            component_type("Horn light relay", "lights_front"),
            ComponentType::LightAssembly
        );
    }

    #[test]
    fn bulb_beats_light() {
        assert_eq!(
            component_type("Headlight bulb", "lights_front"),
            ComponentType::LightBulb
        );
        assert_eq!(
            component_type("Headlight assembly", "lights_front"),
            ComponentType::LightAssembly
        );
    }

    #[test]
    fn general_keywords_classify() {
        let key = "underside_front_suspension";
        assert_eq!(component_type("Lower arm bush", key), ComponentType::Bush);
        assert_eq!(component_type("Anti-roll bar drop link", key), ComponentType::DropLink);
        assert_eq!(component_type("Lower arm ball joint", key), ComponentType::BallJoint);
        assert_eq!(component_type("Shock absorber", key), ComponentType::ShockAbsorber);
        assert_eq!(
            component_type("Front brake pad", "brakes_front_pads_discs"),
            ComponentType::BrakePad
        );
        assert_eq!(
            component_type("Front brake disc", "brakes_front_pads_discs"),
            ComponentType::BrakeDisc
        );
        assert_eq!(component_type("NSF tyre sidewall", "tyres_nsf"), ComponentType::Tyre);
        assert_eq!(component_type("Coil spring", key), ComponentType::DefaultMechanical);
    }

    #[test]
    fn wiper_section_location_overrides() {
        assert_eq!(
            location_set(WIPERS, "Horn", LocationSet::FrontRearCorners),
            LocationSet::None
        );
        assert_eq!(
            location_set(WIPERS, "Rear wiper blade", LocationSet::FrontRearCorners),
            LocationSet::RearCorners
        );
        assert_eq!(
            location_set(WIPERS, "Windscreen washer jet", LocationSet::FrontRearCorners),
            LocationSet::FrontCorners
        );
        assert_eq!(
            location_set(WIPERS, "Washer pump", LocationSet::FrontRearCorners),
            LocationSet::FrontRearCorners
        );
    }

    #[test]
    fn suspension_and_brake_sections_promote_corners() {
        assert_eq!(
            location_set("underside_front_suspension", "Coil spring", LocationSet::None),
            LocationSet::FrontCorners
        );
        assert_eq!(
            location_set("brakes_rear_pads_discs", "Handbrake cable", LocationSet::None),
            LocationSet::RearCorners
        );
    }

    #[test]
    fn other_sections_keep_the_authored_default() {
        assert_eq!(
            location_set("under_bonnet_battery", "Battery", LocationSet::None),
            LocationSet::None
        );
        assert_eq!(
            location_set("lights_front", "Headlight bulb", LocationSet::NearOffSide),
            LocationSet::NearOffSide
        );
    }
}
