//! Human label → section key alias table.
//!
//! Labels are matched after lower-casing and trimming. Unrecognized labels
//! pass through unchanged as literal key lookups.

/// Resolve a human section label to its stable key, if known.
pub fn section_alias(label: &str) -> Option<&'static str> {
    match label {
        "warning lamps" => Some("interior_warning_lamps"),
        "wipers, washers and horn" | "wipers and washers" | "wipers & washers" => {
            Some("interior_wipers_washers_horn")
        }
        "seatbelts" | "seatbelts and srs" => Some("interior_seatbelts"),
        "interior controls" => Some("interior_controls_switches"),
        "air con/heating/ventilation" | "air con, heating and ventilation" => {
            Some("interior_air_con")
        }
        "front lights" => Some("lights_front"),
        "rear lights" => Some("lights_rear"),
        "interior lights" => Some("lights_interior"),
        "engine oil" => Some("under_bonnet_engine_oil"),
        "coolant" | "coolant system" => Some("under_bonnet_coolant"),
        "brake fluid" => Some("under_bonnet_brake_fluid"),
        "power steering" => Some("under_bonnet_power_steering"),
        "battery" | "battery and charging" => Some("under_bonnet_battery"),
        "drive belts" => Some("under_bonnet_drive_belts"),
        "hoses and pipes" => Some("under_bonnet_hoses_pipes"),
        "air filter" | "air filter and intake" => Some("under_bonnet_air_filter"),
        "front suspension" => Some("underside_front_suspension"),
        "rear suspension" => Some("underside_rear_suspension"),
        "steering" => Some("underside_steering"),
        "exhaust" | "exhaust system" => Some("underside_exhaust"),
        "driveshafts" | "driveshafts and cv joints" => Some("underside_driveshafts"),
        "fuel lines" | "fuel lines and tank" => Some("underside_fuel_lines"),
        "oil leaks" | "oil and fluid leaks" => Some("underside_oil_leaks"),
        "subframe and mounts" => Some("underside_subframe_mounts"),
        "front brakes" | "front brake pads and discs" => Some("brakes_front_pads_discs"),
        "rear brakes" | "rear brake pads and discs" => Some("brakes_rear_pads_discs"),
        "rear drums" | "rear brake drums and shoes" => Some("brakes_rear_drums"),
        "handbrake" => Some("brakes_handbrake"),
        "brake hydraulics" => Some("brakes_hydraulics"),
        "nsf tyre" | "tyre - near side front" => Some("tyres_nsf"),
        "osf tyre" | "tyre - off side front" => Some("tyres_osf"),
        "nsr tyre" | "tyre - near side rear" => Some("tyres_nsr"),
        "osr tyre" | "tyre - off side rear" => Some("tyres_osr"),
        "spare wheel" | "spare wheel and kit" => Some("tyres_spare"),
        "front wheels" => Some("wheels_front"),
        "rear wheels" => Some("wheels_rear"),
        "bodywork" => Some("exterior_bodywork"),
        "glass and mirrors" => Some("exterior_glass_mirrors"),
        "doors and locks" => Some("exterior_doors_locks"),
        "number plates" | "number plates and visibility" => Some("exterior_number_plates"),
        "underbody" | "underbody and corrosion" => Some("exterior_underbody_corrosion"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(
            section_alias("front suspension"),
            Some("underside_front_suspension")
        );
        assert_eq!(
            section_alias("air con/heating/ventilation"),
            Some("interior_air_con")
        );
    }

    #[test]
    fn unknown_labels_miss() {
        assert_eq!(section_alias("not a real section"), None);
    }
}
