//! The authored VHC sheet: one entry per inspection section.
//!
//! Order matches the paper sheet (interior → lights → under bonnet →
//! underside → brakes → tyres/wheels → exterior). Component lists are the
//! authored minimum; the builder pads them to the configured floor.

use vhc_core::models::{LocationSet, SectionSeed};

fn section(
    key: &str,
    title: &str,
    locations: LocationSet,
    components: &[&str],
) -> (String, SectionSeed) {
    (
        key.to_string(),
        SectionSeed {
            title: title.to_string(),
            locations,
            components: components.iter().map(|c| c.to_string()).collect(),
        },
    )
}

pub fn authored_sections() -> Vec<(String, SectionSeed)> {
    use LocationSet::*;
    vec![
        section(
            "interior_warning_lamps",
            "Warning lamps",
            None,
            &[
                "ABS warning lamp",
                "Airbag warning lamp",
                "Engine management lamp",
                "Oil pressure warning lamp",
                "Battery charge warning lamp",
                "Brake wear indicator lamp",
                "Tyre pressure monitor lamp",
                "Coolant temperature lamp",
                "DPF warning lamp",
                "Glow plug lamp",
                "Power steering warning lamp",
                "Handbrake warning lamp",
            ],
        ),
        section(
            "interior_wipers_washers_horn",
            "Wipers, washers and horn",
            FrontRearCorners,
            &[
                "Wiper blade",
                "Front wiper blade",
                "Rear wiper blade",
                "Windscreen washer jet",
                "Rear washer jet",
                "Wiper linkage",
                "Front wiper motor",
                "Rear wiper motor",
                "Horn",
                "Washer pump",
                "Washer fluid reservoir",
                "Wiper arm",
            ],
        ),
        section(
            "interior_seatbelts",
            "Seatbelts and SRS",
            None,
            &[
                "Driver seatbelt",
                "Passenger seatbelt",
                "Rear seatbelt",
                "Seatbelt buckle",
                "Seatbelt pretensioner",
                "Seatbelt stalk",
                "Airbag module",
                "SRS wiring",
                "Seat runner",
                "Seat frame",
            ],
        ),
        section(
            "interior_controls_switches",
            "Interior controls and switches",
            None,
            &[
                "Indicator stalk",
                "Light switch",
                "Heater blower switch",
                "Electric window switch",
                "Central locking switch",
                "Heated rear window switch",
                "Hazard light switch",
                "Steering wheel controls",
                "Ignition switch",
                "Handbrake lever",
                "Gear selector",
            ],
        ),
        section(
            "interior_air_con",
            "Air con, heating and ventilation",
            None,
            &[
                "Air con compressor",
                "Air con condenser",
                "Heater blower motor",
                "Heater matrix",
                "Pollen filter",
                "Air con pipework",
                "Heater control valve",
                "Vent flap actuator",
                "Air con drive belt",
                "Receiver drier",
            ],
        ),
        section(
            "lights_front",
            "Front lights",
            NearOffSide,
            &[
                "Headlight bulb",
                "Dipped beam bulb",
                "Main beam bulb",
                "Side light bulb",
                "Front indicator bulb",
                "Front fog light bulb",
                "Daytime running light",
                "Headlight assembly",
                "Headlight adjuster",
                "Front fog light assembly",
                "Headlight washer",
            ],
        ),
        section(
            "lights_rear",
            "Rear lights",
            NearOffSide,
            &[
                "Tail light bulb",
                "Brake light bulb",
                "Rear indicator bulb",
                "Reverse light bulb",
                "Rear fog light bulb",
                "High level brake light",
                "Number plate light bulb",
                "Rear light assembly",
                "Rear light lens",
                "Rear light wiring",
            ],
        ),
        section(
            "lights_interior",
            "Interior lights",
            None,
            &[
                "Courtesy light bulb",
                "Map reading light",
                "Boot light bulb",
                "Glovebox light",
                "Instrument cluster illumination",
                "Door puddle light",
                "Footwell light",
                "Vanity mirror light",
            ],
        ),
        section(
            "under_bonnet_engine_oil",
            "Engine oil",
            None,
            &[
                "Engine oil level",
                "Engine oil condition",
                "Oil filler cap",
                "Oil filter",
                "Sump plug",
                "Sump gasket",
                "Rocker cover gasket",
                "Oil cooler",
                "Oil pressure switch",
                "Dipstick",
            ],
        ),
        section(
            "under_bonnet_coolant",
            "Coolant system",
            None,
            &[
                "Coolant level",
                "Coolant condition",
                "Radiator",
                "Expansion tank",
                "Expansion tank cap",
                "Top hose",
                "Bottom hose",
                "Thermostat housing",
                "Water pump",
                "Radiator fan",
                "Heater hose",
            ],
        ),
        section(
            "under_bonnet_brake_fluid",
            "Brake fluid",
            None,
            &[
                "Brake fluid level",
                "Brake fluid condition",
                "Brake fluid reservoir",
                "Reservoir cap",
                "Master cylinder",
                "Brake servo",
                "Servo vacuum pipe",
                "Clutch fluid level",
                "Clutch master cylinder",
            ],
        ),
        section(
            "under_bonnet_power_steering",
            "Power steering",
            None,
            &[
                "Power steering fluid level",
                "Power steering pump",
                "Power steering reservoir",
                "Power steering pipe",
                "Steering rack gaiter",
                "Power steering drive belt",
                "Electric power steering motor",
                "Steering column coupling",
            ],
        ),
        section(
            "under_bonnet_battery",
            "Battery and charging",
            None,
            &[
                "Battery",
                "Battery terminal",
                "Battery clamp",
                "Battery tray",
                "Earth strap",
                "Alternator",
                "Alternator drive belt",
                "Starter motor",
                "Battery vent pipe",
                "Fuse box",
            ],
        ),
        section(
            "under_bonnet_drive_belts",
            "Drive belts",
            None,
            &[
                "Auxiliary drive belt",
                "Belt tensioner",
                "Idler pulley",
                "Crankshaft pulley",
                "Timing belt",
                "Timing belt tensioner",
                "Timing cover",
                "Water pump pulley",
                "Air con drive belt",
            ],
        ),
        section(
            "under_bonnet_hoses_pipes",
            "Hoses and pipes",
            None,
            &[
                "Vacuum hose",
                "Breather hose",
                "Fuel hose",
                "Intercooler hose",
                "Turbo boost pipe",
                "EGR pipe",
                "Air intake hose",
                "PCV valve hose",
                "Washer supply pipe",
            ],
        ),
        section(
            "under_bonnet_air_filter",
            "Air filter and intake",
            None,
            &[
                "Air filter element",
                "Air filter housing",
                "Air intake duct",
                "Mass air flow sensor",
                "Throttle body",
                "Intake manifold",
                "Air temperature sensor",
                "Snow screen",
            ],
        ),
        section(
            "underside_front_suspension",
            "Front suspension",
            FrontCorners,
            &[
                "Lower arm bush",
                "Lower arm",
                "Lower arm ball joint",
                "Anti-roll bar bush",
                "Anti-roll bar drop link",
                "Wishbone bush",
                "Shock absorber",
                "Coil spring",
                "Top mount",
                "Strut bearing",
                "Subframe bush",
                "Hub bearing",
                "Suspension spring seat",
            ],
        ),
        section(
            "underside_rear_suspension",
            "Rear suspension",
            RearCorners,
            &[
                "Trailing arm bush",
                "Trailing arm",
                "Rear shock absorber",
                "Rear coil spring",
                "Rear anti-roll bar bush",
                "Rear drop link",
                "Axle beam bush",
                "Upper control arm",
                "Lower control arm bush",
                "Rear hub bearing",
                "Rear subframe mount",
                "Spring isolator",
            ],
        ),
        section(
            "underside_steering",
            "Steering",
            FrontCorners,
            &[
                "Track rod end",
                "Inner track rod",
                "Steering rack",
                "Steering rack gaiter",
                "Steering rack mount",
                "Steering column universal joint",
                "Idler arm",
                "Steering damper",
                "Power steering pipe",
                "Track rod end ball joint",
            ],
        ),
        section(
            "underside_exhaust",
            "Exhaust system",
            None,
            &[
                "Front pipe",
                "Flexi pipe",
                "Catalytic converter",
                "Centre silencer",
                "Rear silencer",
                "Exhaust rubber mounting",
                "Exhaust clamp",
                "Exhaust gasket",
                "Lambda sensor",
                "DPF",
                "Tail pipe",
                "Heat shield",
            ],
        ),
        section(
            "underside_driveshafts",
            "Driveshafts and CV joints",
            NearOffSide,
            &[
                "Driveshaft",
                "CV joint",
                "Outer CV boot",
                "Inner CV boot",
                "CV boot clamp",
                "Driveshaft support bearing",
                "Propshaft",
                "Propshaft centre bearing",
                "Propshaft universal joint",
                "Driveshaft nut",
            ],
        ),
        section(
            "underside_fuel_lines",
            "Fuel lines and tank",
            None,
            &[
                "Fuel line",
                "Fuel filter",
                "Fuel tank",
                "Fuel tank strap",
                "Fuel filler neck",
                "Fuel pump",
                "Fuel line clip",
                "Fuel tank breather",
                "Fuel rail",
            ],
        ),
        section(
            "underside_oil_leaks",
            "Oil and fluid leaks",
            None,
            &[
                "Sump gasket",
                "Rocker cover gasket",
                "Crankshaft oil seal",
                "Camshaft oil seal",
                "Gearbox oil seal",
                "Differential oil seal",
                "Transfer box seal",
                "Engine rear main seal",
                "Gearbox drain plug",
                "Power steering pipe union",
            ],
        ),
        section(
            "underside_subframe_mounts",
            "Subframe and mounts",
            None,
            &[
                "Engine mount",
                "Gearbox mount",
                "Subframe mount",
                "Torque reaction mount",
                "Subframe",
                "Chassis leg",
                "Floor pan",
                "Crossmember",
                "Body mount",
                "Exhaust hanger bracket",
            ],
        ),
        section(
            "brakes_front_pads_discs",
            "Front brake pads and discs",
            FrontCorners,
            &[
                "Front brake pad",
                "Front brake disc",
                "Brake caliper",
                "Caliper slider pin",
                "Caliper carrier",
                "Brake pad wear sensor",
                "Brake pipe",
                "Flexi hose",
                "Dust shield",
                "Pad retaining clip",
                "Caliper piston",
            ],
        ),
        section(
            "brakes_rear_pads_discs",
            "Rear brake pads and discs",
            RearCorners,
            &[
                "Rear brake pad",
                "Rear brake disc",
                "Rear brake caliper",
                "Rear caliper slider pin",
                "Rear flexi hose",
                "Rear brake pipe",
                "Rear pad wear sensor",
                "Rear dust shield",
                "Handbrake cable",
                "Rear caliper piston",
            ],
        ),
        section(
            "brakes_rear_drums",
            "Rear brake drums and shoes",
            RearCorners,
            &[
                "Brake drum",
                "Brake shoe",
                "Wheel cylinder",
                "Shoe return spring",
                "Adjuster mechanism",
                "Handbrake cable",
                "Backplate",
                "Shoe hold-down pin",
                "Drum retaining screw",
            ],
        ),
        section(
            "brakes_handbrake",
            "Handbrake",
            None,
            &[
                "Handbrake lever",
                "Handbrake cable",
                "Handbrake compensator",
                "Handbrake shoe",
                "Electronic parking brake motor",
                "Parking brake switch",
                "Handbrake ratchet",
                "Cable adjuster",
            ],
        ),
        section(
            "brakes_hydraulics",
            "Brake hydraulics",
            FourCorner,
            &[
                "Brake pipe",
                "Flexi hose",
                "Brake pipe union",
                "ABS modulator",
                "ABS sensor",
                "ABS reluctor ring",
                "Master cylinder",
                "Brake servo",
                "Load compensator valve",
                "Brake light switch",
            ],
        ),
        section(
            "tyres_nsf",
            "Tyre - near side front",
            None,
            &[
                "NSF tyre tread depth",
                "NSF tyre inner edge",
                "NSF tyre outer edge",
                "NSF tyre sidewall",
                "NSF tyre valve",
                "NSF tyre pressure",
                "NSF wheel balance weight",
            ],
        ),
        section(
            "tyres_osf",
            "Tyre - off side front",
            None,
            &[
                "OSF tyre tread depth",
                "OSF tyre inner edge",
                "OSF tyre outer edge",
                "OSF tyre sidewall",
                "OSF tyre valve",
                "OSF tyre pressure",
                "OSF wheel balance weight",
            ],
        ),
        section(
            "tyres_nsr",
            "Tyre - near side rear",
            None,
            &[
                "NSR tyre tread depth",
                "NSR tyre inner edge",
                "NSR tyre outer edge",
                "NSR tyre sidewall",
                "NSR tyre valve",
                "NSR tyre pressure",
                "NSR wheel balance weight",
            ],
        ),
        section(
            "tyres_osr",
            "Tyre - off side rear",
            None,
            &[
                "OSR tyre tread depth",
                "OSR tyre inner edge",
                "OSR tyre outer edge",
                "OSR tyre sidewall",
                "OSR tyre valve",
                "OSR tyre pressure",
                "OSR wheel balance weight",
            ],
        ),
        section(
            "tyres_spare",
            "Spare wheel and kit",
            None,
            &[
                "Spare tyre",
                "Spare wheel",
                "Spare wheel carrier",
                "Jack",
                "Wheel brace",
                "Locking wheel nut key",
                "Tyre inflation kit",
                "Sealant bottle",
            ],
        ),
        section(
            "wheels_front",
            "Front wheels",
            FrontCorners,
            &[
                "Alloy wheel",
                "Wheel rim",
                "Wheel nut",
                "Wheel stud",
                "Wheel trim",
                "Centre cap",
                "Wheel bearing",
                "Hub flange",
            ],
        ),
        section(
            "wheels_rear",
            "Rear wheels",
            RearCorners,
            &[
                "Alloy wheel",
                "Wheel rim",
                "Wheel nut",
                "Wheel stud",
                "Wheel trim",
                "Centre cap",
                "Wheel bearing",
                "Hub flange",
            ],
        ),
        section(
            "exterior_bodywork",
            "Bodywork",
            FourCorner,
            &[
                "Front bumper",
                "Rear bumper",
                "Bonnet",
                "Tailgate",
                "Door skin",
                "Wing panel",
                "Sill panel",
                "Wheel arch liner",
                "Front grille",
                "Roof panel",
            ],
        ),
        section(
            "exterior_glass_mirrors",
            "Glass and mirrors",
            NearOffSide,
            &[
                "Windscreen",
                "Rear screen",
                "Door glass",
                "Quarter glass",
                "Door mirror glass",
                "Door mirror housing",
                "Mirror adjuster motor",
                "Windscreen trim",
                "Heated screen element",
            ],
        ),
        section(
            "exterior_doors_locks",
            "Doors and locks",
            NearOffSide,
            &[
                "Door lock",
                "Door handle",
                "Door hinge",
                "Door check strap",
                "Central locking actuator",
                "Boot lock",
                "Bonnet catch",
                "Bonnet release cable",
                "Fuel flap release",
                "Door seal",
            ],
        ),
        section(
            "exterior_number_plates",
            "Number plates and visibility",
            FrontRear,
            &[
                "Front number plate",
                "Rear number plate",
                "Number plate fixing",
                "Reflector",
                "Rear reflector",
                "Number plate lamp lens",
                "Plate backing",
            ],
        ),
        section(
            "exterior_underbody_corrosion",
            "Underbody and corrosion",
            None,
            &[
                "Sill seam",
                "Floor pan",
                "Chassis leg",
                "Jacking point",
                "Suspension turret",
                "Inner wing",
                "Underseal",
                "Brake pipe run",
                "Subframe seam",
            ],
        ),
    ]
}
