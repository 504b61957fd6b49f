//! Location display tokens, match aliases, and query abbreviations.

use vhc_core::models::LocationTag;

/// Human display tokens for a tag, in render order. Each token becomes its
/// own location variant during expansion.
pub fn display_tokens(tag: LocationTag) -> &'static [&'static str] {
    use LocationTag::*;
    match tag {
        Front => &["Front"],
        Rear => &["Rear"],
        NearSide => &["N/S", "Near Side"],
        OffSide => &["O/S", "Off Side"],
        NearSideFront => &["N/S/F", "Near Side Front"],
        NearSideRear => &["N/S/R", "Near Side Rear"],
        OffSideFront => &["O/S/F", "Off Side Front"],
        OffSideRear => &["O/S/R", "Off Side Rear"],
    }
}

/// Lower-cased match aliases for a tag: every display token plus the compact
/// letter code ("nsf" etc.) where one exists.
pub fn match_aliases(tag: LocationTag) -> Vec<String> {
    let mut aliases: Vec<String> = display_tokens(tag)
        .iter()
        .map(|t| t.to_lowercase())
        .collect();
    if let Some(code) = compact_code(tag) {
        aliases.push(code.to_string());
    }
    aliases
}

fn compact_code(tag: LocationTag) -> Option<&'static str> {
    use LocationTag::*;
    match tag {
        NearSide => Some("ns"),
        OffSide => Some("os"),
        NearSideFront => Some("nsf"),
        NearSideRear => Some("nsr"),
        OffSideFront => Some("osf"),
        OffSideRear => Some("osr"),
        Front | Rear => None,
    }
}

/// Query-token abbreviation table for the normalizer.
///
/// Keys are compared against already lower-cased tokens.
pub fn expand_abbreviation(token: &str) -> Option<&'static str> {
    match token {
        "ns" | "n/s" => Some("near side"),
        "os" | "o/s" => Some("off side"),
        "nsf" | "n/s/f" => Some("near side front"),
        "nsr" | "n/s/r" => Some("near side rear"),
        "osf" | "o/s/f" => Some("off side front"),
        "osr" | "o/s/r" => Some("off side rear"),
        _ => None,
    }
}

/// Leading words stripped from a component name before a location prefix is
/// prepended, so "Front wiper blade" under a Front variant does not render
/// as "Front Front wiper blade".
pub const STRIPPABLE_LOCATION_WORDS: [&str; 12] = [
    "front",
    "rear",
    "near",
    "off",
    "side",
    "nearside",
    "offside",
    "nsf",
    "nsr",
    "osf",
    "osr",
    "windscreen",
];
