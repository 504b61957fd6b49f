//! Vehicle-side location vocabulary.
//!
//! Tags are a closed enumeration; a set is one of a handful of named,
//! ordered combinations. Sections and components never carry ad-hoc tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One canonical vehicle-side location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTag {
    Front,
    Rear,
    NearSide,
    OffSide,
    NearSideFront,
    NearSideRear,
    OffSideFront,
    OffSideRear,
}

impl LocationTag {
    /// Stable snake_case key, used inside dedup keys and ids.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Rear => "rear",
            Self::NearSide => "near_side",
            Self::OffSide => "off_side",
            Self::NearSideFront => "near_side_front",
            Self::NearSideRear => "near_side_rear",
            Self::OffSideFront => "off_side_front",
            Self::OffSideRear => "off_side_rear",
        }
    }

    /// Whether this tag names a front-of-vehicle position.
    pub fn is_front(self) -> bool {
        matches!(self, Self::Front | Self::NearSideFront | Self::OffSideFront)
    }

    /// Whether this tag names a rear-of-vehicle position.
    pub fn is_rear(self) -> bool {
        matches!(self, Self::Rear | Self::NearSideRear | Self::OffSideRear)
    }
}

impl fmt::Display for LocationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// A named, ordered, duplicate-free set of location tags.
///
/// `None` means the section or component has no location concept at all
/// (e.g. a horn).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSet {
    #[default]
    None,
    /// Front and rear, no sides.
    FrontRear,
    /// Near side and off side, no front/rear split.
    NearOffSide,
    /// The four corners only.
    FourCorner,
    /// Front plus its two corners.
    FrontCorners,
    /// Rear plus its two corners.
    RearCorners,
    /// Front, rear, and all four corners.
    FrontRearCorners,
}

impl LocationSet {
    /// The tags in this set, in canonical order. Empty for `None`.
    pub fn tags(self) -> &'static [LocationTag] {
        use LocationTag::*;
        match self {
            Self::None => &[],
            Self::FrontRear => &[Front, Rear],
            Self::NearOffSide => &[NearSide, OffSide],
            Self::FourCorner => &[NearSideFront, OffSideFront, NearSideRear, OffSideRear],
            Self::FrontCorners => &[Front, NearSideFront, OffSideFront],
            Self::RearCorners => &[Rear, NearSideRear, OffSideRear],
            Self::FrontRearCorners => &[
                Front,
                Rear,
                NearSideFront,
                OffSideFront,
                NearSideRear,
                OffSideRear,
            ],
        }
    }

    /// Parse the snake_case name used in seed overlays.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "none" => Some(Self::None),
            "front_rear" => Some(Self::FrontRear),
            "near_off_side" => Some(Self::NearOffSide),
            "four_corner" => Some(Self::FourCorner),
            "front_corners" => Some(Self::FrontCorners),
            "rear_corners" => Some(Self::RearCorners),
            "front_rear_corners" => Some(Self::FrontRearCorners),
            _ => None,
        }
    }
}
