//! Gregorian/Hijri year conversion.
//!
//! Uses a fixed linear approximation of the two calendars' year-length ratio,
//! applied uniformly; no calendar-table lookups. The mapping is good to about
//! a year, which is the precision catalog date statements carry anyway.

use std::fmt;

/// Ratio of Gregorian to Hijri year lengths (~365.24 / ~354.37 days).
const HIJRI_MODIFIER: f64 = 1.030684;
/// Gregorian year of the Hijra epoch, fractionally placed.
const HIJRI_OFFSET: f64 = 621.5643;

/// Calendar systems a year range can be expressed in.
///
/// A range is always in exactly one system; conversion produces a new range
/// in the other system, the two are never mixed within one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    Gregorian,
    Hijri,
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarSystem::Gregorian => write!(f, "Gregorian"),
            CalendarSystem::Hijri => write!(f, "Hijri"),
        }
    }
}

/// Convert a Gregorian year to the Hijri year it (mostly) overlaps.
///
/// `floor(1.030684 × (year − 621.5643))`. Monotonic non-decreasing, so
/// converting both endpoints of an ordered range keeps it ordered.
pub fn to_hijri(gregorian_year: i32) -> i32 {
    (HIJRI_MODIFIER * (f64::from(gregorian_year) - HIJRI_OFFSET)).floor() as i32
}

/// Convert a Hijri year to a Gregorian year.
///
/// Algebraic inverse of [`to_hijri`]'s formula. Approximate: the two
/// calendars' year lengths differ, so round-tripping may drift by one year.
pub fn to_gregorian(hijri_year: i32) -> i32 {
    (f64::from(hijri_year) / HIJRI_MODIFIER + HIJRI_OFFSET).floor() as i32
}

/// Convert `year` out of the named calendar into the other one.
pub fn convert(year: i32, from: CalendarSystem) -> i32 {
    match from {
        CalendarSystem::Gregorian => to_hijri(year),
        CalendarSystem::Hijri => to_gregorian(year),
    }
}
