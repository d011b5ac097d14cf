//! Projection of resolved date ranges into the Hijri calendar.

use crate::calendar::to_hijri;
use crate::range::RangeOrderError;
use crate::{api, split};

/// Project an already-resolved Gregorian year range into Hijri years.
///
/// Both endpoints are converted and the upper bound is extended by one year:
/// the Hijri year is ~11 days shorter, so a Gregorian span can straddle one
/// extra Hijri year boundary. Inputs were bounds-checked when they were
/// resolved, and the Hijri image of a valid Gregorian year may legitimately
/// fall outside the Gregorian bounds window, so no re-validation happens
/// here. Conversion is monotonic, so the result stays ordered.
pub(crate) fn project(years: &[i32]) -> Vec<i32> {
    let (Some(&first), Some(&last)) = (years.first(), years.last()) else {
        return Vec::new();
    };
    (to_hijri(first)..=to_hijri(last) + 1).collect()
}

/// Resolve a raw date expression to a Hijri year range.
///
/// A record that states its Hijri date explicitly (`"A.H. 986 (1578)"`) is
/// believed as-is: the Hijri fragment is parsed and returned without
/// conversion. Otherwise the Gregorian side is resolved and projected.
pub(crate) fn project_text(text: &str) -> Result<Vec<i32>, RangeOrderError> {
    let mixed = split::split(text);
    if let Some(fragment) = mixed.hijri.as_deref() {
        if !fragment.trim().is_empty() {
            return api::parse_free_text(Some(fragment));
        }
    }
    let gregorian = api::parse_free_text(Some(&mixed.gregorian))?;
    Ok(project(&gregorian))
}
