//! MARC 008 control-field date extraction.
//!
//! Works on bytes 06-14 of the 008 field: one date-type code followed by two
//! four-character date slices. Does not handle BC dates; MARC 008 has no way
//! to encode them.

use crate::range::{RangeOrderError, build_range};
use crate::rules;

/// Extract the year range from an 008 date slice (`"s1554    "`).
///
/// Only type codes `c d e i k m q r s` carry usable dates; anything else
/// yields an empty result. Types `s` and `e` are single-dated, so both
/// readings come from the first slice; type `r` (reprint) takes the original
/// publication date from the second slice. `u` placeholder digits resolve as
/// decade/century wildcards.
pub(crate) fn parse(field: &str) -> Result<Vec<i32>, RangeOrderError> {
    let Some(date_type) = field.chars().next() else {
        return Ok(Vec::new());
    };
    if !matches!(date_type, 'c' | 'd' | 'e' | 'i' | 'k' | 'm' | 'q' | 'r' | 's') {
        tracing::debug!(%date_type, "unhandled MARC date type code");
        return Ok(Vec::new());
    }

    let first_slice = field.get(1..5).unwrap_or("");
    let second_slice = field.get(5..9).unwrap_or("");
    let (first, last) = match date_type {
        's' | 'e' => (rules::earliest_year(first_slice), rules::latest_year(first_slice)),
        'r' => (rules::earliest_year(second_slice), rules::latest_year(second_slice)),
        _ => (rules::earliest_year(first_slice), rules::latest_year(second_slice)),
    };
    build_range(first, last)
}
