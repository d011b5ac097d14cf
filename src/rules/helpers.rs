//! Shared capture-group and year-arithmetic utilities for the rule tables.

use chrono::{Datelike, Local};
use regex::Captures;

use crate::YearSpan;

/// Parse capture group `idx` as an integer.
pub fn int_group(caps: &Captures<'_>, idx: usize) -> Option<i32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// The years covered by the `n`th century. Follows the catalog reading where
/// `"10th century B.C."` means the 1000s BC: the BC span for century `n` is
/// `-(100n+99)..=-100n`, the CE span is `100(n-1)..=100(n-1)+99`.
pub fn century_span(century: i32, bc: bool) -> YearSpan {
    if bc {
        YearSpan::new(-(century * 100 + 99), -(century * 100))
    } else {
        YearSpan::new((century - 1) * 100, (century - 1) * 100 + 99)
    }
}

/// The years covered by a decade given its three leading digits
/// (`"196u"` → 196 → 1960..=1969).
pub fn decade_span(prefix: i32) -> YearSpan {
    YearSpan::new(prefix * 10, prefix * 10 + 9)
}

/// Complete a two-digit year against the current century: `"00"` reads as
/// 2000, anything later than the current two-digit year falls back to the
/// 1900s (`"99"` → 1999).
pub fn two_digit_year(two_digits: i32) -> i32 {
    if two_digits <= Local::now().year() % 100 { 2000 + two_digits } else { 1900 + two_digits }
}

/// Complete an abbreviated second year against the first one:
/// `("1871", "72")` → 1872. Full years pass through unchanged.
pub fn complete_against(first: i32, second_text: &str) -> Option<i32> {
    let second: i32 = second_text.parse().ok()?;
    if second_text.len() <= 2 && first >= 100 {
        Some(first - first % 100 + second)
    } else {
        Some(second)
    }
}

/// Whether an era tag capture reads as BC/BCE (as opposed to CE/AD).
pub fn is_bc_tag(tag: &str) -> bool {
    tag.trim_start().starts_with(['b', 'B'])
}

/// The leading integer of a noisy field, if any (`"300 or so"` → 300,
/// `"-2"` → -2, `"not999"` → none).
pub fn leading_int(text: &str) -> Option<i32> {
    regex!(r"^\s*(-?\d+)").captures(text).and_then(|caps| int_group(&caps, 1))
}
