//! TEI manuscript-description date extraction (`origDate`).

use crate::extract::collect_elements;
use crate::range::{RangeOrderError, build_range};
use crate::{api, rules, split};

/// Extract the year range from a TEI record's first `origDate`.
///
/// Prefers the `notBefore`/`notAfter` attribute pair, then `when`, then the
/// element text. Text content is where scribes put mixed-calendar statements
/// (`"A.H. 986 (1578)"`), so it is calendar-split before the Gregorian side
/// resolves.
pub(crate) fn parse(xml: &str) -> Result<Vec<i32>, RangeOrderError> {
    let elements = collect_elements(xml, &["origDate"]);
    let Some(element) = elements.first() else {
        return Ok(Vec::new());
    };

    let not_before = element.attr("notBefore").and_then(|value| rules::earliest_year(value.trim()));
    let not_after = element.attr("notAfter").and_then(|value| rules::latest_year(value.trim()));
    if not_before.is_some() || not_after.is_some() {
        return build_range(not_before, not_after);
    }

    if let Some(when) = element.attr("when") {
        if let Some(span) = rules::resolve(when.trim()) {
            return build_range(Some(span.first), Some(span.last));
        }
    }

    let mixed = split::split(element.text.trim());
    api::parse_free_text(Some(&mixed.gregorian))
}
