//! FGDC geospatial metadata date extraction
//! (`metadata/idinfo/timeperd/timeinfo`).

use crate::extract::collect_elements;
use crate::range::{RangeOrderError, build_range};
use crate::rules;

/// Extract the year range from an FGDC record.
///
/// Prefers the `rngdates` begin/end pair; falls back to the single
/// `sngdate/caldate` element. Dates arrive as compact `yyyymmdd` or bare
/// years.
pub(crate) fn parse(xml: &str) -> Result<Vec<i32>, RangeOrderError> {
    let begin = collect_elements(xml, &["rngdates", "begdate"]);
    let end = collect_elements(xml, &["rngdates", "enddate"]);
    if !begin.is_empty() || !end.is_empty() {
        let first = begin.first().and_then(|element| rules::earliest_year(element.text.trim()));
        let last = end.first().and_then(|element| rules::latest_year(element.text.trim()));
        return build_range(first, last);
    }

    let single = collect_elements(xml, &["sngdate", "caldate"]);
    match single.first() {
        Some(element) => build_range(rules::earliest_year(element.text.trim()), None),
        None => Ok(Vec::new()),
    }
}
