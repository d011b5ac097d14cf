//! Numeric date shapes: fully-specified calendar dates, year spans, comma
//! lists, and bare years with their usual punctuation noise.

use crate::rules::helpers;
use crate::{Rule, YearSpan};

/// Fully-specified calendar dates. These run before everything else so that
/// `"19990211"` never reads as a four-digit year plus junk and `"12/25/00"`
/// never reads as a span.
pub fn date_rules() -> Vec<Rule> {
    vec![
        rule! {
            name: "compact yyyymmdd date",
            pattern: r"^(\d{4})(\d{2})(\d{2})$",
            prod: |caps| -> Option<YearSpan> {
                let month = helpers::int_group(caps, 2)?;
                let day = helpers::int_group(caps, 3)?;
                if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                    return None;
                }
                Some(YearSpan::single(helpers::int_group(caps, 1)?))
            }
        },
        rule! {
            name: "iso yyyy-mm-dd date",
            pattern: r"^(\d{4})-(\d{1,2})-(\d{1,2})$",
            prod: |caps| -> Option<YearSpan> {
                let month = helpers::int_group(caps, 2)?;
                let day = helpers::int_group(caps, 3)?;
                if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                    return None;
                }
                Some(YearSpan::single(helpers::int_group(caps, 1)?))
            }
        },
        rule! {
            name: "m/d/yy date",
            pattern: r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$",
            prod: |caps| -> Option<YearSpan> {
                let month = helpers::int_group(caps, 1)?;
                let day = helpers::int_group(caps, 2)?;
                if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                    return None;
                }
                let year_text = caps.get(3)?.as_str();
                let year = helpers::int_group(caps, 3)?;
                Some(YearSpan::single(if year_text.len() <= 2 {
                    helpers::two_digit_year(year)
                } else {
                    year
                }))
            }
        },
    ]
}

/// Year spans, comma lists, and single years. These run last: anything with
/// more structure has already been claimed.
pub fn year_rules() -> Vec<Rule> {
    vec![
        rule! {
            name: "year span",
            pattern: r"(?i)^(?:ca\.?\s*)?(\d{1,4})\s*\??\s*[–—-]\s*(\d{1,4})\s*\??\.?$",
            prod: |caps| -> Option<YearSpan> {
                let first = helpers::int_group(caps, 1)?;
                let second_text = caps.get(2)?.as_str();
                let last = helpers::complete_against(first, second_text)?;
                if last < first {
                    // "1880-01" is a year-month, not a backwards span.
                    let raw: i32 = second_text.parse().ok()?;
                    if second_text.len() <= 2 && (1..=12).contains(&raw) {
                        return Some(YearSpan::single(first));
                    }
                    if second_text.len() <= 2 {
                        return None;
                    }
                }
                Some(YearSpan::new(first, last))
            }
        },
        rule! {
            name: "comma year list",
            pattern: r"^(\d{1,4})\s*\??(?:\s*,\s*(\d{1,4})\s*\??)+$",
            prod: |caps| -> Option<YearSpan> {
                let first = helpers::int_group(caps, 1)?;
                let last = helpers::complete_against(first, caps.get(2)?.as_str())?;
                if last < first {
                    return None;
                }
                Some(YearSpan::new(first, last))
            }
        },
        rule! {
            name: "single year",
            pattern: r"(?i)^(?:ca\.?\s*)?(-?\d{1,4})\s*\??\s*\.?$",
            prod: |caps| -> Option<YearSpan> {
                Some(YearSpan::single(helpers::int_group(caps, 1)?))
            }
        },
        rule! {
            name: "open-ended year",
            pattern: r"^(-?\d{3,4})\s*-$",
            prod: |caps| -> Option<YearSpan> {
                Some(YearSpan::single(helpers::int_group(caps, 1)?))
            }
        },
    ]
}
