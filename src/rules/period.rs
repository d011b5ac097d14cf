//! Century and decade expressions: worded ordinals and the `u`/`-`/`x`
//! unknown-digit placeholders MARC and finding aids use.

use crate::rules::helpers;
use crate::{Rule, YearSpan};

pub fn rules() -> Vec<Rule> {
    vec![
        rule! {
            name: "century span",
            pattern: r"(?i)^(?:ca\.?\s*)?(\d{1,2})(?:st|nd|rd|th)\s*[–—-]\s*(\d{1,2})(?:st|nd|rd|th)\s+centur(?:y|ies)\s*(b\.?\s*c\.?(?:e\.?)?|c\.?e\.?|a\.?d\.?)?\.?$",
            prod: |caps| -> Option<YearSpan> {
                let opening = helpers::int_group(caps, 1)?;
                let closing = helpers::int_group(caps, 2)?;
                let bc = caps.get(3).is_some_and(|tag| helpers::is_bc_tag(tag.as_str()));
                // BC centuries count down ("10th-9th century B.C."), CE up.
                if (bc && opening < closing) || (!bc && closing < opening) {
                    return None;
                }
                let first = helpers::century_span(opening, bc).first;
                let last = helpers::century_span(closing, bc).last;
                Some(YearSpan::new(first, last))
            }
        },
        rule! {
            name: "century",
            pattern: r"(?i)^(?:ca\.?\s*)?(\d{1,2})(?:st|nd|rd|th)\s+century\s*(b\.?\s*c\.?(?:e\.?)?|c\.?e\.?|a\.?d\.?)?\.?$",
            prod: |caps| -> Option<YearSpan> {
                let century = helpers::int_group(caps, 1)?;
                let bc = caps.get(2).is_some_and(|tag| helpers::is_bc_tag(tag.as_str()));
                Some(helpers::century_span(century, bc))
            }
        },
        rule! {
            name: "century shorthand",
            pattern: r"(?i)^(\d{1,2})(?:--|uu|xx)$",
            prod: |caps| -> Option<YearSpan> {
                let century_digits = helpers::int_group(caps, 1)?;
                Some(YearSpan::new(century_digits * 100, century_digits * 100 + 99))
            }
        },
        rule! {
            name: "decade shorthand",
            pattern: r"(?i)^(\d{3})[ux]$",
            prod: |caps| -> Option<YearSpan> {
                Some(helpers::decade_span(helpers::int_group(caps, 1)?))
            }
        },
        rule! {
            name: "decade",
            pattern: r"^(\d{3})0s$",
            prod: |caps| -> Option<YearSpan> {
                Some(helpers::decade_span(helpers::int_group(caps, 1)?))
            }
        },
    ]
}
