//! Worded phrases: "between A and B", "A or B", and era-tagged years.

use crate::rules::helpers;
use crate::{Rule, YearSpan};

pub fn rules() -> Vec<Rule> {
    vec![
        rule! {
            name: "between years",
            pattern: r"(?i)^between\s+(\d{1,4})\s*\??\s+and\s+(\d{1,4})\s*\??\s*(b\.?\s*c\.?(?:e\.?)?|c\.?e\.?|a\.?d\.?)?\.?$",
            prod: |caps| -> Option<YearSpan> {
                let first = helpers::int_group(caps, 1)?;
                let last = helpers::int_group(caps, 2)?;
                if caps.get(3).is_some_and(|tag| helpers::is_bc_tag(tag.as_str())) {
                    if first < last {
                        return None;
                    }
                    return Some(YearSpan::new(-first, -last));
                }
                Some(YearSpan::new(first, last))
            }
        },
        rule! {
            name: "year alternatives",
            pattern: r"(?i)^(\d{1,4})\s+or\s+(\d{1,4})\s*\??\.?$",
            prod: |caps| -> Option<YearSpan> {
                let first = helpers::int_group(caps, 1)?;
                let last = helpers::complete_against(first, caps.get(2)?.as_str())?;
                // Alternatives state uncertainty, not an explicit range, so a
                // misordered pair degrades instead of raising.
                if last < first {
                    return None;
                }
                Some(YearSpan::new(first, last))
            }
        },
        rule! {
            name: "bc year",
            pattern: r"(?i)^(?:ca\.?\s*)?(\d{1,4})\s*\??\s*b\.?\s*c\.?(?:e\.?)?$",
            prod: |caps| -> Option<YearSpan> {
                Some(YearSpan::single(-helpers::int_group(caps, 1)?))
            }
        },
        rule! {
            name: "ce year",
            pattern: r"(?i)^(?:ca\.?\s*)?(\d{1,4})\s*\??\s*(?:c\.?e\.?|a\.?d\.?)$",
            prod: |caps| -> Option<YearSpan> {
                Some(YearSpan::single(helpers::int_group(caps, 1)?))
            }
        },
    ]
}
