//! Free-text date-phrase resolution.
//!
//! Catalog date statements are short, noisy phrases: `"ca. 1670"`,
//! `"between 300 and 150 B.C"`, `"17--"`, `"196u"`, `"1602 or 1603"`. The
//! resolver is a prioritized table of anchored, case-insensitive rules; the
//! first rule whose pattern matches and whose production accepts the captures
//! wins. A phrase no rule accepts falls through to the timestamp fallbacks,
//! and failing those resolves to nothing, never to an error.
//!
//! Each attempt works on its own match object; no state is shared between
//! invocations.

pub(crate) mod helpers;
mod numeric;
mod period;
mod phrases;
#[cfg(test)]
mod tests;

use chrono::Datelike;
use once_cell::sync::Lazy;

use crate::{Rule, YearSpan};

/// Rule table in priority order: fully-specified date shapes first, then
/// worded phrases, then century/decade periods, then bare numeric forms.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = numeric::date_rules();
    rules.extend(phrases::rules());
    rules.extend(period::rules());
    rules.extend(numeric::year_rules());
    rules
});

/// Resolve one phrase to its endpoint years.
///
/// `None` means the phrase carries no determinable date; the caller decides
/// whether that is worth reporting.
pub(crate) fn resolve(text: &str) -> Option<YearSpan> {
    let cleaned = preprocess(text);
    if cleaned.is_empty() {
        return None;
    }

    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(&cleaned) {
            if let Some(span) = (rule.production)(&caps) {
                tracing::trace!(rule = rule.name, input = %cleaned, "phrase resolved");
                return Some(span);
            }
        }
    }

    resolve_timestamp(&cleaned)
}

/// Lower edge of the phrase's span (`"08uu"` reads as 800).
pub(crate) fn earliest_year(text: &str) -> Option<i32> {
    resolve(text).map(|span| span.first)
}

/// Upper edge of the phrase's span (`"08uu"` reads as 899).
pub(crate) fn latest_year(text: &str) -> Option<i32> {
    resolve(text).map(|span| span.last)
}

/// Strip the noise the rules should not have to encode: splitter husks,
/// wrapping brackets, separator droppings, trailing miladi tags.
fn preprocess(text: &str) -> String {
    // Empty bracket pairs are what the mixed-calendar splitter leaves behind
    // when a record parenthesized its Hijri statement.
    let husked = text.replace("()", " ").replace("[]", " ");
    let mut s = husked.split_whitespace().collect::<Vec<_>>().join(" ");

    loop {
        let before = s.clone();
        s = s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '/' | ',' | ';' | ':')).to_string();
        s = strip_wrapping(&s);
        let miladi = regex!(r"(?i)\s+m\.?$").find(&s).map(|tag| tag.start());
        if let Some(tag_start) = miladi {
            s.truncate(tag_start);
        }
        if s == before {
            break;
        }
    }
    s
}

/// Remove one layer of brackets or parens wrapping the whole string.
fn strip_wrapping(s: &str) -> String {
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(inner) = s.strip_prefix(open).and_then(|rest| rest.strip_suffix(close)) {
            if !inner.contains(open) && !inner.contains(close) {
                return inner.trim().to_string();
            }
        }
    }
    s.to_string()
}

/// Last-resort parse of full timestamps and English date phrases: RFC 2822
/// feed dates (`"Sun, 12 Nov 2017 14:08:12 +0000"`), RFC 3339, then
/// `chrono-english` for the likes of `"25 Dec 2017"`. Failures resolve to
/// nothing.
fn resolve_timestamp(text: &str) -> Option<YearSpan> {
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc2822(text) {
        return Some(YearSpan::single(stamp.year()));
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(YearSpan::single(stamp.year()));
    }
    chrono_english::parse_date_string(text, chrono::Local::now(), chrono_english::Dialect::Us)
        .ok()
        .map(|stamp| YearSpan::single(stamp.year()))
}
