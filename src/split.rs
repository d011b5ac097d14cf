//! Mixed-calendar date statement splitting.
//!
//! Manuscript records frequently state one date in two calendars at once:
//! `"A.H. 986 (1578)"`, `"974 AH / 1566 CE"`, `"887 H (1482 M)"`. The
//! splitter finds a run of characters adjacent to a Hijri tag (`A.H.`, `AH`,
//! `H`) and separates it from the Gregorian remainder. Both sides may
//! themselves be ranges or comma lists; neither side is parsed here.
//!
//! Every attempt returns its own match object; there is no shared match
//! state, and each invocation is self-contained and reentrant.

use regex::Regex;

use crate::calendar::CalendarSystem;

/// One raw date expression decomposed by calendar.
///
/// If `hijri` is present it contains at least one digit; otherwise the whole
/// original string was treated as Gregorian-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedDateString {
    pub hijri: Option<String>,
    pub gregorian: String,
}

impl MixedDateString {
    /// The fragment for one calendar, if the record stated it.
    pub fn fragment(&self, calendar: CalendarSystem) -> Option<&str> {
        match calendar {
            CalendarSystem::Hijri => self.hijri.as_deref(),
            CalendarSystem::Gregorian => {
                if self.gregorian.trim().is_empty() { None } else { Some(&self.gregorian) }
            }
        }
    }

    /// Whether the expression stated both calendars.
    pub fn is_mixed(&self) -> bool {
        self.hijri.is_some()
    }
}

/// Split `text` into its Hijri fragment and Gregorian remainder.
///
/// The tag-before shape (`A.H. 986 …`) is tried first, then tag-after
/// (`986 A.H. …`). A candidate fragment with no digit is rejected: it is
/// incidental letters, not a year. With no acceptable fragment the Gregorian
/// side is the input unchanged.
pub(crate) fn split(text: &str) -> MixedDateString {
    let attempt = try_pattern(regex!(r"(?i)(a\.h\.|ah|h)\s+(?P<hijri>[^()/]*)"), text)
        .or_else(|| try_pattern(regex!(r"(?i)(?P<hijri>[^()/]*)\s+(a\.h\.|ah|h)"), text));

    match attempt {
        Some(matched) => {
            let mut gregorian = String::with_capacity(text.len());
            gregorian.push_str(&text[..matched.start]);
            gregorian.push_str(&text[matched.end..]);
            MixedDateString { hijri: Some(matched.fragment), gregorian }
        }
        None => MixedDateString { hijri: None, gregorian: text.to_string() },
    }
}

/// A self-contained splitter match: the byte span of the whole tagged run
/// (tag, whitespace, fragment) and the trimmed fragment text.
struct TaggedRun {
    start: usize,
    end: usize,
    fragment: String,
}

fn try_pattern(pattern: &Regex, text: &str) -> Option<TaggedRun> {
    let caps = pattern.captures(text)?;
    let fragment = caps.name("hijri")?;
    if !fragment.as_str().contains(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let whole = caps.get(0)?;
    Some(TaggedRun {
        start: whole.start(),
        end: whole.end(),
        fragment: fragment.as_str().trim().to_string(),
    })
}
