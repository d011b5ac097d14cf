extern crate self as taqwim;

use regex::{Captures, Regex};

#[macro_use]
mod macros;
mod api;
mod calendar;
mod extract;
mod project;
mod range;
mod rules;
mod split;

pub use api::{
    parse_delimited_pair, parse_fgdc, parse_flat_fields, parse_free_text, parse_marc_008,
    parse_mods, parse_tei, parse_year_list, project_hijri, project_hijri_text,
    split_mixed_calendar,
};
pub use calendar::{CalendarSystem, convert, to_gregorian, to_hijri};
pub use range::{EARLIEST_VALID_YEAR, RangeOrderError, build_range, latest_valid_year};
pub use split::MixedDateString;

// --- Internal types ---------------------------------------------------------

/// A resolved pair of endpoint years, before the range builder has validated
/// it. `first == last` for a single year. Endpoints are in whatever calendar
/// the source text used; a span never mixes calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearSpan {
    pub first: i32,
    pub last: i32,
}

impl YearSpan {
    pub fn new(first: i32, last: i32) -> Self {
        YearSpan { first, last }
    }

    /// A span covering exactly one year.
    pub fn single(year: i32) -> Self {
        YearSpan { first: year, last: year }
    }
}

/// A phrase rule: an anchored pattern and a production that turns its capture
/// groups into a span. Rules are tried in table order; the first whose pattern
/// matches and whose production returns `Some` wins.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub production: fn(&Captures) -> Option<YearSpan>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("production", &"<function>")
            .finish()
    }
}
