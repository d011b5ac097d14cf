//! Public callable surface of the engine.
//!
//! Every function is a deterministic, side-effect-free transformation from
//! already-isolated field text to a year range. The hosting pipeline locates
//! XML records and CSV columns; nothing here does I/O. Two-tier failure
//! policy throughout: noisy or absent dates degrade to an empty range, and
//! only an explicit misordered begin/end pair raises [`RangeOrderError`].

use crate::range::{RangeOrderError, build_range};
use crate::split::MixedDateString;
use crate::{extract, project, rules, split};

/// Resolve a free-text date expression to its year range.
///
/// Semicolon-delimited year lists are taken literally; anything else goes
/// through the phrase grammar (`"ca. 1670"`, `"between 300 and 150 B.C"`,
/// `"17--"`, `"196u"`, `"1602 or 1603"`, …). Phrases the grammar cannot
/// resolve yield an empty range, never an error.
///
/// # Example
/// ```
/// use taqwim::parse_free_text;
///
/// let years = parse_free_text(Some("between 1830 and 1899?")).unwrap();
/// assert_eq!(years.first(), Some(&1830));
/// assert_eq!(years.last(), Some(&1899));
/// assert_eq!(years.len(), 70);
///
/// assert!(parse_free_text(Some("ca. late 19th century")).unwrap().is_empty());
/// ```
///
/// # Errors
///
/// [`RangeOrderError`] when the text states an explicit span whose begin
/// year is after its end year.
pub fn parse_free_text(text: Option<&str>) -> Result<Vec<i32>, RangeOrderError> {
    let Some(text) = text else {
        return Ok(Vec::new());
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.contains(';') {
        return Ok(year_list(trimmed));
    }
    match rules::resolve(trimmed) {
        Some(span) => build_range(Some(span.first), Some(span.last)),
        None => {
            tracing::debug!(input = %trimmed, "no determinable date");
            Ok(Vec::new())
        }
    }
}

/// Parse a strict `yyyy; yyyy; yyyy` year list.
///
/// After stripping spaces the whole string must consist of digits, dashes
/// and semicolons; any other character anywhere yields an empty result
/// rather than a partial parse. Years are taken literally, with no bounds
/// check and no gap filling.
pub fn parse_year_list(text: &str) -> Vec<i32> {
    year_list(text)
}

fn year_list(text: &str) -> Vec<i32> {
    let compact: String = text.chars().filter(|c| *c != ' ').collect();
    if compact.is_empty() || !regex!(r"^[0-9;-]+$").is_match(&compact) {
        return Vec::new();
    }
    compact.split(';').map(|piece| rules::helpers::leading_int(piece).unwrap_or(0)).collect()
}

/// Extract the year range from bytes 06-14 of a MARC 008 control field.
///
/// # Example
/// ```
/// use taqwim::parse_marc_008;
///
/// assert_eq!(parse_marc_008("s1554    ").unwrap(), vec![1554]);
/// assert!(parse_marc_008("a19992000").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// [`RangeOrderError`] for a misordered explicit pair; unrecognized date-type
/// codes yield an empty range instead.
pub fn parse_marc_008(field: &str) -> Result<Vec<i32>, RangeOrderError> {
    extract::marc::parse(field)
}

/// Extract the year range from a serialized FGDC record
/// (`idinfo/timeperd/timeinfo`).
///
/// # Errors
///
/// [`RangeOrderError`] for a misordered begin/end pair.
pub fn parse_fgdc(xml: &str) -> Result<Vec<i32>, RangeOrderError> {
    extract::fgdc::parse(xml)
}

/// Extract the year range from a serialized MODS record
/// (`originInfo` date elements).
///
/// # Errors
///
/// [`RangeOrderError`] for a misordered start/end pair.
pub fn parse_mods(xml: &str) -> Result<Vec<i32>, RangeOrderError> {
    extract::mods::parse(xml)
}

/// Extract the year range from a serialized TEI record (`origDate`).
///
/// # Errors
///
/// [`RangeOrderError`] for a misordered attribute pair.
pub fn parse_tei(xml: &str) -> Result<Vec<i32>, RangeOrderError> {
    extract::tei::parse(xml)
}

/// Extract the year range from flat begin/end columns.
///
/// A column with at least one digit reads as its leading integer (`"not999"`
/// reads as 0); a column with no digits is wholly absent.
///
/// # Errors
///
/// [`RangeOrderError`] for a misordered pair.
pub fn parse_flat_fields(begin: Option<&str>, end: Option<&str>) -> Result<Vec<i32>, RangeOrderError> {
    extract::flat::parse(begin, end)
}

/// Extract the year range from a single delimited `begin|end` column.
///
/// # Errors
///
/// [`RangeOrderError`] for a misordered pair.
pub fn parse_delimited_pair(value: &str, separator: char) -> Result<Vec<i32>, RangeOrderError> {
    extract::flat::parse_delimited_pair(value, separator)
}

/// Split a raw date expression into its Hijri fragment and Gregorian
/// remainder.
///
/// # Example
/// ```
/// use taqwim::split_mixed_calendar;
///
/// let mixed = split_mixed_calendar("A.H. 986 (1578)");
/// assert_eq!(mixed.hijri.as_deref(), Some("986"));
/// assert!(mixed.gregorian.contains("1578"));
/// ```
pub fn split_mixed_calendar(text: &str) -> MixedDateString {
    split::split(text)
}

/// Project an already-resolved Gregorian year range into the Hijri calendar.
///
/// # Example
/// ```
/// use taqwim::project_hijri;
///
/// assert_eq!(project_hijri(&[2010, 2011, 2012]), vec![1431, 1432, 1433, 1434]);
/// ```
pub fn project_hijri(years: &[i32]) -> Vec<i32> {
    project::project(years)
}

/// Resolve a raw date expression to a Hijri year range, trusting an explicit
/// Hijri fragment over conversion.
///
/// # Errors
///
/// [`RangeOrderError`] when the stated span is misordered.
pub fn project_hijri_text(text: &str) -> Result<Vec<i32>, RangeOrderError> {
    project::project_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semicolon_lists_are_taken_literally() {
        assert_eq!(
            parse_free_text(Some("1880; 1881; 1882; 1883; 1884")).unwrap(),
            vec![1880, 1881, 1882, 1883, 1884]
        );
        assert_eq!(parse_free_text(Some("-881; -880; -879")).unwrap(), vec![-881, -880, -879]);
    }

    #[test]
    fn phrases_resolve_through_the_grammar() {
        let cases: Vec<(&str, Vec<i32>)> = vec![
            ("2019", vec![2019]),
            ("12/25/00", vec![2000]),
            ("-914", vec![-914]),
            ("914 B.C.", vec![-914]),
            ("2017-2019", vec![2017, 2018, 2019]),
            ("between 1830 and 1899?", (1830..=1899).collect()),
            ("196u", (1960..=1969).collect()),
            ("17--", (1700..=1799).collect()),
            ("1602 or 1603", vec![1602, 1603]),
            ("between 300 and 150 B.C", (-300..=-150).collect()),
            ("18th century CE", (1700..=1799).collect()),
            ("ca. 9th–8th century B.C.", (-999..=-800).collect()),
            ("Sun, 12 Nov 2017 14:08:12 +0000", vec![2017]),
        ];
        for (raw, expected) in cases {
            assert_eq!(parse_free_text(Some(raw)).unwrap(), expected, "for {raw:?}");
        }
    }

    #[test]
    fn unresolvable_phrases_are_empty_not_errors() {
        assert_eq!(parse_free_text(Some("ca. late 19th century")).unwrap(), Vec::<i32>::new());
        assert_eq!(parse_free_text(Some("")).unwrap(), Vec::<i32>::new());
        assert_eq!(parse_free_text(None).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn out_of_bounds_years_resolve_to_absence() {
        assert_eq!(parse_free_text(Some("9999")).unwrap(), Vec::<i32>::new());
        assert_eq!(parse_free_text(Some("-1666")).unwrap(), Vec::<i32>::new());
        assert_eq!(parse_free_text(Some("1666 B.C.")).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn bc_span_straddling_the_bounds_floor_keeps_the_surviving_endpoint() {
        // The resolver reads "ca. 10th-9th century B.C." as -1099..-900; the
        // bounds window then drops the endpoint below -999.
        assert_eq!(parse_free_text(Some("ca. 10th–9th century B.C.")).unwrap(), vec![-900]);
    }

    #[test]
    fn misordered_explicit_span_raises() {
        let err = parse_free_text(Some("1539-1292")).unwrap_err();
        assert_eq!(err.to_string(), "unable to create year range array from 1539, 1292");
    }

    #[test]
    fn year_list_rejects_stray_characters_outright() {
        assert_eq!(parse_year_list("ca. late 19th century"), Vec::<i32>::new());
        assert_eq!(parse_year_list("1880; 1881x"), Vec::<i32>::new());
        assert_eq!(parse_year_list("1880; 1881; 1882"), vec![1880, 1881, 1882]);
    }

    #[test]
    fn mixed_statement_gregorian_side_resolves_after_split() {
        let mixed = split_mixed_calendar("887 H (1482 M)");
        assert_eq!(parse_free_text(Some(&mixed.gregorian)).unwrap(), vec![1482]);
        assert_eq!(parse_free_text(mixed.hijri.as_deref()).unwrap(), vec![887]);
    }
}
