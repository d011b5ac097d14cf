//! Flat begin/end column extraction (museum CSV exports).

use crate::range::{RangeOrderError, build_range};
use crate::rules::helpers;

/// Read one flat field as a year.
///
/// A field with at least one digit reads as its leading integer, defaulting
/// to zero when the digits are not leading (`"not999"` → 0). A field with no
/// digits at all is wholly absent.
fn field_year(field: Option<&str>) -> Option<i32> {
    let text = field?.trim();
    if !text.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(helpers::leading_int(text).unwrap_or(0))
}

/// Extract the year range from a pair of flat begin/end columns.
pub(crate) fn parse(begin: Option<&str>, end: Option<&str>) -> Result<Vec<i32>, RangeOrderError> {
    build_range(field_year(begin), field_year(end))
}

/// Extract the year range from a single `begin<sep>end` column
/// (`"-850|-700"`).
pub(crate) fn parse_delimited_pair(value: &str, separator: char) -> Result<Vec<i32>, RangeOrderError> {
    let mut parts = value.splitn(2, separator);
    let begin = parts.next();
    let end = parts.next();
    build_range(field_year(begin), field_year(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_pairs_build_ranges() {
        assert_eq!(parse(Some("-2"), Some("1")).unwrap(), vec![-2, -1, 0, 1]);
        assert_eq!(parse(Some("0"), Some("3")).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(parse(Some("666"), Some("666")).unwrap(), vec![666]);
        assert_eq!(parse(Some("300"), Some("319")).unwrap(), (300..=319).collect::<Vec<i32>>());
    }

    #[test]
    fn one_empty_side_is_a_single_year() {
        assert_eq!(parse(Some("300"), None).unwrap(), vec![300]);
        assert_eq!(parse(None, Some("666")).unwrap(), vec![666]);
    }

    #[test]
    fn both_sides_empty_is_no_range() {
        assert_eq!(parse(None, None).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn digitless_text_is_wholly_absent() {
        assert_eq!(parse(Some("not_a_number"), Some("me_too")).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn text_with_trailing_digits_reads_as_zero() {
        assert_eq!(parse(Some("not999"), Some("year of 1939")).unwrap(), vec![0]);
    }

    #[test]
    fn misordered_pair_raises() {
        let err = parse(Some("1539"), Some("1292")).unwrap_err();
        assert_eq!(err.to_string(), "unable to create year range array from 1539, 1292");
    }

    #[test]
    fn out_of_bounds_future_year_is_dropped() {
        assert_eq!(parse(Some("1539"), Some("2050")).unwrap(), vec![1539]);
    }

    #[test]
    fn delimited_pair_splits_on_the_separator() {
        assert_eq!(parse_delimited_pair("300|319", '|').unwrap(), (300..=319).collect::<Vec<i32>>());
        assert_eq!(parse_delimited_pair("666|", '|').unwrap(), vec![666]);
        assert_eq!(parse_delimited_pair("-850|-700", '|').unwrap(), (-850..=-700).collect::<Vec<i32>>());
    }

    #[test]
    fn delimited_pair_below_bounds_is_dropped() {
        assert_eq!(parse_delimited_pair("-2100|-2000", '|').unwrap(), Vec::<i32>::new());
    }
}
