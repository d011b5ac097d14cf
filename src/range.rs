//! Year bounds and inclusive range construction.
//!
//! This is the engine's single raising path: an explicit, in-bounds begin/end
//! pair that is misordered signals a data-quality defect the caller must see.
//! Everything else degrades to an empty sequence.

use chrono::{Datelike, Local};
use thiserror::Error;

/// Earliest year treated as plausible catalog data.
pub const EARLIEST_VALID_YEAR: i32 = -999;

/// Latest year treated as plausible catalog data: two years past the current
/// one, so near-future imprints survive while OCR overshoots do not.
pub fn latest_valid_year() -> i32 {
    Local::now().year() + 2
}

/// An explicit begin/end pair whose begin year is after its end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unable to create year range array from {first}, {last}")]
pub struct RangeOrderError {
    pub first: i32,
    pub last: i32,
}

pub(crate) fn year_in_bounds(year: i32) -> bool {
    (EARLIEST_VALID_YEAR..=latest_valid_year()).contains(&year)
}

/// Build the inclusive year sequence from `first` to `last`.
///
/// Endpoints outside the bounds window are dropped individually (uncertain
/// source data commonly overshoots; a typo'd endpoint should not sink the
/// whole field). Both absent, or both out of bounds, yields an empty
/// sequence. A single surviving endpoint yields a one-year sequence.
///
/// # Errors
///
/// `RangeOrderError` when both endpoints survive validation and
/// `first > last`.
pub fn build_range(first: Option<i32>, last: Option<i32>) -> Result<Vec<i32>, RangeOrderError> {
    let first = first.filter(|&year| {
        let ok = year_in_bounds(year);
        if !ok {
            tracing::debug!(year, "first year out of bounds, dropped");
        }
        ok
    });
    let last = last.filter(|&year| {
        let ok = year_in_bounds(year);
        if !ok {
            tracing::debug!(year, "last year out of bounds, dropped");
        }
        ok
    });

    match (first, last) {
        (None, None) => Ok(Vec::new()),
        (Some(year), None) | (None, Some(year)) => Ok(vec![year]),
        (Some(first), Some(last)) if first > last => Err(RangeOrderError { first, last }),
        (Some(first), Some(last)) => Ok((first..=last).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_absent_is_empty() {
        assert_eq!(build_range(None, None), Ok(vec![]));
    }

    #[test]
    fn single_endpoint_is_singleton() {
        assert_eq!(build_range(Some(300), None), Ok(vec![300]));
        assert_eq!(build_range(None, Some(666)), Ok(vec![666]));
    }

    #[test]
    fn ordered_pair_is_inclusive() {
        assert_eq!(build_range(Some(-2), Some(1)), Ok(vec![-2, -1, 0, 1]));
        assert_eq!(build_range(Some(666), Some(666)), Ok(vec![666]));
        assert_eq!(build_range(Some(1972), Some(1975)), Ok(vec![1972, 1973, 1974, 1975]));
    }

    #[test]
    fn misordered_pair_raises_with_both_values() {
        let err = build_range(Some(1539), Some(1292)).unwrap_err();
        assert_eq!(err, RangeOrderError { first: 1539, last: 1292 });
        assert_eq!(err.to_string(), "unable to create year range array from 1539, 1292");
    }

    #[test]
    fn out_of_bounds_endpoint_is_dropped() {
        assert_eq!(build_range(Some(1539), Some(2050)), Ok(vec![1539]));
        assert_eq!(build_range(Some(-2100), Some(1)), Ok(vec![1]));
        assert_eq!(build_range(Some(-2100), Some(-2000)), Ok(vec![]));
        assert_eq!(build_range(Some(2725), None), Ok(vec![]));
    }

    #[test]
    fn ranges_are_ascending_and_gap_free() {
        let pairs = [(-999, -990), (-3, 4), (0, 0), (1490, 1510), (1999, 2001)];
        for (first, last) in pairs {
            let range = build_range(Some(first), Some(last)).unwrap();
            assert_eq!(range.len(), (last - first + 1) as usize);
            assert_eq!(range.first(), Some(&first));
            assert_eq!(range.last(), Some(&last));
            for pair in range.windows(2) {
                assert_eq!(pair[1], pair[0] + 1);
            }
        }
    }
}
