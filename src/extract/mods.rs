//! MODS `originInfo` date extraction.

use crate::extract::{DateElement, collect_elements};
use crate::range::{RangeOrderError, build_range};
use crate::rules;

/// Date element names in preference order.
const DATE_ELEMENTS: [&str; 3] = ["dateCreated", "dateValid", "dateIssued"];

/// Extract the year range from a MODS record.
///
/// For each date-element name under `originInfo`: prefer an explicit
/// `point="start"`/`point="end"` pair, else a `keyDate="yes"` element, else
/// the first element's bare text. The first element name yielding any usable
/// date wins.
pub(crate) fn parse(xml: &str) -> Result<Vec<i32>, RangeOrderError> {
    for name in DATE_ELEMENTS {
        let elements = collect_elements(xml, &["originInfo", name]);
        if elements.is_empty() {
            continue;
        }
        let range = element_range(&elements)?;
        if !range.is_empty() {
            return Ok(range);
        }
    }
    Ok(Vec::new())
}

fn element_range(elements: &[DateElement]) -> Result<Vec<i32>, RangeOrderError> {
    let start = elements.iter().find(|element| element.attr("point") == Some("start"));
    let end = elements.iter().find(|element| element.attr("point") == Some("end"));
    if start.is_some() || end.is_some() {
        let first = start.and_then(|element| rules::earliest_year(element.text.trim()));
        let last = end.and_then(|element| rules::latest_year(element.text.trim()));
        return build_range(first, last);
    }

    if let Some(key_date) = elements.iter().find(|element| element.attr("keyDate") == Some("yes")) {
        if let Some(span) = rules::resolve(key_date.text.trim()) {
            return build_range(Some(span.first), Some(span.last));
        }
    }

    for element in elements {
        if let Some(span) = rules::resolve(element.text.trim()) {
            return build_range(Some(span.first), Some(span.last));
        }
    }
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dates: &str) -> String {
        format!(
            r#"<mods xmlns="http://www.loc.gov/mods/v3">
              <originInfo>{dates}</originInfo>
            </mods>"#
        )
    }

    #[test]
    fn start_end_pair_is_preferred() {
        let xml = record(
            r#"<dateCreated keyDate="yes">whenever</dateCreated>
               <dateCreated point="start">1880</dateCreated>
               <dateCreated point="end">1883</dateCreated>"#,
        );
        assert_eq!(parse(&xml).unwrap(), vec![1880, 1881, 1882, 1883]);
    }

    #[test]
    fn key_date_is_used_without_a_pair() {
        let xml = record(r#"<dateIssued keyDate="yes">1554</dateIssued>"#);
        assert_eq!(parse(&xml).unwrap(), vec![1554]);
    }

    #[test]
    fn bare_text_is_the_last_resort() {
        let xml = record("<dateCreated>17th century</dateCreated>");
        assert_eq!(parse(&xml).unwrap(), (1600..=1699).collect::<Vec<i32>>());
    }

    #[test]
    fn first_usable_element_name_wins() {
        let xml = record(
            r#"<dateCreated>undetermined</dateCreated>
               <dateValid>1920</dateValid>
               <dateIssued>1910</dateIssued>"#,
        );
        assert_eq!(parse(&xml).unwrap(), vec![1920]);
    }

    #[test]
    fn start_only_pair_is_a_single_year() {
        let xml = record(r#"<dateIssued point="start">196u</dateIssued>"#);
        assert_eq!(parse(&xml).unwrap(), vec![1960]);
    }

    #[test]
    fn record_without_dates_yields_nothing() {
        assert_eq!(parse(&record("<publisher>n/a</publisher>")).unwrap(), Vec::<i32>::new());
    }
}
