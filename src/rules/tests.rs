use crate::YearSpan;
use crate::rules::{earliest_year, latest_year, resolve};

#[test]
fn phrase_examples_resolving() {
    // Array of (input_string, (first, last))
    let cases: Vec<(&str, (i32, i32))> = vec![
        // bare and decorated single years
        ("2019", (2019, 2019)),
        ("-914", (-914, -914)),
        ("1894.", (1894, 1894)),
        ("ca. 1670", (1670, 1670)),
        ("1258?", (1258, 1258)),
        ("[1904]", (1904, 1904)),
        ("(1578)", (1578, 1578)),
        ("1890-", (1890, 1890)),
        ("1482 M", (1482, 1482)),
        ("1566 CE", (1566, 1566)),
        ("1482 AD", (1482, 1482)),
        // fully-specified dates
        ("12/25/00", (2000, 2000)),
        ("5-1-99", (1999, 1999)),
        ("19990211", (1999, 1999)),
        ("20000222", (2000, 2000)),
        ("1578-03-01", (1578, 1578)),
        // era-tagged years
        ("1666 B.C.", (-1666, -1666)),
        ("300 B.C", (-300, -300)),
        ("662 BCE", (-662, -662)),
        // spans
        ("2017-2019", (2017, 2019)),
        ("1886-1887", (1886, 1887)),
        ("1871-72", (1871, 1872)),
        ("1123?-1225", (1123, 1225)),
        ("1711?-1810", (1711, 1810)),
        ("1880-01", (1880, 1880)),
        // comma lists
        ("1224, 1259", (1224, 1259)),
        ("1269, 1272, 1273", (1269, 1273)),
        ("1853, 1855, 1856 M", (1853, 1856)),
        // worded phrases
        ("between 1830 and 1899?", (1830, 1899)),
        ("between 300 and 150 B.C", (-300, -150)),
        ("1602 or 1603", (1602, 1603)),
        ("1838 or 39", (1838, 1839)),
        // centuries and decades
        ("18th century CE", (1700, 1799)),
        ("17th century", (1600, 1699)),
        ("9th century B.C.", (-999, -900)),
        ("ca. 10th–9th century B.C.", (-1099, -900)),
        ("17--", (1700, 1799)),
        ("15uu", (1500, 1599)),
        ("08uu", (800, 899)),
        ("196u", (1960, 1969)),
        ("193u", (1930, 1939)),
        ("1960s", (1960, 1969)),
        // full timestamps
        ("Sun, 12 Nov 2017 14:08:12 +0000", (2017, 2017)),
        ("2017-11-12T14:08:12+00:00", (2017, 2017)),
    ];

    for (raw, (first, last)) in cases {
        assert_eq!(resolve(raw), Some(YearSpan::new(first, last)), "for {raw:?}");
    }
}

#[test]
fn unresolvable_phrases() {
    let cases =
        ["", "   ", "ca. late 19th century", "uuuu", "    ", "????", "no date recorded"];
    for raw in cases {
        assert_eq!(resolve(raw), None, "for {raw:?}");
    }
}

#[test]
fn misordered_span_is_still_a_span() {
    // The resolver reports what the text says; the range builder decides
    // whether to raise.
    assert_eq!(resolve("1539-1292"), Some(YearSpan::new(1539, 1292)));
}

#[test]
fn earliest_and_latest_read_the_span_edges() {
    assert_eq!(earliest_year("08uu"), Some(800));
    assert_eq!(latest_year("08uu"), Some(899));
    assert_eq!(earliest_year("1554"), Some(1554));
    assert_eq!(latest_year("    "), None);
}

#[test]
fn splitter_husks_are_ignored() {
    assert_eq!(resolve("ca. 1670 ()"), Some(YearSpan::single(1670)));
    assert_eq!(resolve("(1809, 1843)"), Some(YearSpan::new(1809, 1843)));
    assert_eq!(resolve("/ 1231 C.E."), Some(YearSpan::single(1231)));
}
