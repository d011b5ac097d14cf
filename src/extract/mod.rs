//! Schema-specific extractors.
//!
//! One procedure per source schema, each locating the raw year substrings in
//! a structured record and funneling them through the resolver and the range
//! builder. The XML walkers match on local element names, so namespace
//! prefixes (`fgdc:`, `mods:`, `tei:`) never matter. Malformed XML degrades
//! to an empty result like any other unparseable input.

pub(crate) mod fgdc;
pub(crate) mod flat;
pub(crate) mod marc;
pub(crate) mod mods;
pub(crate) mod tei;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An element matched during a walk: its text content and attributes.
#[derive(Debug, Clone)]
pub(crate) struct DateElement {
    pub text: String,
    attrs: Vec<(String, String)>,
}

impl DateElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

/// Collect every element whose local-name path ends with `suffix`, in
/// document order.
pub(crate) fn collect_elements(xml: &str, suffix: &[&str]) -> Vec<DateElement> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut found: Vec<DateElement> = Vec::new();
    // Depth of the element currently collecting text, if any.
    let mut collecting: Option<usize> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                path.push(local_name(&start));
                if collecting.is_none() && path_ends_with(&path, suffix) {
                    collecting = Some(path.len());
                    found.push(DateElement { text: String::new(), attrs: attributes(&start) });
                }
            }
            Ok(Event::Empty(start)) => {
                path.push(local_name(&start));
                if collecting.is_none() && path_ends_with(&path, suffix) {
                    found.push(DateElement { text: String::new(), attrs: attributes(&start) });
                }
                path.pop();
            }
            Ok(Event::Text(text)) => {
                if collecting.is_some() {
                    if let Some(element) = found.last_mut() {
                        element.text.push_str(&String::from_utf8_lossy(&text));
                    }
                }
            }
            Ok(Event::End(_)) => {
                if collecting == Some(path.len()) {
                    collecting = None;
                }
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(error) => {
                tracing::debug!(%error, "malformed record XML, extraction abandoned");
                return Vec::new();
            }
            Ok(_) => {}
        }
    }
    found
}

fn path_ends_with(path: &[String], suffix: &[&str]) -> bool {
    suffix.len() <= path.len()
        && path[path.len() - suffix.len()..].iter().zip(suffix).all(|(have, want)| have == want)
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn attributes(start: &BytesStart<'_>) -> Vec<(String, String)> {
    start
        .attributes()
        .filter_map(Result::ok)
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = String::from_utf8_lossy(&attr.value).into_owned();
            (key, value)
        })
        .collect()
}
