//! Element events pushed from a streaming XML reader
//!
//! `drive` runs a single forward pass over the document and calls the
//! handler on every element start and end. Text, comments and processing
//! instructions are skipped. The document must have exactly one root element
//! and every element must be closed before end of input.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ReportError;

/// Attributes of a single element, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Value of the first attribute with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, ReportError> {
        let mut entries = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            entries.push((key, value));
        }
        Ok(Self { entries })
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Receiver for element boundaries
pub trait ElementHandler {
    /// Called for each opening (or self-closing) element
    fn on_element_start(&mut self, name: &str, attributes: &Attributes);

    /// Called for each closing element, and right after the start of a self-closing one
    fn on_element_end(&mut self, name: &str);
}

/// Stream `input` through `handler` until end of document.
///
/// Returns the first structural error (malformed markup, mismatched end tag,
/// bad attribute, content outside the root element, truncated document, I/O
/// failure). Events delivered before the error stay delivered.
pub fn drive<R: BufRead, H: ElementHandler>(input: R, handler: &mut H) -> Result<(), ReportError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                open_element(depth, &mut seen_root)?;
                let name = std::str::from_utf8(start.name().as_ref())?.to_string();
                let attributes = Attributes::from_start(&start)?;
                depth += 1;
                handler.on_element_start(&name, &attributes);
            }
            Event::Empty(start) => {
                open_element(depth, &mut seen_root)?;
                let name = std::str::from_utf8(start.name().as_ref())?.to_string();
                let attributes = Attributes::from_start(&start)?;
                handler.on_element_start(&name, &attributes);
                handler.on_element_end(&name);
            }
            Event::End(end) => {
                let qname = end.name();
                let name = std::str::from_utf8(qname.as_ref())?;
                depth = depth.saturating_sub(1);
                handler.on_element_end(name);
            }
            Event::Text(text) if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) => {
                return Err(ReportError::ContentOutsideRoot);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(ReportError::NoRootElement);
    }
    if depth > 0 {
        return Err(ReportError::UnexpectedEof { open: depth });
    }

    Ok(())
}

/// Check that an element may start at `depth`, recording the root
fn open_element(depth: usize, seen_root: &mut bool) -> Result<(), ReportError> {
    if depth == 0 {
        if *seen_root {
            return Err(ReportError::MultipleRoots);
        }
        *seen_root = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every event as a string for assertions
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl ElementHandler for Recorder {
        fn on_element_start(&mut self, name: &str, attributes: &Attributes) {
            let attrs: Vec<String> = attributes
                .entries
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            self.events
                .push(format!("start {} [{}]", name, attrs.join(",")));
        }

        fn on_element_end(&mut self, name: &str) {
            self.events.push(format!("end {}", name));
        }
    }

    #[test]
    fn test_attributes_get() {
        let attrs: Attributes = [("name", "XSS"), ("SeverityIndex", "3")]
            .into_iter()
            .collect();

        assert_eq!(attrs.get("name"), Some("XSS"));
        assert_eq!(attrs.get("SeverityIndex"), Some("3"));
        assert_eq!(attrs.get("severityindex"), None);
        assert_eq!(attrs.len(), 2);
        assert!(!attrs.is_empty());
    }

    #[test]
    fn test_drive_orders_events() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<Root a="1">
  <!-- comment -->
  <Child b="x &amp; y">text</Child>
  <Leaf/>
</Root>"#;
        let mut recorder = Recorder::default();
        drive(xml.as_bytes(), &mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                "start Root [a=1]",
                "start Child [b=x & y]",
                "end Child",
                "start Leaf []",
                "end Leaf",
                "end Root",
            ]
        );
    }

    #[test]
    fn test_drive_mismatched_end_tag() {
        let xml = "<Root><Child></Other></Root>";
        let mut recorder = Recorder::default();
        let err = drive(xml.as_bytes(), &mut recorder).unwrap_err();

        assert!(matches!(err, ReportError::Xml(_)));
        assert_eq!(recorder.events, vec!["start Root []", "start Child []"]);
    }

    #[test]
    fn test_drive_bad_attribute() {
        let xml = r#"<Root a="1" a="2"></Root>"#;
        let mut recorder = Recorder::default();
        let err = drive(xml.as_bytes(), &mut recorder).unwrap_err();

        assert!(matches!(err, ReportError::Attribute(_)));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_drive_empty_input() {
        let mut recorder = Recorder::default();
        let err = drive("".as_bytes(), &mut recorder).unwrap_err();

        assert!(matches!(err, ReportError::NoRootElement));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_drive_whitespace_and_prolog_only() {
        let xml = "<?xml version=\"1.0\"?>\n  <!-- nothing here -->\n";
        let mut recorder = Recorder::default();
        let err = drive(xml.as_bytes(), &mut recorder).unwrap_err();

        assert!(matches!(err, ReportError::NoRootElement));
    }

    #[test]
    fn test_drive_rejects_plain_text() {
        let mut recorder = Recorder::default();
        let err = drive("not xml at all".as_bytes(), &mut recorder).unwrap_err();

        assert!(matches!(err, ReportError::ContentOutsideRoot));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_drive_truncated_document() {
        let xml = r#"<Root><Child a="1"><Leaf/>"#;
        let mut recorder = Recorder::default();
        let err = drive(xml.as_bytes(), &mut recorder).unwrap_err();

        assert!(matches!(err, ReportError::UnexpectedEof { open: 2 }));
        assert_eq!(
            recorder.events,
            vec!["start Root []", "start Child [a=1]", "start Leaf []", "end Leaf"]
        );
    }

    #[test]
    fn test_drive_second_root() {
        let xml = "<Root/><Root/>";
        let mut recorder = Recorder::default();
        let err = drive(xml.as_bytes(), &mut recorder).unwrap_err();

        assert!(matches!(err, ReportError::MultipleRoots));
        assert_eq!(recorder.events, vec!["start Root []", "end Root"]);
    }

    #[test]
    fn test_drive_self_closing_root() {
        let mut recorder = Recorder::default();
        drive("<Root/>\n".as_bytes(), &mut recorder).unwrap();

        assert_eq!(recorder.events, vec!["start Root []", "end Root"]);
    }
}
