//! Forward-only cursor over the XML log.
//!
//! Wraps `quick_xml::Reader` and turns every read into an explicit
//! [`Advance`]. A read failure (malformed markup, undecodable attribute,
//! mismatched close tag) and a clean end of stream both come back as
//! [`Advance::Exhausted`]; callers never see a tokenizer error. Only the
//! attributes of the element just read are materialized.

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// An element start tag with its own attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,

    /// Unescaped `(name, value)` pairs in document order
    pub attributes: Vec<(String, String)>,

    /// `<name ... />`: no children and no close tag follow
    pub self_closing: bool,
}

impl Element {
    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Node kinds the scanner cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Start tag, including self-closing tags
    Open(Element),
    /// End tag
    Close,
    /// Text, comments, declarations, processing instructions...
    Other,
}

/// Result of advancing the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Node(Node),
    /// End of stream, or a read failure; the cursor stays exhausted
    Exhausted,
}

/// Pull-style reader over a JIT log
pub struct LogCursor<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    exhausted: bool,
    truncated: bool,
}

impl<R: BufRead> LogCursor<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            exhausted: false,
            truncated: false,
        }
    }

    /// Move to the next node
    ///
    /// **Public** - the only way the scanner reads the document
    pub fn advance(&mut self) -> Advance {
        if self.exhausted {
            return Advance::Exhausted;
        }

        self.buf.clear();
        let node = match self.reader.read_event_into(&mut self.buf) {
            Ok(Event::Start(start)) => read_element(&start, false).map(Node::Open),
            Ok(Event::Empty(start)) => read_element(&start, true).map(Node::Open),
            Ok(Event::End(_)) => Ok(Node::Close),
            Ok(Event::Eof) => {
                self.exhausted = true;
                return Advance::Exhausted;
            }
            Ok(_) => Ok(Node::Other),
            Err(e) => Err(e),
        };

        match node {
            Ok(node) => Advance::Node(node),
            Err(e) => {
                debug!(
                    "Read failure at byte {}, ending scan: {}",
                    self.reader.buffer_position(),
                    e
                );
                self.exhausted = true;
                self.truncated = true;
                Advance::Exhausted
            }
        }
    }

    /// True if the cursor stopped on a read failure rather than end of stream
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Copy name and attributes out of the reader's buffer
///
/// **Private** - internal helper for advance
fn read_element(start: &BytesStart<'_>, self_closing: bool) -> Result<Element, quick_xml::Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        self_closing,
    })
}
