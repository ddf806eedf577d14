//! Owned, namespace-resolved XML element tree.
//!
//! The tree is built in one pass over the source with quick-xml's
//! `NsReader`. Elements are stored in document order, so a [`NodeId`]
//! comparison is a document-order comparison and the descendants of an
//! element occupy a contiguous run of ids directly after it.

use std::ops::Range;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::config::ParserConfig;
use crate::error::{SamlError, SamlResult};

/// Handle to an element of an [`XmlDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the element in document order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single element of the tree.
#[derive(Debug, Clone)]
pub struct Element {
    namespace: Option<String>,
    local_name: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    last_descendant: usize,
    span: Range<usize>,
}

impl Element {
    /// Resolved namespace URI, if the element is in a namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local (unprefixed) element name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the unescaped value of the attribute with the given name.
    ///
    /// The name is matched exactly as written in the source, so unprefixed
    /// SAML attributes such as `ID` or `Value` are looked up by their bare
    /// name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated character data directly inside this element.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parent element, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Byte range of the element (start tag through end tag) in the source.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns true if the element has the given namespace and local name.
    #[must_use]
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }
}

/// Immutable XML document: the exact source text plus its element tree.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    source: String,
    elements: Vec<Element>,
}

impl XmlDocument {
    /// Parses raw bytes into a document, applying the configured limits.
    pub fn parse(xml: &[u8], config: &ParserConfig) -> SamlResult<Self> {
        if xml.len() > config.max_document_size {
            return Err(SamlError::DocumentTooLarge {
                size: xml.len(),
                limit: config.max_document_size,
            });
        }
        let source = std::str::from_utf8(xml)?.to_owned();
        Self::parse_str(source, config)
    }

    /// Parses owned text into a document, applying the configured limits.
    pub fn parse_str(source: String, config: &ParserConfig) -> SamlResult<Self> {
        if source.len() > config.max_document_size {
            return Err(SamlError::DocumentTooLarge {
                size: source.len(),
                limit: config.max_document_size,
            });
        }

        let elements = build_tree(&source, config)?;
        if elements.is_empty() {
            return Err(SamlError::XmlParse("document has no root element".to_string()));
        }

        tracing::trace!(elements = elements.len(), bytes = source.len(), "XML document built");
        Ok(Self { source, elements })
    }

    /// The exact source text the document was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the element behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was produced by a different document and is out of
    /// range for this one. Use [`XmlDocument::get`] for a checked lookup.
    #[must_use]
    pub fn element(&self, id: NodeId) -> &Element {
        &self.elements[id.0]
    }

    /// Returns the element behind a handle, or `None` if the handle is out
    /// of range for this document.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the document has no elements. A successfully parsed
    /// document always has a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Child elements in document order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.element(id).children.iter().copied()
    }

    /// All descendant elements in document order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        (id.0 + 1..=self.element(id).last_descendant).map(NodeId)
    }

    /// Source text of a single element.
    #[must_use]
    pub fn element_source(&self, id: NodeId) -> &str {
        &self.source[self.element(id).span()]
    }
}

fn build_tree(source: &str, config: &ParserConfig) -> SamlResult<Vec<Element>> {
    let mut reader = NsReader::from_str(source);
    let mut elements: Vec<Element> = Vec::new();
    let mut open: Vec<NodeId> = Vec::new();
    // The reader skips a leading byte order mark without counting it.
    let offset = if source.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let is_element = matches!(event, Event::Start(_) | Event::Empty(_));
        let namespace = element_namespace(resolved, is_element)?;
        let end = reader.buffer_position() as usize + offset;

        match event {
            Event::Start(e) => {
                if open.len() >= config.max_depth {
                    return Err(SamlError::DepthExceeded(config.max_depth));
                }
                let start = end - (e.len() + 2);
                let id = push_element(&mut elements, &open, namespace, &e, start..end)?;
                open.push(id);
            }
            Event::Empty(e) => {
                if open.len() >= config.max_depth {
                    return Err(SamlError::DepthExceeded(config.max_depth));
                }
                let start = end - (e.len() + 3);
                push_element(&mut elements, &open, namespace, &e, start..end)?;
            }
            Event::End(_) => {
                if let Some(id) = open.pop() {
                    let last = elements.len() - 1;
                    let element = &mut elements[id.0];
                    element.span.end = end;
                    element.last_descendant = last;
                }
            }
            Event::Text(e) => match open.last() {
                Some(id) => elements[id.0].text.push_str(&e.unescape()?),
                None if e.iter().all(u8::is_ascii_whitespace) => {}
                None => return Err(outside_root()),
            },
            Event::CData(e) => match open.last() {
                Some(id) => elements[id.0].text.push_str(std::str::from_utf8(&e)?),
                None => return Err(outside_root()),
            },
            Event::DocType(_) => {
                if !config.allow_doctype {
                    return Err(SamlError::DoctypeNotAllowed);
                }
            }
            Event::Eof => break,
            // Declarations, processing instructions and comments carry no data.
            _ => {}
        }
    }

    if !open.is_empty() {
        return Err(SamlError::XmlParse("unexpected end of document".to_string()));
    }
    Ok(elements)
}

fn outside_root() -> SamlError {
    SamlError::XmlParse("character data outside the root element".to_string())
}

fn push_element(
    elements: &mut Vec<Element>,
    open: &[NodeId],
    namespace: Option<String>,
    start: &BytesStart<'_>,
    span: Range<usize>,
) -> SamlResult<NodeId> {
    let id = NodeId(elements.len());
    let parent = open.last().copied();
    if parent.is_none() && id.0 > 0 {
        return Err(SamlError::XmlParse("multiple root elements".to_string()));
    }

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    let local_name = std::str::from_utf8(start.local_name().as_ref())?.to_owned();
    elements.push(Element {
        namespace,
        local_name,
        attributes,
        text: String::new(),
        parent,
        children: Vec::new(),
        last_descendant: id.0,
        span,
    });
    if let Some(parent) = parent {
        elements[parent.0].children.push(id);
    }
    Ok(id)
}

fn element_namespace(resolved: ResolveResult<'_>, is_element: bool) -> SamlResult<Option<String>> {
    if !is_element {
        return Ok(None);
    }
    match resolved {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(std::str::from_utf8(uri)?.to_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(SamlError::XmlParse(format!(
            "undeclared namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}
