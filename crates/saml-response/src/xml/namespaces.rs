//! Namespace prefix bindings and path queries.
//!
//! Queries are written with fixed prefixes (`samlp:Status/samlp:StatusCode`)
//! that are resolved through a [`NamespaceBindings`] table, never through the
//! prefixes the document itself happens to declare. An IdP is free to emit
//! `<ns2:Response>` or a default-namespaced `<Response>`; both match
//! `samlp:Response` as long as the namespace URI is the protocol namespace.
//!
//! Supported syntax:
//!
//! - `a:B/a:C`: child steps relative to the context element
//! - `//a:B`: any descendant of the context element, optionally followed by
//!   further child steps (`//a:B/a:C`)

use crate::constants::{SAMLP_NS, SAMLP_PREFIX, SAML_NS, SAML_PREFIX};
use crate::error::{SamlError, SamlResult};

use super::document::{NodeId, XmlDocument};

/// Prefix to namespace URI table used to resolve query paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceBindings {
    bindings: Vec<(String, String)>,
}

impl NamespaceBindings {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Creates a table with `saml` bound to the assertion namespace and
    /// `samlp` bound to the protocol namespace.
    #[must_use]
    pub fn saml() -> Self {
        Self::new()
            .bind(SAML_PREFIX, SAML_NS)
            .bind(SAMLP_PREFIX, SAMLP_NS)
    }

    /// Binds a prefix, replacing any earlier binding for it.
    #[must_use]
    pub fn bind(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let uri = uri.into();
        match self.bindings.iter_mut().find(|(p, _)| *p == prefix) {
            Some(binding) => binding.1 = uri,
            None => self.bindings.push((prefix, uri)),
        }
        self
    }

    /// Returns the namespace URI bound to a prefix.
    #[must_use]
    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// Compiles a path expression against this table.
    pub fn compile(&self, path: &str) -> SamlResult<Path> {
        let (descendant, rest) = match path.strip_prefix("//") {
            Some(rest) => (true, rest),
            None => (false, path),
        };

        let steps = rest
            .split('/')
            .map(|step| {
                let (prefix, local_name) = step
                    .split_once(':')
                    .ok_or_else(|| SamlError::UnboundPrefix(step.to_string()))?;
                let namespace = self
                    .resolve(prefix)
                    .ok_or_else(|| SamlError::UnboundPrefix(prefix.to_string()))?;
                Ok(Step {
                    namespace: namespace.to_string(),
                    local_name: local_name.to_string(),
                })
            })
            .collect::<SamlResult<Vec<_>>>()?;

        Ok(Path { descendant, steps })
    }
}

/// A compiled path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    descendant: bool,
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    namespace: String,
    local_name: String,
}

impl Step {
    fn matches(&self, document: &XmlDocument, id: NodeId) -> bool {
        document.element(id).is(&self.namespace, &self.local_name)
    }
}

impl Path {
    /// Evaluates the path from a context element, returning matches in
    /// document order.
    #[must_use]
    pub fn select(&self, document: &XmlDocument, context: NodeId) -> Vec<NodeId> {
        let Some((first, rest)) = self.steps.split_first() else {
            return Vec::new();
        };

        let mut current: Vec<NodeId> = if self.descendant {
            document
                .descendants(context)
                .filter(|&id| first.matches(document, id))
                .collect()
        } else {
            document
                .children(context)
                .filter(|&id| first.matches(document, id))
                .collect()
        };

        for step in rest {
            current = current
                .into_iter()
                .flat_map(|id| document.children(id))
                .filter(|&id| step.matches(document, id))
                .collect();
            // Children of distinct parents never interleave, but a descendant
            // first step can yield nested contexts.
            current.sort_unstable();
            current.dedup();
        }
        current
    }

    /// Returns true if the element matches a single-step path.
    #[must_use]
    pub fn matches_element(&self, document: &XmlDocument, id: NodeId) -> bool {
        matches!(self.steps.as_slice(), [step] if step.matches(document, id))
    }
}

/// A document with namespace prefixes bound for querying.
#[derive(Debug, Clone, Copy)]
pub struct NamespaceResolver<'d> {
    document: &'d XmlDocument,
    bindings: &'d NamespaceBindings,
}

impl<'d> NamespaceResolver<'d> {
    /// Binds a table of prefixes to a document.
    #[must_use]
    pub const fn new(document: &'d XmlDocument, bindings: &'d NamespaceBindings) -> Self {
        Self { document, bindings }
    }

    /// The underlying document.
    #[must_use]
    pub const fn document(&self) -> &'d XmlDocument {
        self.document
    }

    /// Returns the root element if it matches any of the single-step paths.
    pub fn root(&self, paths: &[&str]) -> SamlResult<Option<NodeId>> {
        let root = self.document.root();
        for path in paths {
            if self.bindings.compile(path)?.matches_element(self.document, root) {
                return Ok(Some(root));
            }
        }
        Ok(None)
    }

    /// Returns the first match of a path in document order.
    pub fn first(&self, context: NodeId, path: &str) -> SamlResult<Option<NodeId>> {
        Ok(self
            .bindings
            .compile(path)?
            .select(self.document, context)
            .into_iter()
            .next())
    }

    /// Returns the union of several paths in document order.
    pub fn all(&self, context: NodeId, paths: &[&str]) -> SamlResult<Vec<NodeId>> {
        let mut found = Vec::new();
        for path in paths {
            found.extend(self.bindings.compile(path)?.select(self.document, context));
        }
        found.sort_unstable();
        found.dedup();
        Ok(found)
    }

    /// Returns the trimmed text of the first match of a path.
    pub fn text(&self, context: NodeId, path: &str) -> SamlResult<Option<&'d str>> {
        Ok(self
            .first(context, path)?
            .map(|id| self.document.element(id).text().trim()))
    }
}
