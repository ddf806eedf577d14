//! XML document model and namespace-aware queries.
//!
//! [`XmlDocument`] owns the source text and an element tree built from it;
//! [`NamespaceResolver`] binds the `saml`/`samlp` prefixes to a document so
//! the protocol parsers can express their lookups as short path queries.

mod document;
mod namespaces;

pub use document::{Element, NodeId, XmlDocument};
pub use namespaces::{NamespaceBindings, NamespaceResolver, Path};
