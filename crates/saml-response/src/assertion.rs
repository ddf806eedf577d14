//! Assertion location.
//!
//! A response carries its assertions either in plaintext (`saml:Assertion`)
//! or wrapped in an encryption envelope (`saml:EncryptedAssertion`). This
//! module only finds them; decrypting, verifying and interpreting them is
//! left to an [`AssertionParser`](crate::AssertionParser).

use crate::constants::paths;
use crate::error::SamlResult;
use crate::xml::{NamespaceResolver, NodeId, XmlDocument};

/// Form in which an assertion is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    /// A `saml:Assertion` element.
    Plain,
    /// A `saml:EncryptedAssertion` element.
    Encrypted,
}

/// Finds every assertion beneath `message`, plain or encrypted, in document
/// order.
pub(crate) fn locate(resolver: &NamespaceResolver<'_>, message: NodeId) -> SamlResult<Vec<NodeId>> {
    resolver.all(message, &[paths::ENCRYPTED_ASSERTIONS, paths::ASSERTIONS])
}

/// Borrowed view of an assertion element inside a response document.
#[derive(Debug, Clone, Copy)]
pub struct AssertionElement<'a> {
    document: &'a XmlDocument,
    node: NodeId,
}

impl<'a> AssertionElement<'a> {
    pub(crate) const fn new(document: &'a XmlDocument, node: NodeId) -> Self {
        Self { document, node }
    }

    /// Handle of the element within the response document.
    #[must_use]
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// Whether the assertion is plain or encrypted.
    #[must_use]
    pub fn kind(&self) -> AssertionKind {
        if self.document.element(self.node).local_name() == "EncryptedAssertion" {
            AssertionKind::Encrypted
        } else {
            AssertionKind::Plain
        }
    }

    /// Returns true for an `EncryptedAssertion`.
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        self.kind() == AssertionKind::Encrypted
    }

    /// The `ID` attribute of a plain assertion.
    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.document.element(self.node).attribute("ID")
    }

    /// Exact source text of the element, start tag through end tag.
    #[must_use]
    pub fn xml(&self) -> &'a str {
        self.document.element_source(self.node)
    }
}
