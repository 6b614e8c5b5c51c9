//! Registry mapping parameter tag names to their kind.

use std::collections::HashMap;

use roxmltree::Node;

use super::types::ParameterKind;

/// Registry mapping parameter element names to the view that reads them.
///
/// Tags without an entry are not parameters and get skipped during enumeration.
pub struct ParameterRegistry {
    kinds: HashMap<String, ParameterKind>,
}

impl ParameterRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Register the kind for a tag name, replacing any earlier registration.
    pub fn register(&mut self, tag_name: impl Into<String>, kind: ParameterKind) {
        self.kinds.insert(tag_name.into(), kind);
    }

    /// Remove the registration for a tag name, returning its kind if it had one.
    pub fn unregister(&mut self, tag_name: &str) -> Option<ParameterKind> {
        self.kinds.remove(tag_name)
    }

    /// Kind registered for a tag name, if any.
    #[must_use]
    pub fn kind_for(&self, tag_name: &str) -> Option<ParameterKind> {
        self.kinds.get(tag_name).copied()
    }

    /// Kind for an element, looked up by its local name.
    #[must_use]
    pub fn kind_of(&self, node: Node<'_, '_>) -> Option<ParameterKind> {
        if !node.is_element() {
            return None;
        }
        self.kind_for(node.tag_name().name())
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
