//! Label index — where each label is declared and linked from.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::parser::{AstNode, LabelIdentifier, LabelLinkIdentifier, SyntaxNode};

/// Label names mapped to their declarations and references.
///
/// Names keep the order of their first declaration. For each name the
/// first declaration is the canonical one; later ones are duplicates.
#[derive(Clone, Debug, Default)]
pub struct LabelIndex {
    declarations: IndexMap<SmolStr, Vec<LabelIdentifier>>,
    references: IndexMap<SmolStr, Vec<LabelLinkIdentifier>>,
}

impl LabelIndex {
    /// Build the index in one walk over the tree.
    pub fn build(root: &SyntaxNode) -> Self {
        let mut index = Self::default();
        for node in root.descendants() {
            if let Some(ident) = LabelIdentifier::cast(node.clone()) {
                index.declarations.entry(ident.name()).or_default().push(ident);
            } else if let Some(ident) = LabelLinkIdentifier::cast(node) {
                index.references.entry(ident.name()).or_default().push(ident);
            }
        }
        tracing::trace!(
            labels = index.declarations.len(),
            links = index.references.len(),
            "built label index"
        );
        index
    }

    /// All declarations of `name`, in document order.
    pub fn get(&self, name: &str) -> Option<&[LabelIdentifier]> {
        self.declarations.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    /// The canonical (first) declaration of `name`.
    pub fn declaration(&self, name: &str) -> Option<&LabelIdentifier> {
        self.declarations.get(name).and_then(|decls| decls.first())
    }

    /// Whether `ident` is the first declaration of its name.
    pub fn is_canonical(&self, ident: &LabelIdentifier) -> bool {
        self.declaration(&ident.name())
            .is_some_and(|decl| decl.range() == ident.range())
    }

    /// Label names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &SmolStr> {
        self.declarations.keys()
    }

    /// Every declaration after the first of its name.
    pub fn duplicates(&self) -> impl Iterator<Item = &LabelIdentifier> {
        self.declarations.values().flat_map(|decls| decls.iter().skip(1))
    }

    /// Links naming `name`, declared or not.
    pub fn references(&self, name: &str) -> &[LabelLinkIdentifier] {
        self.references.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Links whose target no label declares.
    pub fn unresolved(&self) -> impl Iterator<Item = &LabelLinkIdentifier> {
        self.references
            .iter()
            .filter(|(name, _)| !self.declarations.contains_key(*name))
            .flat_map(|(_, links)| links.iter())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Build the [`LabelIndex`] of a parsed document.
pub fn build_label_index(root: &SyntaxNode) -> LabelIndex {
    LabelIndex::build(root)
}
