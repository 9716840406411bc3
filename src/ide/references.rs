//! Find references implementation.

use text_size::{TextRange, TextSize};

use super::goto::label_name_at;
use crate::hir::LabelIndex;
use crate::parser::{AstNode, SyntaxNode};

/// Result of a find-references request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferenceResult {
    /// All references found.
    pub references: Vec<Reference>,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// A place a label name appears.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reference {
    pub range: TextRange,
    /// Whether this is the declaration (vs a link).
    pub is_definition: bool,
}

/// Every link to the label named at `offset`, in document order. With
/// `include_declaration` the canonical declaration comes first.
pub fn find_references(
    root: &SyntaxNode,
    offset: TextSize,
    include_declaration: bool,
) -> ReferenceResult {
    let Some(name) = label_name_at(root, offset) else {
        return ReferenceResult::empty();
    };
    let labels = LabelIndex::build(root);

    let declaration = include_declaration
        .then(|| labels.declaration(&name))
        .flatten()
        .map(|decl| Reference {
            range: decl.range(),
            is_definition: true,
        });
    let links = labels.references(&name).iter().map(|ident| Reference {
        range: ident.range(),
        is_definition: false,
    });

    ReferenceResult {
        references: declaration.into_iter().chain(links).collect(),
    }
}
