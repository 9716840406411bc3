//! Go-to-label implementation.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::hir::LabelIndex;
use crate::parser::{AstNode, LabelIdentifier, LabelLinkIdentifier, SyntaxNode};

/// Result of a go-to-label request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A label declaration to jump to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GotoTarget {
    /// Range of the label's name.
    pub range: TextRange,
    /// The label name.
    pub name: SmolStr,
}

impl From<&LabelIdentifier> for GotoTarget {
    fn from(ident: &LabelIdentifier) -> Self {
        Self {
            range: ident.range(),
            name: ident.name(),
        }
    }
}

/// Name of the label declared or linked at `offset`, if any.
pub(crate) fn label_name_at(root: &SyntaxNode, offset: TextSize) -> Option<SmolStr> {
    if offset > root.text_range().end() {
        return None;
    }
    let token = root.token_at_offset(offset).right_biased()?;
    let node = token.parent()?;
    node.ancestors().find_map(|n| {
        LabelLinkIdentifier::cast(n.clone())
            .map(|ident| ident.name())
            .or_else(|| LabelIdentifier::cast(n).map(|ident| ident.name()))
    })
}

/// Jump from a link to the first label with its name. On a label name,
/// the target is that label's first declaration.
pub fn goto_label(root: &SyntaxNode, offset: TextSize) -> GotoResult {
    let Some(name) = label_name_at(root, offset) else {
        return GotoResult::empty();
    };
    let labels = LabelIndex::build(root);
    match labels.declaration(&name) {
        Some(decl) => GotoResult::single(GotoTarget::from(decl)),
        None => GotoResult::empty(),
    }
}
