//! Label-link completion.

use std::sync::Arc;

use text_size::{TextRange, TextSize};

use crate::base::LineIndex;
use crate::hir::LabelIndex;
use crate::parser::{SyntaxKind, SyntaxNode};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CompletionKind {
    Label,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Label => 7, // Class
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompletionItem {
    /// The text shown and inserted.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
}

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Completions and the offset from which they replace text up to the
/// cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompletionResult {
    pub from: TextSize,
    pub items: Vec<CompletionItem>,
}

/// Suggest label names for the link being typed at `offset`.
///
/// Only offered at the end of a line that has a link: nothing but
/// whitespace may follow the cursor, and the cursor must be past the
/// link's `#`. What is already typed after the `#` decides the shape of
/// the items:
///
/// - `#|` items are `# Name`, replacing from the `#`
/// - `#  |` items are `#  Name`, keeping the typed whitespace
/// - `# Na|` items are bare names, replacing from `N`
pub fn label_link_completions(
    root: &SyntaxNode,
    text: &str,
    offset: TextSize,
) -> Option<CompletionResult> {
    let cursor = usize::from(offset);
    if cursor > text.len() || !text.is_char_boundary(cursor) {
        return None;
    }
    let line = LineIndex::new(text).line_range(offset);
    if !text[cursor..usize::from(line.end().max(offset))].trim().is_empty() {
        return None;
    }

    let hash = link_hash(root, line)?;
    if offset <= hash {
        return None;
    }

    let after_hash = &text[TextRange::new(hash + TextSize::of('#'), offset)];
    let (from, prefix) = if after_hash.is_empty() {
        (hash, "# ".to_string())
    } else if after_hash.trim().is_empty() {
        (hash, format!("#{after_hash}"))
    } else {
        let typed = after_hash.len() - after_hash.trim_start_matches([' ', '\t']).len();
        (hash + TextSize::of('#') + TextSize::new(typed as u32), String::new())
    };

    let labels = LabelIndex::build(root);
    let items: Vec<CompletionItem> = labels
        .names()
        .map(|name| {
            CompletionItem::new(format!("{prefix}{name}"), CompletionKind::Label)
                .with_detail("label")
        })
        .collect();
    tracing::trace!(from = u32::from(from), count = items.len(), "label completions");
    Some(CompletionResult { from, items })
}

/// Offset of the `#` opening a label link on `line`.
fn link_hash(root: &SyntaxNode, line: TextRange) -> Option<TextSize> {
    root.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::HASH)
        .filter(|token| line.contains_range(token.text_range()))
        .find(|token| token.parent().is_some_and(|p| p.kind() == SyntaxKind::LABEL_LINK))
        .map(|token| token.text_range().start())
}
