//! Folding ranges for labels and dialogue lines with nested blocks.

use text_size::TextRange;

use crate::base::LineIndex;
use crate::parser::{SyntaxKind, SyntaxNode, fold_range};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FoldingKind {
    Label,
    Statement,
    Reply,
}

/// A collapsible region. Lines are 0-based.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FoldingRange {
    pub range: TextRange,
    pub start_line: u32,
    pub end_line: u32,
    pub kind: FoldingKind,
}

/// Folding ranges in document order. A region starts after the first
/// child of its node and ends with the last non-comment descendant.
pub fn folding_ranges(root: &SyntaxNode, text: &str) -> Vec<FoldingRange> {
    let lines = LineIndex::new(text);
    root.descendants()
        .filter_map(|node| {
            let kind = match node.kind() {
                SyntaxKind::LABEL => FoldingKind::Label,
                SyntaxKind::NPC_STATEMENT => FoldingKind::Statement,
                SyntaxKind::USER_REPLY => FoldingKind::Reply,
                _ => return None,
            };
            let range = fold_range(&node)?;
            Some(FoldingRange {
                range,
                start_line: lines.line_col(range.start()).line,
                end_line: lines.line_col(range.end()).line,
                kind,
            })
        })
        .collect()
}
