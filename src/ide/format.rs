//! Re-indentation.

use crate::hir::{
    EditError, IndentKind, IndentationInfo, TextEdit, Transaction, indentation_mismatches,
};
use crate::parser::SyntaxNode;

/// How a document should be indented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormatOptions {
    /// Characters per level.
    pub tab_size: usize,
    /// Spaces when true, tabs otherwise.
    pub insert_spaces: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_size: 2,
            insert_spaces: true,
        }
    }
}

impl FormatOptions {
    pub fn spaces(tab_size: usize) -> Self {
        Self {
            tab_size,
            insert_spaces: true,
        }
    }

    pub fn tabs(tab_size: usize) -> Self {
        Self {
            tab_size,
            insert_spaces: false,
        }
    }

    /// Options that keep a document's own indentation. `None` when the
    /// document mixes spaces and tabs or has nothing to infer from.
    pub fn from_indentation(info: &IndentationInfo) -> Option<Self> {
        match info.kind {
            IndentKind::Spaces => Some(Self::spaces(info.unit)),
            IndentKind::Tabs => Some(Self::tabs(info.unit)),
            IndentKind::Mixed | IndentKind::None => None,
        }
    }

    pub fn kind(&self) -> IndentKind {
        if self.insert_spaces {
            IndentKind::Spaces
        } else {
            IndentKind::Tabs
        }
    }

    /// Leading whitespace for a line at `level`.
    pub fn indent(&self, level: usize) -> String {
        let fill = if self.insert_spaces { " " } else { "\t" };
        fill.repeat(self.tab_size * level)
    }
}

/// Edits re-indenting every statement and reply to `options`, as one
/// transaction. Lines already indented correctly are left alone.
pub fn reindent(
    root: &SyntaxNode,
    text: &str,
    options: &FormatOptions,
) -> Result<Transaction, EditError> {
    let edits: Vec<TextEdit> =
        indentation_mismatches(root, text, options.tab_size, options.kind())
            .into_iter()
            .map(|mismatch| TextEdit::replace(mismatch.range, mismatch.replacement))
            .collect();
    tracing::debug!(edits = edits.len(), ?options, "reindent");
    Transaction::new(edits)
}
