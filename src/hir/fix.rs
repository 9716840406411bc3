//! Fixes — declarative text edits attached to diagnostics.
//!
//! Nothing here touches an editor. A [`Fix`] is a description plus a
//! [`Transaction`]: a sorted, non-overlapping batch of [`TextEdit`]s that
//! can be applied to the text in one pass.

use text_size::{TextRange, TextSize};
use thiserror::Error;

// ============================================================================
// EDITS
// ============================================================================

/// Replace `range` with `insert`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextEdit {
    pub range: TextRange,
    pub insert: String,
}

impl TextEdit {
    pub fn replace(range: TextRange, insert: impl Into<String>) -> Self {
        Self {
            range,
            insert: insert.into(),
        }
    }

    pub fn insert(at: TextSize, text: impl Into<String>) -> Self {
        Self::replace(TextRange::empty(at), text)
    }

    pub fn delete(range: TextRange) -> Self {
        Self::replace(range, String::new())
    }

    pub fn from(&self) -> TextSize {
        self.range.start()
    }

    pub fn to(&self) -> TextSize {
        self.range.end()
    }
}

/// Why a batch of edits cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("edits {first:?} and {second:?} overlap")]
    Overlapping { first: TextRange, second: TextRange },

    #[error("edit {range:?} is outside of the text (length {len:?})")]
    OutOfBounds { range: TextRange, len: TextSize },

    #[error("edit {range:?} does not fall on character boundaries")]
    NotCharBoundary { range: TextRange },
}

/// A batch of edits applied atomically.
///
/// Edits are kept sorted by position and never overlap, so applying them
/// needs no intermediate re-validation. Inserts at the same offset keep
/// the order they were given in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Transaction {
    edits: Vec<TextEdit>,
}

impl Transaction {
    pub fn new(mut edits: Vec<TextEdit>) -> Result<Self, EditError> {
        edits.sort_by_key(|edit| (edit.range.start(), edit.range.end()));
        for pair in edits.windows(2) {
            if pair[0].range.end() > pair[1].range.start() {
                return Err(EditError::Overlapping {
                    first: pair[0].range,
                    second: pair[1].range,
                });
            }
        }
        Ok(Self { edits })
    }

    pub fn single(edit: TextEdit) -> Self {
        Self { edits: vec![edit] }
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<TextEdit> {
        self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Check that every edit fits `text`.
    pub fn validate(&self, text: &str) -> Result<(), EditError> {
        let len = TextSize::of(text);
        for edit in &self.edits {
            if edit.range.end() > len {
                return Err(EditError::OutOfBounds {
                    range: edit.range,
                    len,
                });
            }
            let (start, end) = (usize::from(edit.range.start()), usize::from(edit.range.end()));
            if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
                return Err(EditError::NotCharBoundary { range: edit.range });
            }
        }
        Ok(())
    }

    /// Apply the whole batch, returning the new text.
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        self.validate(text)?;
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for edit in &self.edits {
            let start = usize::from(edit.range.start());
            out.push_str(&text[cursor..start]);
            out.push_str(&edit.insert);
            cursor = usize::from(edit.range.end());
        }
        out.push_str(&text[cursor..]);
        Ok(out)
    }
}

// ============================================================================
// FIXES
// ============================================================================

/// What a fix does. Used to group fixes of the same sort into one
/// "fix all" batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FixKind {
    Reindent,
    ConvertToSpaces,
    ConvertToTabs,
    InsertColon,
    RemoveWhitespace,
    ChangeLabel,
    RemoveLink,
    RemoveBranch,
    FixPrefix,
}

impl FixKind {
    /// Title of the merged fix, for kinds that are safe to apply everywhere
    /// at once. Kinds that pick between alternatives are never merged.
    pub fn batch_title(&self) -> Option<&'static str> {
        match self {
            FixKind::Reindent => Some("Fix all indentation"),
            FixKind::InsertColon => Some("Add all missing colons"),
            FixKind::RemoveWhitespace => Some("Remove all whitespace before labels"),
            FixKind::FixPrefix => Some("Fix all line prefixes"),
            _ => None,
        }
    }
}

/// A machine-applicable fix for a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fix {
    pub description: String,
    pub kind: FixKind,
    /// Whether this fix merges the fixes of several diagnostics.
    pub batch: bool,
    transaction: Transaction,
}

impl Fix {
    pub fn new(kind: FixKind, description: impl Into<String>, edit: TextEdit) -> Self {
        Self {
            description: description.into(),
            kind,
            batch: false,
            transaction: Transaction::single(edit),
        }
    }

    pub fn batched(kind: FixKind, description: impl Into<String>, transaction: Transaction) -> Self {
        Self {
            description: description.into(),
            kind,
            batch: true,
            transaction,
        }
    }

    /// The edit of a single fix. `None` for merged fixes.
    pub fn edit(&self) -> Option<&TextEdit> {
        match self.transaction.edits() {
            [edit] if !self.batch => Some(edit),
            _ => None,
        }
    }

    pub fn edits(&self) -> &[TextEdit] {
        self.transaction.edits()
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        self.transaction.apply(text)
    }
}
