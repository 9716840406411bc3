//! Indentation inference.
//!
//! A document's indentation unit is whatever the first NPC statement is
//! indented with. Every statement or reply is then expected to sit at
//! `unit × depth`, where depth counts the conversation states around it.

use text_size::{TextRange, TextSize};

use crate::parser::{SyntaxKind, SyntaxNode, expected_indent};

/// Unit used when a document has no statement to infer from.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Which characters the inferred unit is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IndentKind {
    Spaces,
    Tabs,
    Mixed,
    None,
}

impl IndentKind {
    /// Classify a run of leading whitespace.
    pub fn of(whitespace: &str) -> Self {
        let spaces = whitespace.contains(' ');
        let tabs = whitespace.contains('\t');
        match (spaces, tabs) {
            (true, true) => IndentKind::Mixed,
            (true, false) => IndentKind::Spaces,
            (false, true) => IndentKind::Tabs,
            (false, false) => IndentKind::None,
        }
    }

    /// The single character this kind indents with.
    pub fn fill(&self) -> Option<char> {
        match self {
            IndentKind::Spaces => Some(' '),
            IndentKind::Tabs => Some('\t'),
            _ => None,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            IndentKind::Spaces => "spaces",
            _ => "tabs",
        }
    }
}

/// Indentation unit of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndentationInfo {
    /// Width of one level, in characters of `kind`.
    pub unit: usize,
    pub kind: IndentKind,
    /// Leading whitespace of the statement the unit was taken from.
    pub source: Option<TextRange>,
}

/// Infer the unit, falling back to [`DEFAULT_TAB_SIZE`].
pub fn infer_indentation(root: &SyntaxNode, text: &str) -> IndentationInfo {
    infer_indentation_or(root, text, DEFAULT_TAB_SIZE)
}

/// Infer the unit from the first NPC statement in pre-order.
pub fn infer_indentation_or(root: &SyntaxNode, text: &str, default_unit: usize) -> IndentationInfo {
    let first = root
        .descendants()
        .find(|node| node.kind() == SyntaxKind::NPC_STATEMENT);
    let Some(statement) = first else {
        return IndentationInfo {
            unit: default_unit,
            kind: IndentKind::None,
            source: None,
        };
    };
    let range = line_indent(text, statement.text_range().start());
    let whitespace = &text[range];
    IndentationInfo {
        unit: whitespace.len(),
        kind: IndentKind::of(whitespace),
        source: Some(range),
    }
}

/// Range of the spaces and tabs opening the line that contains `offset`.
pub fn line_indent(text: &str, offset: TextSize) -> TextRange {
    let offset = usize::from(offset).min(text.len());
    let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let width = text[start..]
        .bytes()
        .take_while(|b| matches!(b, b' ' | b'\t'))
        .count();
    TextRange::new(to_size(start), to_size(start + width))
}

fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::new(u32::MAX))
}

/// A line whose leading whitespace does not match its depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentMismatch {
    /// The whitespace currently opening the line.
    pub range: TextRange,
    /// Expected width, in characters.
    pub expected: usize,
    /// Whitespace that should replace `range`.
    pub replacement: String,
}

/// Every statement or reply whose indentation is not `unit × depth` of
/// `kind`'s character, in document order.
///
/// Nothing is reported for mixed or missing kinds; there is no canonical
/// character to compare against.
pub fn indentation_mismatches(
    root: &SyntaxNode,
    text: &str,
    unit: usize,
    kind: IndentKind,
) -> Vec<IndentMismatch> {
    let Some(fill) = kind.fill() else {
        return Vec::new();
    };
    let wrong = if fill == ' ' { '\t' } else { ' ' };

    root.descendants()
        .filter(|node| node.kind().is_dialogue_line())
        .filter_map(|node| {
            let expected = expected_indent(&node, unit);
            let range = line_indent(text, node.text_range().start());
            let actual = &text[range];
            (actual.len() != expected || actual.contains(wrong)).then(|| IndentMismatch {
                range,
                expected,
                replacement: fill.to_string().repeat(expected),
            })
        })
        .collect()
}
