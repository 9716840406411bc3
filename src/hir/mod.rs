//! High-level IR (HIR) — Semantic model over the dialogue CST.
//!
//! Everything here is a pure function of a parsed tree and its text.
//!
//! ## Key Types
//!
//! - [`LabelIndex`] — Label declarations and the links that name them
//! - [`IndentationInfo`] — Indentation unit inferred from the document
//! - [`Diagnostic`] — A lint finding with its [`Fix`]es
//! - [`Transaction`] — A validated batch of [`TextEdit`]s
//!
//! ## Layers
//!
//! ```text
//! SyntaxNode (parser)
//!     │
//!     ├──▶ build_label_index(root)    ← names → declarations, references
//!     ├──▶ infer_indentation(root)    ← unit and kind of indentation
//!     │
//!     ▼
//! lint(root, text)                    ← five passes, fix-all synthesis
//! ```

mod diagnostics;
mod fix;
mod indentation;
mod labels;
mod lints;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use fix::{EditError, Fix, FixKind, TextEdit, Transaction};
pub use indentation::{
    DEFAULT_TAB_SIZE, IndentKind, IndentMismatch, IndentationInfo, indentation_mismatches,
    infer_indentation, infer_indentation_or, line_indent,
};
pub use labels::{LabelIndex, build_label_index};
pub use lints::{LintConfig, LintContext, LintPass, lint, lint_parallel, lint_with};
