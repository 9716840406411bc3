//! # dialogue-base
//!
//! Core library for parsing and linting branching-dialogue scripts.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (completion, goto-label, folding, reindent)
//!   ↓
//! hir       → Label index, indentation inference, lint passes, fixes
//!   ↓
//! parser    → Indent-aware lexer, error-tolerant parser, rowan CST
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex
pub mod base;

/// Parser: indentation tracking, logos lexer, recursive-descent parser
pub mod parser;

/// High-level IR: label index and lint passes
pub mod hir;

/// IDE features: completion, goto-label, references, folding
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};

// Re-export the entry points
pub use hir::{Diagnostic, Fix, LintConfig, Severity, TextEdit, Transaction, lint};
pub use parser::{Parse, SyntaxKind, SyntaxNode, parse};
