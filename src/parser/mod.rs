//! Rowan-based parser for dialogue scripts
//!
//! This module provides a lossless parser using:
//! - **logos** for lexing line content
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (lines + IndentTracker, logos for content) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone, Send)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! Indentation is significant. The lexer turns changes in leading
//! whitespace into zero-width INDENT/DEDENT tokens, tracked on a
//! persistent stack of [`IndentContext`] frames. Blank and comment lines
//! get a BLANK_LINE_START marker instead and never move the stack.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod indent;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use indent::{IndentCache, IndentContext, IndentTracker};
pub use lexer::{Lexer, LineContext, Token, tokenize};
pub use parser::{DialogueParser, Parse, SyntaxError, parse};
pub use syntax_kind::{DialogueLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
