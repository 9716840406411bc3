//! Parser tests
//!
//! Tests for the indentation-aware lexer and the CST:
//! - Losslessness and coverage of the top-level items
//! - Statement, reply and label-link shapes
//! - Error recovery
//! - Shared indentation contexts

pub mod tests_tree;
