//! IDE feature tests
//!
//! Tests for:
//! - Label-link completion
//! - Go to label
//! - Find references
//! - Folding ranges
//! - Re-indentation
//! - Analysis host

pub mod tests_analysis;
pub mod tests_completion;
pub mod tests_folding;
