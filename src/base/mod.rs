//! Foundation types for the dialogue toolchain.
//!
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion and line lookup
//!
//! This module has NO dependencies on other dialogue modules.

mod line_index;

pub use line_index::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
