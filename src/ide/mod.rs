//! IDE features — High-level APIs for editor integrations.
//!
//! This module provides the interface between the semantic model (HIR)
//! and an editor. Each function corresponds to one editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **Composable**: Built on top of HIR queries
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use dialogue::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_text("Greeting:\n  - hi\n");
//!
//! let analysis = host.analysis();
//! let folds = analysis.folding_ranges();
//! ```

mod analysis;
mod completion;
mod folding;
mod format;
mod goto;
mod references;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, CompletionResult, label_link_completions};
pub use folding::{FoldingKind, FoldingRange, folding_ranges};
pub use format::{FormatOptions, reindent};
pub use goto::{GotoResult, GotoTarget, goto_label};
pub use references::{Reference, ReferenceResult, find_references};
