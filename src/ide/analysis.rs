//! AnalysisHost and Analysis — Unified state management for IDE features.
//!
//! The `AnalysisHost` owns the document text, the long-lived parser and
//! the latest parse, and hands out `Analysis` snapshots for querying.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//! host.set_text("Greeting:\n  - hi\n");
//!
//! let analysis = host.analysis();
//! let diagnostics = analysis.diagnostics();
//! let folds = analysis.folding_ranges();
//! ```

use std::sync::Arc;

use text_size::TextSize;

use crate::base::{LineCol, LineIndex};
use crate::hir::{
    Diagnostic, EditError, IndentationInfo, LabelIndex, LintConfig, Transaction,
    infer_indentation_or, lint_parallel, lint_with,
};
use crate::parser::{DialogueParser, Parse, SyntaxNode};

use super::{
    CompletionResult, FoldingRange, FormatOptions, GotoResult, ReferenceResult, find_references,
    folding_ranges, goto_label, label_link_completions, reindent,
};

/// Owns all mutable state for the IDE layer.
///
/// Replace the text via `set_text()`, then get a consistent snapshot via
/// `analysis()`.
pub struct AnalysisHost {
    text: Arc<str>,
    parser: DialogueParser,
    parse: Parse,
    lines: LineIndex,
    config: LintConfig,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a host holding an empty document.
    pub fn new() -> Self {
        Self::with_config(LintConfig::default())
    }

    pub fn with_config(config: LintConfig) -> Self {
        let mut parser = DialogueParser::new();
        let parse = parser.parse("");
        Self {
            text: Arc::from(""),
            parser,
            parse,
            lines: LineIndex::new(""),
            config,
        }
    }

    /// Replace the document and reparse it.
    pub fn set_text(&mut self, text: impl Into<Arc<str>>) {
        self.text = text.into();
        self.parse = self.parser.parse(&self.text);
        self.lines = LineIndex::new(&self.text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LintConfig) {
        self.config = config;
    }

    /// Indentation frames kept alive between reparses.
    pub fn cached_frames(&self) -> usize {
        self.parser.cached_frames()
    }

    /// Get a consistent snapshot for querying.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            text: &self.text,
            parse: &self.parse,
            lines: &self.lines,
            config: &self.config,
            root: self.parse.syntax(),
        }
    }
}

/// An immutable snapshot of the analysis state.
///
/// All IDE queries go through this struct to ensure consistent results.
pub struct Analysis<'a> {
    text: &'a str,
    parse: &'a Parse,
    lines: &'a LineIndex,
    config: &'a LintConfig,
    root: SyntaxNode,
}

impl<'a> Analysis<'a> {
    // ==================== Tree ====================

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn parse(&self) -> &'a Parse {
        self.parse
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.root
    }

    /// Indented dump of the tree.
    pub fn debug_tree(&self) -> String {
        self.parse.debug_tree()
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        self.lines.line_col(offset)
    }

    pub fn offset(&self, pos: LineCol) -> Option<TextSize> {
        self.lines.offset(pos)
    }

    pub fn labels(&self) -> LabelIndex {
        LabelIndex::build(&self.root)
    }

    // ==================== Diagnostics ====================

    /// Every lint pass, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        lint_with(&self.root, self.text, self.config)
    }

    /// Same diagnostics, with the passes spread over the rayon pool.
    pub fn diagnostics_parallel(&self) -> Vec<Diagnostic> {
        lint_parallel(&self.parse.green, self.text, self.config)
    }

    // ==================== Indentation ====================

    pub fn indentation(&self) -> IndentationInfo {
        infer_indentation_or(&self.root, self.text, self.config.default_tab_size)
    }

    /// Re-indent to `options`, or to the document's own indentation when
    /// none are given.
    pub fn reindent(&self, options: Option<FormatOptions>) -> Result<Transaction, EditError> {
        let options = options
            .or_else(|| FormatOptions::from_indentation(&self.indentation()))
            .unwrap_or_else(|| FormatOptions::spaces(self.config.default_tab_size));
        reindent(&self.root, self.text, &options)
    }

    // ==================== Navigation ====================

    pub fn completions(&self, offset: TextSize) -> Option<CompletionResult> {
        label_link_completions(&self.root, self.text, offset)
    }

    pub fn goto_label(&self, offset: TextSize) -> GotoResult {
        goto_label(&self.root, offset)
    }

    pub fn find_references(&self, offset: TextSize, include_declaration: bool) -> ReferenceResult {
        find_references(&self.root, offset, include_declaration)
    }

    pub fn folding_ranges(&self) -> Vec<FoldingRange> {
        folding_ranges(&self.root, self.text)
    }
}
