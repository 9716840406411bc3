//! Lint passes over a parsed dialogue document.
//!
//! Each pass is a pure function of a [`LintContext`]. The list of passes is
//! closed and runs in a fixed order; [`lint_parallel`] spreads the same
//! passes over the rayon pool and concatenates the results in that order.

mod indentation;
mod label_identifier;
mod label_link;
mod prefix;
mod syntax_error;

use std::time::Instant;

use indexmap::IndexMap;
use rayon::prelude::*;
use rowan::GreenNode;
use rustc_hash::FxHashSet;

use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::fix::{Fix, FixKind, TextEdit, Transaction};
use super::indentation::DEFAULT_TAB_SIZE;
use super::labels::LabelIndex;
use crate::base::LineIndex;
use crate::parser::SyntaxNode;

// ============================================================================
// PASSES
// ============================================================================

/// One of the built-in lint passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LintPass {
    Indentation,
    LabelIdentifier,
    LabelLink,
    Prefix,
    SyntaxError,
}

impl LintPass {
    /// Every pass, in run order.
    pub const ALL: [LintPass; 5] = [
        LintPass::Indentation,
        LintPass::LabelIdentifier,
        LintPass::LabelLink,
        LintPass::Prefix,
        LintPass::SyntaxError,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LintPass::Indentation => "indentation",
            LintPass::LabelIdentifier => "label-identifier",
            LintPass::LabelLink => "label-link",
            LintPass::Prefix => "prefix",
            LintPass::SyntaxError => "syntax-error",
        }
    }

    /// Run this pass alone, without fix-all synthesis.
    pub fn run(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let check: fn(&LintContext<'_>) -> Vec<Diagnostic> = match self {
            LintPass::Indentation => indentation::check,
            LintPass::LabelIdentifier => label_identifier::check,
            LintPass::LabelLink => label_link::check,
            LintPass::Prefix => prefix::check,
            LintPass::SyntaxError => syntax_error::check,
        };
        check(ctx)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Settings for a lint run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintConfig {
    /// Indentation unit assumed when the document has no statement.
    pub default_tab_size: usize,
    /// Passes to skip.
    pub disabled: FxHashSet<LintPass>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            default_tab_size: DEFAULT_TAB_SIZE,
            disabled: FxHashSet::default(),
        }
    }
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.default_tab_size = tab_size;
        self
    }

    pub fn disable(mut self, pass: LintPass) -> Self {
        self.disabled.insert(pass);
        self
    }

    pub fn is_enabled(&self, pass: LintPass) -> bool {
        !self.disabled.contains(&pass)
    }

    /// Enabled passes, in run order.
    pub fn passes(&self) -> impl Iterator<Item = LintPass> + '_ {
        LintPass::ALL.into_iter().filter(|pass| self.is_enabled(*pass))
    }
}

// ============================================================================
// CONTEXT
// ============================================================================

/// Everything a pass may look at. Built once per run and shared.
pub struct LintContext<'a> {
    pub root: SyntaxNode,
    pub text: &'a str,
    pub labels: LabelIndex,
    pub lines: LineIndex,
    pub config: &'a LintConfig,
}

impl<'a> LintContext<'a> {
    pub fn new(root: SyntaxNode, text: &'a str, config: &'a LintConfig) -> Self {
        let labels = LabelIndex::build(&root);
        let lines = LineIndex::new(text);
        Self {
            root,
            text,
            labels,
            lines,
            config,
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Run every pass with the default configuration.
pub fn lint(root: &SyntaxNode, text: &str) -> Vec<Diagnostic> {
    lint_with(root, text, &LintConfig::default())
}

/// Run the enabled passes in order.
pub fn lint_with(root: &SyntaxNode, text: &str, config: &LintConfig) -> Vec<Diagnostic> {
    let ctx = LintContext::new(root.clone(), text, config);
    let mut collector = DiagnosticCollector::new();
    for pass in config.passes() {
        collector.extend(run_pass(pass, &ctx));
    }
    tracing::debug!(
        errors = collector.error_count(),
        warnings = collector.warning_count(),
        "lint finished"
    );
    collector.take()
}

/// Like [`lint_with`], with each pass on its own rayon task. Only the
/// green tree crosses threads; every task builds its own red tree.
pub fn lint_parallel(green: &GreenNode, text: &str, config: &LintConfig) -> Vec<Diagnostic> {
    let passes: Vec<LintPass> = config.passes().collect();
    let results: Vec<Vec<Diagnostic>> = passes
        .par_iter()
        .map(|pass| {
            let root = SyntaxNode::new_root(green.clone());
            let ctx = LintContext::new(root, text, config);
            run_pass(*pass, &ctx)
        })
        .collect();
    let diagnostics: Vec<Diagnostic> = results.into_iter().flatten().collect();
    tracing::debug!(count = diagnostics.len(), "parallel lint finished");
    diagnostics
}

fn run_pass(pass: LintPass, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
    let started = Instant::now();
    let mut diagnostics = pass.run(ctx);
    add_fix_all(&mut diagnostics);
    tracing::trace!(
        pass = pass.name(),
        count = diagnostics.len(),
        elapsed = ?started.elapsed(),
        "lint pass"
    );
    diagnostics
}

// ============================================================================
// FIX-ALL SYNTHESIS
// ============================================================================

/// Merge the single fixes of each batchable kind into one transaction and
/// offer it on every diagnostic that contributed, when there are two or
/// more of them.
fn add_fix_all(diagnostics: &mut [Diagnostic]) {
    let mut groups: IndexMap<FixKind, Vec<(usize, TextEdit)>> = IndexMap::new();
    for (index, diagnostic) in diagnostics.iter().enumerate() {
        for fix in &diagnostic.fixes {
            if fix.kind.batch_title().is_none() {
                continue;
            }
            if let Some(edit) = fix.edit() {
                let group = groups.entry(fix.kind).or_default();
                if group.last().is_some_and(|(last, _)| *last == index) {
                    continue;
                }
                group.push((index, edit.clone()));
            }
        }
    }

    for (kind, members) in groups {
        if members.len() < 2 {
            continue;
        }
        let Some(title) = kind.batch_title() else {
            continue;
        };
        let (indices, edits): (Vec<usize>, Vec<TextEdit>) = members.into_iter().unzip();
        match Transaction::new(edits) {
            Ok(transaction) => {
                for index in indices {
                    diagnostics[index]
                        .fixes
                        .push(Fix::batched(kind, title, transaction.clone()));
                }
            }
            Err(err) => tracing::debug!(?kind, %err, "skipping fix-all"),
        }
    }
}
