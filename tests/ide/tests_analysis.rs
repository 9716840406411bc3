//! AnalysisHost and reindent tests.

use dialogue::hir::{LintConfig, LintPass, codes};
use dialogue::ide::{AnalysisHost, FormatOptions, reindent};
use dialogue::{LineCol, TextSize, parse};

use crate::helpers::source_fixtures::*;

#[test]
fn test_host_snapshot_matches_free_functions() {
    let mut host = AnalysisHost::new();
    host.set_text(SCRIPT_SURFACE);
    let analysis = host.analysis();

    assert!(analysis.diagnostics().is_empty());
    assert_eq!(analysis.diagnostics(), analysis.diagnostics_parallel());
    assert_eq!(analysis.labels().len(), 2);
    assert_eq!(analysis.indentation().unit, 2);
    assert!(analysis.debug_tree().starts_with("DOCUMENT@"));
}

#[test]
fn test_host_reuses_frames_across_edits() {
    let mut host = AnalysisHost::new();
    host.set_text(REAL_DIALOGUE);
    let frames = host.cached_frames();
    host.set_text(format!("{REAL_DIALOGUE}Extra:\n  - more\n"));
    assert_eq!(host.cached_frames(), frames);
}

#[test]
fn test_host_config() {
    let mut host = AnalysisHost::new();
    host.set_text(DANGLING_LINK);
    assert_eq!(host.analysis().diagnostics()[0].code, Some(codes::UNDEFINED_LABEL));

    host.set_config(LintConfig::new().disable(LintPass::LabelLink));
    assert!(host.analysis().diagnostics().is_empty());
}

#[test]
fn test_line_col_round_trip() {
    let mut host = AnalysisHost::new();
    host.set_text(SCRIPT_SURFACE);
    let analysis = host.analysis();
    let offset = TextSize::new(SCRIPT_SURFACE.find("fine").unwrap() as u32);
    let pos = analysis.line_col(offset);
    assert_eq!(pos, LineCol::new(3, 8));
    assert_eq!(analysis.offset(pos), Some(offset));
}

#[test]
fn test_reindent_without_statements_uses_default_tab_size() {
    let mut host = AnalysisHost::with_config(LintConfig::new().with_tab_size(4));
    host.set_text("A:\n  - - y\n");
    let tx = host.analysis().reindent(None).unwrap();
    assert_eq!(tx.apply(host.text()).unwrap(), "A:\n    - - y\n");
}

#[test]
fn test_reindent_to_explicit_options() {
    let source = REAL_DIALOGUE;
    let root = parse(source).syntax();
    let tx = reindent(&root, source, &FormatOptions::tabs(1)).unwrap();
    let tabbed = tx.apply(source).unwrap();
    assert!(tabbed.contains("\n\t- sup..."));
    assert!(tabbed.contains("\n\t\t\t\t\t- im literally an object\n"));

    let back = reindent(&parse(&tabbed).syntax(), &tabbed, &FormatOptions::spaces(2)).unwrap();
    assert_eq!(back.apply(&tabbed).unwrap(), source);
}
