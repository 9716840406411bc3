//! Fix and fix-all tests: applying offered edits settles the document.

use dialogue::hir::{EditError, FixKind, TextEdit, Transaction, codes};
use dialogue::{TextRange, parse};

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// FIX ALL
// =============================================================================

#[test]
fn test_fix_all_indentation_is_idempotent() {
    let diagnostics = diagnostics_from_source(MESSY_INDENT);
    let indentation = with_code(&diagnostics, codes::INCONSISTENT_INDENTATION);
    assert_eq!(indentation.len(), 3, "{}", describe(MESSY_INDENT, &diagnostics));

    let fix_all = fix_named(&indentation[0], "Fix all indentation");
    assert!(fix_all.batch);
    assert_eq!(fix_all.kind, FixKind::Reindent);
    for diag in &indentation {
        assert_eq!(fix_named(diag, "Fix all indentation"), fix_all);
    }

    let fixed = fix_all.apply(MESSY_INDENT).unwrap();
    assert_eq!(fixed, "A:\n   - x\n   - - y\n      - z\nB:\n   - w\n");
    assert!(diagnostics_from_source(&fixed).is_empty());
}

#[test]
fn test_fix_all_prefixes() {
    let source = "A:\n  hi\n  -there\n";
    let diagnostics = diagnostics_from_source(source);
    let prefixes = with_code(&diagnostics, codes::INVALID_PREFIX);
    assert_eq!(prefixes.len(), 2);
    let fixed = fix_named(&prefixes[1], "Fix all line prefixes").apply(source).unwrap();
    assert_eq!(fixed, "A:\n  - hi\n  - there\n");
}

#[test]
fn test_choices_are_never_merged() {
    let source = "A:\n  - x #B\n  - y #C\n";
    let diagnostics = diagnostics_from_source(source);
    let dangling = with_code(&diagnostics, codes::UNDEFINED_LABEL);
    assert_eq!(dangling.len(), 2);
    for diag in &dangling {
        assert!(diag.fixes.iter().all(|f| !f.batch));
    }
}

#[test]
fn test_applying_each_single_fix_resolves_its_diagnostic() {
    let source = "A\n  - x\n";
    let diagnostics = diagnostics_from_source(source);
    let colon = &with_code(&diagnostics, codes::MISSING_COLON)[0];
    let fixed = colon.fixes[0].apply(source).unwrap();
    assert_eq!(fixed, "A:\n  - x\n");
    assert!(diagnostics_from_source(&fixed).is_empty());
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn test_transaction_rejects_overlap() {
    let err = Transaction::new(vec![
        TextEdit::replace(range(3, 6), "x"),
        TextEdit::delete(range(5, 8)),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        EditError::Overlapping {
            first: range(3, 6),
            second: range(5, 8)
        }
    );
}

#[test]
fn test_transaction_applies_against_original_offsets() {
    let source = "A:\n  - x\n";
    let tx = Transaction::new(vec![
        TextEdit::replace(range(3, 5), "    "),
        TextEdit::insert(0.into(), "# top\n"),
    ])
    .unwrap();
    assert_eq!(tx.apply(source).unwrap(), "# top\nA:\n    - x\n");
    assert!(parse(&tx.apply(source).unwrap()).ok());
}

#[test]
fn test_transaction_out_of_bounds() {
    let tx = Transaction::single(TextEdit::delete(range(0, 100)));
    assert!(matches!(tx.apply("short"), Err(EditError::OutOfBounds { .. })));
}
