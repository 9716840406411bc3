//! Folding ranges tests for the IDE layer.

use dialogue::ide::{FoldingKind, folding_ranges};
use dialogue::parse;

use crate::helpers::source_fixtures::*;

#[test]
fn test_folding_ranges_have_lines() {
    let ranges = folding_ranges(&parse(REAL_DIALOGUE).syntax(), REAL_DIALOGUE);
    assert!(!ranges.is_empty());
    for range in &ranges {
        assert!(range.end_line >= range.start_line);
        assert!(!range.range.is_empty());
    }
}

#[test]
fn test_every_label_with_body_folds() {
    let ranges = folding_ranges(&parse(REAL_DIALOGUE).syntax(), REAL_DIALOGUE);
    let labels = ranges.iter().filter(|r| r.kind == FoldingKind::Label).count();
    assert_eq!(labels, 8);
}

#[test]
fn test_leaf_lines_do_not_fold() {
    let source = "A:\n  - x\n    - - y\n";
    let ranges = folding_ranges(&parse(source).syntax(), source);
    let kinds: Vec<_> = ranges.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![FoldingKind::Label, FoldingKind::Statement]);
    assert_eq!(ranges[1].start_line, 1);
    assert_eq!(ranges[1].end_line, 2);
}

#[test]
fn test_fold_stops_before_trailing_comment() {
    let source = "A:\n  - x\n    - - y\n    # end\n";
    let ranges = folding_ranges(&parse(source).syntax(), source);
    let statement = ranges
        .iter()
        .find(|r| r.kind == FoldingKind::Statement)
        .unwrap();
    assert_eq!(&source[statement.range], "\n    - - y");
}
