//! Lint tests over whole documents.

use rstest::rstest;

use dialogue::hir::{LintConfig, LintPass, Severity, codes, lint_parallel};
use dialogue::parse;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// CLEAN DOCUMENTS
// =============================================================================

#[rstest]
#[case::minimal(MINIMAL)]
#[case::surface(SCRIPT_SURFACE)]
#[case::real(REAL_DIALOGUE)]
#[case::tabs("A:\n\t- x\n\t\t- - y # A\n")]
#[case::comments("# top\nA:\n  # inside\n  - x\n")]
fn test_clean_documents(#[case] source: &str) {
    assert_clean(source);
}

#[test]
fn test_parallel_lint_of_real_dialogue_is_clean() {
    let parse = parse(REAL_DIALOGUE);
    assert!(lint_parallel(&parse.green, REAL_DIALOGUE, &LintConfig::default()).is_empty());
}

// =============================================================================
// ONE FINDING PER FIXTURE
// =============================================================================

#[test]
fn test_duplicate_label() {
    let diagnostics = diagnostics_from_source(DUPLICATE_LABELS);
    assert_eq!(diagnostics.len(), 1, "{}", describe(DUPLICATE_LABELS, &diagnostics));
    let diag = &diagnostics[0];
    assert_eq!(diag.code, Some(codes::DUPLICATE_LABEL));
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(&DUPLICATE_LABELS[diag.range], "Foo");
    assert_eq!(u32::from(diag.range.start()), 12);
    assert!(diag.fixes.is_empty());
}

#[test]
fn test_space_before_colon_is_one_finding() {
    let source = "A :\n  - x\n";
    let diagnostics = diagnostics_from_source(source);
    assert_eq!(diagnostics.len(), 1, "{}", describe(source, &diagnostics));
    assert_eq!(diagnostics[0].code, Some(codes::MISSING_COLON));
    let fixed = fix_named(&diagnostics[0], "Add colon").apply(source).unwrap();
    assert_clean(&fixed);
}

#[test]
fn test_dangling_link() {
    let diagnostics = diagnostics_from_source(DANGLING_LINK);
    assert_eq!(diagnostics.len(), 1, "{}", describe(DANGLING_LINK, &diagnostics));
    let diag = &diagnostics[0];
    assert_eq!(diag.code, Some(codes::UNDEFINED_LABEL));
    assert_eq!(diag.fixes.len(), 1);
    let fixed = fix_named(diag, "Change to \"Greeting\"").apply(DANGLING_LINK).unwrap();
    assert_eq!(fixed, "Greeting:\n  - hi #Greeting\n");
}

#[test]
fn test_mixed_indentation_silences_the_pass() {
    let diagnostics = diagnostics_from_source(MIXED_INDENT);
    assert_eq!(diagnostics.len(), 1, "{}", describe(MIXED_INDENT, &diagnostics));
    let diag = &diagnostics[0];
    assert_eq!(diag.code, Some(codes::MIXED_INDENTATION));
    assert_eq!(diag.message, "The indentation here contains both spaces and tabs!");
    assert_eq!(&MIXED_INDENT[diag.range], " \t");
    let tabs = fix_named(diag, "Convert to tabs").apply(MIXED_INDENT).unwrap();
    assert!(tabs.starts_with("A:\n\t\t- x\n"));
}

#[test]
fn test_redundant_link() {
    let diagnostics = diagnostics_from_source(REDUNDANT_LINK);
    assert_eq!(diagnostics.len(), 1, "{}", describe(REDUNDANT_LINK, &diagnostics));
    let diag = &diagnostics[0];
    assert_eq!(diag.code, Some(codes::REDUNDANT_LINK));
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(
        diag.message,
        "This label link causes the conversation to go to the \"A\" label after this \
         NPC statement, making the replies after this redundant"
    );
    assert_eq!(diag.fixes.len(), 2);

    let unlinked = fix_named(diag, "Remove this label link").apply(REDUNDANT_LINK).unwrap();
    assert_eq!(unlinked, "A:\n  - x\n    - - y\n    - - z\n");
    let pruned = fix_named(diag, "Remove the replies underneath (danger!)")
        .apply(REDUNDANT_LINK)
        .unwrap();
    assert_eq!(pruned, "A:\n  - x # A\n");
}

#[test]
fn test_missing_prefix() {
    let diagnostics = diagnostics_from_source(MISSING_PREFIX);
    assert_eq!(diagnostics.len(), 1, "{}", describe(MISSING_PREFIX, &diagnostics));
    let diag = &diagnostics[0];
    assert_eq!(diag.code, Some(codes::INVALID_PREFIX));
    assert!(diag.range.is_empty());
    assert_eq!(diag.range.start(), (MISSING_PREFIX.find("hello").unwrap() as u32).into());
    let edit = diag.fixes[0].edit().unwrap();
    assert_eq!(edit.insert, "- ");
    assert_eq!(
        diag.fixes[0].apply(MISSING_PREFIX).unwrap(),
        "A:\n  - x\n    - - y\n  - hello\n"
    );
}

// =============================================================================
// LABEL LINES
// =============================================================================

#[rstest]
#[case("A\n  - x\n", codes::MISSING_COLON)]
#[case("A: x\n  - x\n", codes::TRAILING_CONTENT)]
#[case("  A:\n  - x\n", codes::LEADING_WHITESPACE)]
fn test_label_line_errors(#[case] source: &str, #[case] code: &str) {
    let diagnostics = diagnostics_from_source(source);
    assert_eq!(with_code(&diagnostics, code).len(), 1, "{}", describe(source, &diagnostics));
}

#[test]
fn test_indented_label_after_a_block_is_a_statement() {
    let source = "A:\n  - x\n B:\n";
    let diagnostics = diagnostics_from_source(source);
    let report = describe(source, &diagnostics);
    assert_eq!(with_code(&diagnostics, codes::INVALID_PREFIX).len(), 1, "{report}");
    assert!(with_code(&diagnostics, codes::LEADING_WHITESPACE).is_empty(), "{report}");
    let names: Vec<_> = parse(source).document().labels().filter_map(|l| l.name()).collect();
    assert_eq!(names, vec!["A"]);
}

// =============================================================================
// CONFIGURATION AND ORDER
// =============================================================================

#[test]
fn test_passes_report_in_fixed_order() {
    let source = "A\n  - x #Nope\n    - - y\n   hi\n/ junk\n";
    let diagnostics = diagnostics_from_source(source);
    let found: Vec<_> = diagnostics.iter().filter_map(|d| d.code).collect();
    let mut sorted = found.clone();
    sorted.sort_by_key(|code| match *code {
        c if c == codes::INCONSISTENT_INDENTATION || c == codes::MIXED_INDENTATION => 0,
        c if c == codes::DUPLICATE_LABEL
            || c == codes::MISSING_COLON
            || c == codes::TRAILING_CONTENT
            || c == codes::LEADING_WHITESPACE =>
        {
            1
        }
        c if c == codes::UNDEFINED_LABEL || c == codes::REDUNDANT_LINK => 2,
        c if c == codes::INVALID_PREFIX => 3,
        _ => 4,
    });
    assert_eq!(found, sorted);
    assert!(found.contains(&codes::SYNTAX_ERROR));
}

#[test]
fn test_disabled_passes_are_skipped() {
    let config = LintConfig::new()
        .disable(LintPass::LabelLink)
        .disable(LintPass::SyntaxError);
    let diagnostics = diagnostics_with(DANGLING_LINK, &config);
    assert!(diagnostics.is_empty());
}
