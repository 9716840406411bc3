//! CST shape tests: losslessness, coverage and node layout.

use std::rc::Rc;

use rstest::rstest;

use dialogue::parser::{
    AstNode, DialogueLine, Item, Lexer, SyntaxKind, TextSize, parse,
};

use crate::helpers::source_fixtures::*;

// =============================================================================
// LOSSLESSNESS AND COVERAGE
// =============================================================================

#[rstest]
#[case::empty("")]
#[case::minimal(MINIMAL)]
#[case::surface(SCRIPT_SURFACE)]
#[case::real(REAL_DIALOGUE)]
#[case::messy(MESSY_INDENT)]
#[case::junk("- orphan\n\n  ## x\n:::\nA:\n    - deep\n  - shallow\n")]
#[case::crlf("A:\r\n  - x\r\n    - - y\r\n")]
#[case::no_trailing_newline("A:\n  - x")]
#[case::single_newline("\n")]
#[case::blank_lines_only("  \n\n")]
#[case::whitespace_no_newline("   ")]
#[case::leading_blank_lines("\n\nA:\n  - x\n")]
fn test_top_level_items_tile_the_document(#[case] source: &str) {
    let parse = parse(source);
    let root = parse.syntax();
    assert_eq!(root.to_string(), source);

    let mut cursor = TextSize::new(0);
    for child in root.children() {
        let range = child.text_range();
        assert_eq!(range.start(), cursor, "gap before {child:?}");
        cursor = range.end();
    }
    assert_eq!(cursor, TextSize::of(source));
}

#[test]
fn test_real_dialogue_has_no_errors() {
    let parse = parse(REAL_DIALOGUE);
    assert!(parse.ok(), "{:?}", parse.errors());
    let labels: Vec<_> = parse
        .document()
        .labels()
        .filter_map(|label| label.name())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Greeting",
            "NT",
            "Leaving",
            "Returning",
            "NoConversation",
            "TooFar",
            "WrongState",
            "ImpossibleChoice",
        ]
    );
}

// =============================================================================
// NODE LAYOUT
// =============================================================================

#[test]
fn test_surface_layout() {
    let parse = parse(SCRIPT_SURFACE);
    let doc = parse.document();
    let items: Vec<_> = doc.items().collect();
    assert_eq!(items.len(), 2);
    let Item::Label(greeting) = &items[0] else {
        panic!("expected a label, got {:?}", items[0]);
    };
    assert_eq!(greeting.name().as_deref(), Some("Greeting"));

    let body = greeting.body().unwrap();
    let statement = body.statements().next().unwrap();
    let variations: Vec<_> = statement.variations().map(|v| v.text()).collect();
    assert_eq!(variations, vec!["hi", "hello"]);

    let reply = statement.body().unwrap().replies().next().unwrap();
    let nested = reply.body().unwrap().statements().next().unwrap();
    let link = nested.link().unwrap();
    assert_eq!(link.name().as_deref(), Some("NT"));
    assert!(matches!(link.owner(), Some(DialogueLine::Statement(_))));
}

#[rstest]
#[case("A:\n  - x\n", SyntaxKind::NPC_STATEMENT)]
#[case("A:\n  - - x\n", SyntaxKind::USER_REPLY)]
#[case("A:\n  --x\n", SyntaxKind::USER_REPLY)]
#[case("A:\n  x\n", SyntaxKind::NPC_STATEMENT)]
fn test_line_classification(#[case] source: &str, #[case] kind: SyntaxKind) {
    let root = parse(source).syntax();
    let line = root
        .descendants()
        .find(|n| n.kind().is_dialogue_line())
        .unwrap();
    assert_eq!(line.kind(), kind);
}

#[test]
fn test_hash_without_whitespace_is_text() {
    let root = parse("A:\n  - a:#b / c#d\n").syntax();
    assert!(root.descendants().all(|n| n.kind() != SyntaxKind::LABEL_LINK));
}

#[test]
fn test_comment_lines_keep_their_block() {
    let source = "A:\n  - x\n    # about y\n    - - y\n";
    let root = parse(source).syntax();
    let comment = root
        .descendants()
        .find(|n| n.kind() == SyntaxKind::COMMENT)
        .unwrap();
    let owner = comment.parent().unwrap().parent().unwrap();
    assert_eq!(owner.kind(), SyntaxKind::NPC_STATEMENT);
}

#[test]
fn test_debug_tree_names_nodes() {
    let tree = parse(MINIMAL).debug_tree();
    assert!(tree.starts_with("DOCUMENT@0..17"));
    assert!(tree.contains("LABEL_IDENTIFIER@0..8"));
    assert!(tree.contains("NPC_STATEMENT"));
}

// =============================================================================
// INDENTATION CONTEXTS
// =============================================================================

#[test]
fn test_equal_histories_share_one_context() {
    let source = "A:\n  - x\n    - - y\nB:\n  - z\n    - - w\n";
    let mut lexer = Lexer::new(source);
    lexer.by_ref().for_each(drop);
    let lines = lexer.line_contexts();

    let at = |needle: &str| {
        let found = source.find(needle).unwrap();
        let line_start = source[..found].rfind('\n').map_or(0, |i| i + 1);
        lines
            .iter()
            .find(|line| line.offset == TextSize::new(line_start as u32))
            .map(|line| Rc::clone(&line.context))
            .unwrap()
    };

    let y = at("- - y");
    let w = at("- - w");
    assert!(Rc::ptr_eq(&y, &w));
    assert_eq!(y.history(), vec![0, 2, 4]);
    assert!(!Rc::ptr_eq(&at("- x"), &y));
}

#[test]
fn test_line_node_casts() {
    let root = parse("A:\n  - x\n    - - y\n").syntax();
    let lines: Vec<_> = root.descendants().filter_map(DialogueLine::cast).collect();
    assert_eq!(lines.len(), 2);
    assert!(!lines[0].is_reply());
    assert!(lines[1].is_reply());
    assert_eq!(lines[1].expected_prefix(), "- - ");
}
