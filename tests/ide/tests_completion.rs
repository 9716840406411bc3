//! Label-link completion tests.

use rstest::rstest;

use dialogue::ide::{CompletionKind, label_link_completions};
use dialogue::{TextSize, parse};

fn complete(source: &str, cursor: &str) -> Option<(u32, Vec<String>)> {
    let offset = TextSize::new((source.find(cursor).unwrap() + cursor.len()) as u32);
    label_link_completions(&parse(source).syntax(), source, offset).map(|result| {
        (
            u32::from(result.from),
            result.items.iter().map(|i| i.label.to_string()).collect(),
        )
    })
}

#[rstest]
#[case("A:\n  - x #\nB:\n", "x #", 9, &["# A", "# B"])]
#[case("A:\n  - x # \nB:\n", "x # ", 9, &["# A", "# B"])]
#[case("A:\n  - x # B\nB:\n", "x # B", 11, &["A", "B"])]
fn test_completion_shapes(
    #[case] source: &str,
    #[case] cursor: &str,
    #[case] from: u32,
    #[case] labels: &[&str],
) {
    let (actual_from, actual) = complete(source, cursor).unwrap();
    assert_eq!(actual_from, from);
    assert_eq!(actual, labels);
}

#[test]
fn test_no_completion_with_text_after_cursor() {
    assert!(complete("A:\n  - x # B\n", "x #").is_none());
}

#[test]
fn test_no_completion_without_link() {
    assert!(complete("A:\n  - x\n", "x").is_none());
    assert!(complete("A:\n  - a#\n", "a#").is_none());
}

#[test]
fn test_items_are_labels() {
    let source = "Start:\n  - go #\n";
    let offset = TextSize::of(source) - TextSize::of("\n");
    let result = label_link_completions(&parse(source).syntax(), source, offset).unwrap();
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].kind, CompletionKind::Label);
    assert_eq!(result.items[0].kind.to_lsp(), 7);
}
