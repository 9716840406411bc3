//! Line prefixes: `- ` for NPC statements, `- - ` for user replies.

use text_size::{TextRange, TextSize};

use super::LintContext;
use crate::hir::diagnostics::{Diagnostic, codes};
use crate::hir::fix::{Fix, FixKind, TextEdit};
use crate::hir::indentation::line_indent;
use crate::parser::{AstNode, DialogueLine};

pub(super) fn check(ctx: &LintContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for line in ctx.root.descendants().filter_map(DialogueLine::cast) {
        let expected = line.expected_prefix();
        let start = line.range().start();
        let prefix_start = line_indent(ctx.text, start).end();
        let line_end = ctx.lines.line_range(start).end().max(prefix_start);
        let rest = &ctx.text[TextRange::new(prefix_start, line_end)];
        if rest.starts_with(expected) {
            continue;
        }

        let prefix_len = rest
            .find(|c: char| !matches!(c, ' ' | '\t' | '-'))
            .unwrap_or(rest.len());
        let range = TextRange::at(prefix_start, TextSize::new(prefix_len as u32));
        diagnostics.push(
            Diagnostic::error(range, format!("This line must begin with \"{expected}\"!"))
                .with_code(codes::INVALID_PREFIX)
                .with_fix(Fix::new(
                    FixKind::FixPrefix,
                    format!("Change to \"{expected}\""),
                    TextEdit::replace(range, expected),
                )),
        );
    }

    diagnostics
}
