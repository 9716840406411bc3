//! Label lines: duplicates, the colon, and whitespace before the name.

use text_size::TextRange;

use super::LintContext;
use crate::hir::diagnostics::{Diagnostic, codes};
use crate::hir::fix::{Fix, FixKind, TextEdit};
use crate::parser::{AstNode, LabelIdentifier};

pub(super) fn check(ctx: &LintContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for ident in ctx.root.descendants().filter_map(LabelIdentifier::cast) {
        let name = ident.name();
        let range = ident.range();
        let line = ctx.lines.line_range(range.start());

        if !ctx.labels.is_canonical(&ident) {
            diagnostics.push(
                Diagnostic::error(range, format!("There is already another label named '{name}'!"))
                    .with_code(codes::DUPLICATE_LABEL),
            );
        }

        let rest = TextRange::new(range.end(), line.end().max(range.end()));
        match ctx.text[rest].strip_prefix(':') {
            Some(after) if !after.trim().is_empty() => diagnostics.push(
                Diagnostic::error(
                    rest,
                    "There must be ONLY one colon (\":\") at the end of this line!",
                )
                .with_code(codes::TRAILING_CONTENT),
            ),
            Some(_) => {}
            None => diagnostics.push(
                Diagnostic::error(rest, "There must be a colon (\":\") at the end of this line!")
                    .with_code(codes::MISSING_COLON)
                    .with_fix(Fix::new(
                        FixKind::InsertColon,
                        "Add colon",
                        TextEdit::replace(rest, ":"),
                    )),
            ),
        }

        if range.start() > line.start() {
            let leading = TextRange::new(line.start(), range.start());
            diagnostics.push(
                Diagnostic::error(leading, "There must be no whitespace before the label!")
                    .with_code(codes::LEADING_WHITESPACE)
                    .with_fix(Fix::new(
                        FixKind::RemoveWhitespace,
                        "Remove",
                        TextEdit::delete(leading),
                    )),
            );
        }
    }

    diagnostics
}
