//! Indentation consistency against the unit of the first NPC statement.

use super::LintContext;
use crate::hir::diagnostics::{Diagnostic, codes};
use crate::hir::fix::{Fix, FixKind, TextEdit};
use crate::hir::indentation::{IndentKind, indentation_mismatches, infer_indentation_or};

pub(super) fn check(ctx: &LintContext<'_>) -> Vec<Diagnostic> {
    let info = infer_indentation_or(&ctx.root, ctx.text, ctx.config.default_tab_size);

    if info.kind == IndentKind::Mixed {
        let Some(range) = info.source else {
            return Vec::new();
        };
        // Nothing else is checked until the first statement is settled.
        return vec![
            Diagnostic::warning(range, "The indentation here contains both spaces and tabs!")
                .with_code(codes::MIXED_INDENTATION)
                .with_fix(Fix::new(
                    FixKind::ConvertToSpaces,
                    "Convert to spaces",
                    TextEdit::replace(range, " ".repeat(info.unit)),
                ))
                .with_fix(Fix::new(
                    FixKind::ConvertToTabs,
                    "Convert to tabs",
                    TextEdit::replace(range, "\t".repeat(info.unit)),
                )),
        ];
    }

    let noun = info.kind.noun();
    indentation_mismatches(&ctx.root, ctx.text, info.unit, info.kind)
        .into_iter()
        .map(|mismatch| {
            Diagnostic::warning(
                mismatch.range,
                format!(
                    "The indentation here should be {} {noun} for consistency.",
                    mismatch.expected
                ),
            )
            .with_code(codes::INCONSISTENT_INDENTATION)
            .with_fix(Fix::new(
                FixKind::Reindent,
                "Fix indentation",
                TextEdit::replace(mismatch.range, mismatch.replacement),
            ))
        })
        .collect()
}
