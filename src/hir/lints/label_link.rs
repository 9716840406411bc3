//! Label links: unknown targets and links that skip a nested block.

use text_size::TextRange;

use super::LintContext;
use crate::hir::diagnostics::{Diagnostic, codes};
use crate::hir::fix::{Fix, FixKind, TextEdit};
use crate::parser::{AstNode, DialogueLine, LabelLinkIdentifier};

pub(super) fn check(ctx: &LintContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for ident in ctx.root.descendants().filter_map(LabelLinkIdentifier::cast) {
        let name = ident.name();
        let range = ident.range();

        if !ctx.labels.contains(&name) {
            let fixes = ctx.labels.names().map(|label| {
                Fix::new(
                    FixKind::ChangeLabel,
                    format!("Change to \"{label}\""),
                    TextEdit::replace(range, label.as_str()),
                )
            });
            diagnostics.push(
                Diagnostic::error(range, format!("There is no label named \"{name}\"!"))
                    .with_code(codes::UNDEFINED_LABEL)
                    .with_fixes(fixes),
            );
        }

        let Some(link) = ident.link() else { continue };
        let Some(owner) = link.owner() else { continue };
        let Some(body) = owner.body().filter(|body| body.has_lines()) else {
            continue;
        };

        let (this, children) = match owner {
            DialogueLine::Statement(_) => ("NPC statement", "replies"),
            DialogueLine::Reply(_) => ("user reply", "NPC statements"),
        };
        let link_range = link.range();
        let link_from = link
            .syntax()
            .prev_sibling()
            .map_or(link_range.start(), |prev| prev.text_range().end());

        diagnostics.push(
            Diagnostic::warning(
                range,
                format!(
                    "This label link causes the conversation to go to the \"{name}\" label \
                     after this {this}, making the {children} after this redundant"
                ),
            )
            .with_code(codes::REDUNDANT_LINK)
            .with_fix(Fix::new(
                FixKind::RemoveLink,
                "Remove this label link",
                TextEdit::delete(TextRange::new(link_from, link_range.end())),
            ))
            .with_fix(Fix::new(
                FixKind::RemoveBranch,
                format!("Remove the {children} underneath (danger!)"),
                TextEdit::delete(body.range()),
            )),
        );
    }

    diagnostics
}
