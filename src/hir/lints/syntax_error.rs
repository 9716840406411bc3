//! Text the parser could not place.

use super::LintContext;
use crate::hir::diagnostics::{Diagnostic, codes};
use crate::parser::{AstNode, ErrorNode};

pub(super) fn check(ctx: &LintContext<'_>) -> Vec<Diagnostic> {
    ctx.root
        .descendants()
        .filter_map(ErrorNode::cast)
        .map(|error| {
            Diagnostic::warning(error.content_range(), "syntax error.")
                .with_code(codes::SYNTAX_ERROR)
        })
        .collect()
}
