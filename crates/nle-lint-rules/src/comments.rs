//! Comment scanner: NLE001 over the unit's token stream.

use nle_lint_core::{
    is_non_english, is_suppressed, Diagnostic, Origin, SourceUnit, Token, TokenKind,
};
use tracing::warn;

/// Lazy iterator over NLE001 diagnostics for one unit's comments.
///
/// Yields diagnostics in non-decreasing (line, column) order because the
/// token stream is itself position-ordered. One diagnostic per matching
/// comment token, never one per occurrence within the comment.
#[derive(Debug)]
pub struct CommentScan {
    tokens: std::vec::IntoIter<Token>,
}

impl Iterator for CommentScan {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Diagnostic> {
        for token in self.tokens.by_ref() {
            if token.kind != TokenKind::Comment {
                continue;
            }
            // Suppression is checked first: a suppressed comment is skipped
            // regardless of its content.
            if is_suppressed(&token.text) {
                continue;
            }
            if is_non_english(&token.text) {
                return Some(Diagnostic::new(token.position, Origin::Comment));
            }
        }
        None
    }
}

/// Scans the unit's comment tokens for non-English text.
///
/// Fail-open: if the unit's token stream cannot be produced (unreadable
/// file, binary content), the scan yields zero diagnostics and no error
/// reaches the caller, so one broken file never aborts a batch.
#[must_use]
pub fn scan_comments(unit: &dyn SourceUnit) -> CommentScan {
    let tokens = match unit.tokens() {
        Ok(tokens) => tokens,
        Err(e) => {
            warn!("token stream unavailable, skipping comment scan: {e}");
            Vec::new()
        }
    };
    CommentScan {
        tokens: tokens.into_iter(),
    }
}
