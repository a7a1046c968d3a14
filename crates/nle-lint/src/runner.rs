//! Engine entry point: concatenates the enabled scans for one unit.

use nle_lint_core::{CheckConfig, Diagnostic, SourceUnit};
use nle_lint_rules::{scan_comments, scan_literals};
use tracing::{debug, warn};

/// Runs the engine over one source unit.
///
/// Lazily produces the comment scan (NLE001) followed by the literal scan
/// (NLE002), each preserving its internal position order. Consumption is
/// pull-based: a host that stops draining early stops the scan early.
///
/// A disabled class's scanner is never constructed. Failures inside the
/// unit (unreadable source, missing tree) are absorbed into zero
/// diagnostics for the affected class; nothing propagates to the caller.
pub fn run<'a>(
    unit: &'a dyn SourceUnit,
    config: CheckConfig,
) -> impl Iterator<Item = Diagnostic> + 'a {
    let comments = if config.comments_enabled {
        Some(scan_comments(unit))
    } else {
        debug!("comment scanning disabled, skipping");
        None
    };

    let literals = if config.strings_enabled {
        match unit.tree() {
            Ok(tree) => Some(scan_literals(tree)),
            Err(e) => {
                warn!("syntax tree unavailable, skipping string scan: {e}");
                None
            }
        }
    } else {
        debug!("string scanning disabled, skipping");
        None
    };

    comments
        .into_iter()
        .flatten()
        .chain(literals.into_iter().flatten())
}
