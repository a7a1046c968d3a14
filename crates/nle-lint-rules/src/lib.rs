//! # nle-lint-rules
//!
//! Built-in scanners for nle-lint.
//!
//! ## Diagnostics
//!
//! | Code | Origin | Trigger |
//! |------|--------|---------|
//! | NLE001 | comment | non-ASCII text in a comment token, not suppressed |
//! | NLE002 | string-literal | non-ASCII text in a string literal, not suppressed |
//! | NLE002 | docstring | non-ASCII text in a docstring |
//! | NLE002 | annotation | non-ASCII text in a string parameter annotation |
//! | NLE002 | keyword-argument | non-ASCII text in a keyword-argument name |
//!
//! Both scanners are lazy iterators: diagnostics are produced on demand as
//! the host pulls them, so an early-stopping consumer never pays for a full
//! scan.
//!
//! ## Usage
//!
//! ```ignore
//! use nle_lint_rules::{scan_comments, scan_literals};
//!
//! for diagnostic in scan_comments(&unit) {
//!     eprintln!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comments;
mod literals;

pub use comments::{scan_comments, CommentScan};
pub use literals::{scan_literals, LiteralScan};

/// Re-export core types for convenience.
pub use nle_lint_core::{Diagnostic, DiagnosticCode, Origin, SourceUnit, SyntaxNode};
