//! # nle-lint
//!
//! Non-English text lint engine.
//!
//! Scans one source unit for non-ASCII text in comments, string literals,
//! docstrings, string-valued parameter annotations, and keyword-argument
//! names, and reports each occurrence as a positioned, coded diagnostic.
//!
//! This is the facade crate: it re-exports the core types and scanners and
//! provides [`run`], the engine's entry point.
//!
//! ## Quick start
//!
//! ```
//! use nle_lint::{run, CheckConfig, InMemoryUnit, Token};
//!
//! let unit = InMemoryUnit::new(
//!     vec![Token::comment("# \u{41f}\u{440}\u{438}\u{432}\u{435}\u{442}", 1, 0)],
//!     None,
//! );
//!
//! for diagnostic in run(&unit, CheckConfig::default()) {
//!     // "1:0: NLE001 Non-English text in comment"
//!     println!("{diagnostic}");
//! }
//! ```
//!
//! ## Suppression
//!
//! A fragment carrying the inline `# noqa` marker is exempt from
//! reporting. The marker applies to comments and plain string literals;
//! docstrings, annotations, and keyword-argument names are not
//! suppressible.
//!
//! ## Configuration
//!
//! Two independently toggled diagnostic classes, resolved once per run:
//!
//! ```
//! use nle_lint::ConfigOverrides;
//!
//! let overrides = ConfigOverrides::parse("strings = true").unwrap();
//! let config = overrides.resolve();
//! assert!(config.comments_enabled && config.strings_enabled);
//! ```

#![forbid(unsafe_code)]

// Re-export core types and predicates
pub use nle_lint_core::*;

/// Built-in scanners.
pub mod rules {
    pub use nle_lint_rules::*;
}

mod runner;

pub use runner::run;
