//! # nle-lint-core
//!
//! Core framework for non-English text linting.
//!
//! This crate provides the foundational types for building checkers that
//! flag non-ASCII text in source code. It includes:
//!
//! - [`Diagnostic`] and [`DiagnosticCode`] for representing findings
//! - [`SourceUnit`] as the seam to a host that owns parsing and tokenization
//! - [`Token`] and [`SyntaxNode`] as the host-supplied source model
//! - [`CheckConfig`] and [`ConfigOverrides`] for the layered configuration
//!   surface
//!
//! The engine never reads or parses source itself; a host hands over a
//! token stream and a syntax tree per unit, and drains the diagnostics the
//! scanners produce.
//!
//! ## Example
//!
//! ```ignore
//! use nle_lint_core::{CheckConfig, InMemoryUnit};
//!
//! let unit = InMemoryUnit::new(tokens, Some(tree));
//! let config = CheckConfig::default();
//! for diagnostic in nle_lint::run(&unit, config) {
//!     eprintln!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod source;
mod text;
mod types;

pub use config::{resolve, CheckConfig, ConfigError, ConfigOverrides};
pub use source::{InMemoryUnit, SourceUnit, SyntaxNode, Token, TokenKind, UnitError};
pub use text::{is_non_english, is_suppressed, SUPPRESSION_MARKER};
pub use types::{Diagnostic, DiagnosticCode, DiagnosticReport, Origin, Position};
