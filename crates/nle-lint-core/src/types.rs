//! Core types for diagnostics and source positions.

use miette::SourceSpan;
use serde::{Deserialize, Serialize};

/// Position of a token or node within a source unit.
///
/// Follows the host tokenizer convention: lines are 1-indexed, columns are
/// 0-indexed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (0-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Calculates the byte offset of this position within `source`.
    ///
    /// Returns the offset of the start of the last line if the position's
    /// line is past the end of the source.
    #[must_use]
    pub fn offset_in(self, source: &str) -> usize {
        let mut offset = 0;
        for (i, line_content) in source.lines().enumerate() {
            if i + 1 == self.line as usize {
                return offset + self.column as usize;
            }
            offset += line_content.len() + 1; // +1 for newline
        }
        offset
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Diagnostic code identifying the reported rule class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Non-English text in a comment.
    #[serde(rename = "NLE001")]
    Nle001,
    /// Non-English text in a string literal, docstring, annotation, or
    /// keyword-argument name.
    #[serde(rename = "NLE002")]
    Nle002,
}

impl DiagnosticCode {
    /// Returns the code as rendered to users (e.g., "NLE001").
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nle001 => "NLE001",
            Self::Nle002 => "NLE002",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of source fragment a diagnostic originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// A `#`-style comment token.
    Comment,
    /// A string literal outside docstring position.
    StringLiteral,
    /// A string literal standing alone as an expression statement.
    Docstring,
    /// A string-valued parameter annotation.
    Annotation,
    /// The name of a call-site keyword argument.
    KeywordArgument,
}

impl Origin {
    /// Returns the diagnostic code this origin reports under.
    #[must_use]
    pub fn code(self) -> DiagnosticCode {
        match self {
            Self::Comment => DiagnosticCode::Nle001,
            Self::StringLiteral | Self::Docstring | Self::Annotation | Self::KeywordArgument => {
                DiagnosticCode::Nle002
            }
        }
    }

    /// Returns the fixed user-facing message for this origin.
    ///
    /// These strings are part of the reporting contract; hosts match on
    /// them, so they must not change.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Comment => "Non-English text in comment",
            Self::StringLiteral => "Non-English text in string literal",
            Self::Docstring => "Non-English text in docstring",
            Self::Annotation => "Non-English text in annotation",
            Self::KeywordArgument => "Non-English text in keyword argument",
        }
    }
}

/// A single reported occurrence of non-English text.
///
/// Immutable value type: once constructed, a diagnostic is never modified.
/// Its position always refers into the source unit that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Position of the offending fragment.
    pub position: Position,
    /// Diagnostic code (e.g., NLE001).
    pub code: DiagnosticCode,
    /// Kind of fragment the text was found in.
    pub origin: Origin,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic for the given origin at the given position.
    ///
    /// Code and message are derived from the origin.
    #[must_use]
    pub fn new(position: Position, origin: Origin) -> Self {
        Self {
            position,
            code: origin.code(),
            origin,
            message: origin.message().to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} {}",
            self.position.line, self.position.column, self.code, self.message
        )
    }
}

/// Converts a [`Diagnostic`] to a miette diagnostic for rich error display.
///
/// The span is computed against the unit's source text, which the host
/// owns; the engine itself never needs it.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[label("{origin_label}")]
    span: SourceSpan,
    origin_label: String,
}

impl DiagnosticReport {
    /// Builds a report for `diagnostic`, locating its span within `source`.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, source: &str) -> Self {
        let offset = diagnostic.position.offset_in(source);
        Self {
            message: format!("[{}] {}", diagnostic.code, diagnostic.message),
            span: SourceSpan::from((offset, 1)),
            origin_label: diagnostic.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_renders_uppercase() {
        assert_eq!(DiagnosticCode::Nle001.to_string(), "NLE001");
        assert_eq!(DiagnosticCode::Nle002.to_string(), "NLE002");
    }

    #[test]
    fn origin_maps_to_code() {
        assert_eq!(Origin::Comment.code(), DiagnosticCode::Nle001);
        assert_eq!(Origin::StringLiteral.code(), DiagnosticCode::Nle002);
        assert_eq!(Origin::Docstring.code(), DiagnosticCode::Nle002);
        assert_eq!(Origin::Annotation.code(), DiagnosticCode::Nle002);
        assert_eq!(Origin::KeywordArgument.code(), DiagnosticCode::Nle002);
    }

    #[test]
    fn message_vocabulary_is_fixed() {
        assert_eq!(Origin::Comment.message(), "Non-English text in comment");
        assert_eq!(
            Origin::StringLiteral.message(),
            "Non-English text in string literal"
        );
        assert_eq!(Origin::Docstring.message(), "Non-English text in docstring");
        assert_eq!(
            Origin::Annotation.message(),
            "Non-English text in annotation"
        );
        assert_eq!(
            Origin::KeywordArgument.message(),
            "Non-English text in keyword argument"
        );
    }

    #[test]
    fn diagnostic_display_format() {
        let d = Diagnostic::new(Position::new(3, 4), Origin::Comment);
        assert_eq!(d.to_string(), "3:4: NLE001 Non-English text in comment");
    }

    #[test]
    fn position_ordering_is_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(2, 1) < Position::new(2, 5));
    }

    #[test]
    fn offset_calculation() {
        let source = "line1\nline2\nline3";
        assert_eq!(Position::new(1, 0).offset_in(source), 0);
        assert_eq!(Position::new(2, 0).offset_in(source), 6);
        assert_eq!(Position::new(2, 2).offset_in(source), 8);
    }

    #[test]
    fn report_spans_into_source() {
        let source = "# ok\nx = \"\u{43f}\u{440}\u{438}\u{432}\u{435}\u{442}\"\n";
        let d = Diagnostic::new(Position::new(2, 4), Origin::StringLiteral);
        let report = DiagnosticReport::new(&d, source);
        assert!(report.message.contains("NLE002"));
    }
}
