//! Host-supplied source model: tokens, syntax tree, and the unit seam.
//!
//! The engine does not read, decode, or parse source. A host builds a
//! [`Token`] stream and a [`SyntaxNode`] tree per file and hands them over
//! through the [`SourceUnit`] trait. Both accessors are fallible so a host
//! backed by real files can surface I/O and decoding failures; scanners
//! absorb those failures and produce no diagnostics for the unit.

use crate::types::Position;
use std::path::PathBuf;

/// Kind of a lexical token in the host's token stream.
///
/// Only [`TokenKind::Comment`] is consumed by the engine; the remaining
/// kinds exist so a host can hand over a faithful stream without
/// pre-filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A `#`-style comment, text including the leading `#`.
    Comment,
    /// An identifier or keyword.
    Name,
    /// A numeric literal.
    Number,
    /// A string literal token.
    Str,
    /// An operator or delimiter.
    Op,
    /// A logical line break.
    Newline,
    /// An indentation increase.
    Indent,
    /// An indentation decrease.
    Dedent,
    /// End of the token stream.
    EndMarker,
}

/// A single lexical token with its text and start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Raw token text.
    pub text: String,
    /// Start position of the token.
    pub position: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Shorthand for a comment token.
    #[must_use]
    pub fn comment(text: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(TokenKind::Comment, text, Position::new(line, column))
    }
}

/// A node in the host-supplied syntax tree.
///
/// The set of variants is closed: these are the only shapes the scanners
/// classify, and dispatch is a plain `match` rather than downcasting.
/// Anything the host's parser produces that has no counterpart here is
/// folded into [`SyntaxNode::Branch`] (or dropped, if it has no children
/// of interest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A string literal with its decoded value.
    StringLiteral {
        /// Decoded string value, without quotes.
        value: String,
        /// Position of the literal.
        position: Position,
    },
    /// A statement consisting of a single expression.
    ///
    /// When the inner expression is a string literal, the literal is in
    /// docstring position.
    ExpressionStatement {
        /// The wrapped expression.
        inner: Box<SyntaxNode>,
    },
    /// A formal parameter, possibly carrying a string-valued annotation
    /// (a forward-reference style annotation).
    Parameter {
        /// Parameter name.
        name: String,
        /// String annotation value, if the annotation is textual.
        annotation: Option<String>,
        /// Position of the parameter.
        position: Position,
    },
    /// A call-site keyword argument. Only the name is classified; the
    /// value, if textual, appears separately as a `StringLiteral` child.
    KeywordArgument {
        /// Argument name.
        name: String,
        /// Position of the argument.
        position: Position,
    },
    /// An interior node with no classification of its own: module bodies,
    /// function bodies, call argument lists.
    Branch {
        /// Child nodes in source order.
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// Creates a string literal node.
    #[must_use]
    pub fn string(value: impl Into<String>, line: u32, column: u32) -> Self {
        Self::StringLiteral {
            value: value.into(),
            position: Position::new(line, column),
        }
    }

    /// Creates an expression statement wrapping `inner`.
    #[must_use]
    pub fn expr_statement(inner: SyntaxNode) -> Self {
        Self::ExpressionStatement {
            inner: Box::new(inner),
        }
    }

    /// Creates a branch node from its children.
    #[must_use]
    pub fn branch(children: Vec<SyntaxNode>) -> Self {
        Self::Branch { children }
    }
}

/// Errors a host may surface when the engine asks for tokens or tree.
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    /// The source could not be read for re-tokenization.
    #[error("failed to read source {path}: {source}")]
    Unreadable {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The source bytes are not decodable text (e.g., binary content).
    #[error("source {path} is not decodable text")]
    Undecodable {
        /// Path that failed to decode.
        path: PathBuf,
    },

    /// No syntax tree is available for this unit.
    #[error("no syntax tree available for this unit")]
    MissingTree,
}

/// An opaque handle to one file's content, owned by the host.
///
/// The engine only reads through this trait; it never mutates the unit.
/// `tokens` is called at most once per comment scan and must return the
/// stream in source-position order. Implementations backed by file handles
/// must release them on every path, including the error path.
pub trait SourceUnit {
    /// Produces the unit's token stream, in position order.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError`] if the source cannot be read or decoded.
    fn tokens(&self) -> Result<Vec<Token>, UnitError>;

    /// Returns the unit's syntax tree root.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::MissingTree`] (or a host-specific failure) if
    /// no tree could be built for this unit.
    fn tree(&self) -> Result<&SyntaxNode, UnitError>;
}

/// A [`SourceUnit`] holding pre-built tokens and tree in memory.
///
/// The simplest host-side implementation; also what the engine's own tests
/// scan against.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUnit {
    tokens: Vec<Token>,
    tree: Option<SyntaxNode>,
}

impl InMemoryUnit {
    /// Creates a unit from a token stream and an optional tree.
    #[must_use]
    pub fn new(tokens: Vec<Token>, tree: Option<SyntaxNode>) -> Self {
        Self { tokens, tree }
    }
}

impl SourceUnit for InMemoryUnit {
    fn tokens(&self) -> Result<Vec<Token>, UnitError> {
        Ok(self.tokens.clone())
    }

    fn tree(&self) -> Result<&SyntaxNode, UnitError> {
        self.tree.as_ref().ok_or(UnitError::MissingTree)
    }
}
