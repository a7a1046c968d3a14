//! Literal scanner: NLE002 over the unit's syntax tree.

use nle_lint_core::{is_non_english, is_suppressed, Diagnostic, Origin, SyntaxNode};

/// Lazy pre-order traversal yielding NLE002 diagnostics.
///
/// Classification is a first-match-wins dispatch over the closed
/// [`SyntaxNode`] variant set; each node matches at most one rule. Because
/// the host builds the tree in source order, each origin bucket comes out
/// ascending by position.
#[derive(Debug)]
pub struct LiteralScan<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl Iterator for LiteralScan<'_> {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Diagnostic> {
        while let Some(node) = self.stack.pop() {
            match node {
                SyntaxNode::ExpressionStatement { inner } => {
                    // A literal standing alone as an expression statement is
                    // a docstring. The docstring rule consumes it: the inner
                    // literal is never reclassified as a plain string.
                    if let SyntaxNode::StringLiteral { value, position } = inner.as_ref() {
                        if is_non_english(value) {
                            return Some(Diagnostic::new(*position, Origin::Docstring));
                        }
                    } else {
                        self.stack.push(inner);
                    }
                }
                SyntaxNode::StringLiteral { value, position } => {
                    if !is_suppressed(value) && is_non_english(value) {
                        return Some(Diagnostic::new(*position, Origin::StringLiteral));
                    }
                }
                SyntaxNode::Parameter {
                    annotation: Some(annotation),
                    position,
                    ..
                } => {
                    if is_non_english(annotation) {
                        return Some(Diagnostic::new(*position, Origin::Annotation));
                    }
                }
                SyntaxNode::Parameter { .. } => {}
                SyntaxNode::KeywordArgument { name, position } => {
                    // The name is classified here; a textual value appears
                    // separately as a StringLiteral sibling.
                    if is_non_english(name) {
                        return Some(Diagnostic::new(*position, Origin::KeywordArgument));
                    }
                }
                SyntaxNode::Branch { children } => {
                    self.stack.extend(children.iter().rev());
                }
            }
        }
        None
    }
}

/// Scans the syntax tree for non-English text in string literals,
/// docstrings, string annotations, and keyword-argument names.
///
/// Suppression applies to plain string literals only; docstrings,
/// annotations, and keyword-argument names get the non-ASCII test alone,
/// matching the original checker.
#[must_use]
pub fn scan_literals(tree: &SyntaxNode) -> LiteralScan<'_> {
    LiteralScan { stack: vec![tree] }
}
