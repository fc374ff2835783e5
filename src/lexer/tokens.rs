use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,

    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Pow, // **

    LeftParen,
    RightParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified slice of the input line.
///
/// `text` is always the exact source text: the operator itself, or the
/// whole digit run for a `Number`. Digits are not converted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

impl Token {
    /// One line summary in the form `Kind (text)`.
    pub fn debug(&self) -> String {
        format!("{} ({})", self.kind, self.text)
    }
}
