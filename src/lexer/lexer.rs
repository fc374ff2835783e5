use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})")).expect("scanner patterns are valid regexes")
}

lazy_static! {
    // Tried in order at the cursor; `**` has to stay ahead of `*`.
    // Digits are ASCII only.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: anchored("[0-9]+"), handler: number_handler },
        RegexPattern { regex: anchored("\\*\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Pow, "**") },
        RegexPattern { regex: anchored("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Mul, "*") },
        RegexPattern { regex: anchored("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Add, "+") },
        RegexPattern { regex: anchored("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Sub, "-") },
        RegexPattern { regex: anchored("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Div, "/") },
        RegexPattern { regex: anchored("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
        RegexPattern { regex: anchored("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
    ];
}

/// Everything one pass over a line produced.
///
/// `skipped` holds the span of every character that produced no token, in
/// input order. Together with the token spans it covers the line exactly
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub skipped: Vec<Span>,
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    skipped: Vec<Span>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            skipped: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, text = %token.text, offset = self.pos, "token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span::new(self.pos, self.pos + len)
    }

    /// Drops the character under the cursor without emitting a token.
    ///
    /// Whitespace and anything outside the operator and digit set end up
    /// here. This is the scanner's policy, not an error path.
    fn skip(&mut self) {
        if let Some(ch) = self.at() {
            trace!(character = ?ch, offset = self.pos, "skipping unrecognised character");
            self.skipped.push(self.span_of(ch.len_utf8()));
            self.advance_n(ch.len_utf8());
        }
    }

    fn finish(self) -> Scanned {
        debug!(
            tokens = self.tokens.len(),
            skipped = self.skipped.len(),
            "scanned line"
        );
        Scanned {
            tokens: self.tokens,
            skipped: self.skipped,
        }
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

/// Scans one line and also reports which characters were skipped.
pub fn scan_detailed(source: &str) -> Scanned {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, lexeme)) => handler(&mut lex, lexeme),
            None => lex.skip(),
        }
    }

    lex.finish()
}

/// Converts one line of input into its token sequence.
///
/// Never fails: characters outside `0-9 + - * / ( )` are dropped silently,
/// and a trailing `*` is `Mul` since there is nothing left to pair it with.
pub fn scan(source: &str) -> Vec<Token> {
    scan_detailed(source).tokens
}
