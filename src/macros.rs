//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed operators
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: $text,
            span: $span,
        }
    };
}

/// Creates a handler for a fixed operator lexeme.
///
/// The generated function pushes a token with the given kind and text at the
/// cursor and advances the cursor by the lexeme's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: anchored("\\+"),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Add, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $text:literal) => {
        |lexer, _matched| {
            let span = lexer.span_of($text.len());
            lexer.push(MK_TOKEN!($kind, String::from($text), span));
            lexer.advance_n($text.len());
        }
    };
}
