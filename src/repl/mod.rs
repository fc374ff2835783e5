//! Read loop around the scanner.
//!
//! Obtains one line at a time (line editor, file or pipe), scans it and
//! writes the token sequence. Parsing and evaluation are left to whoever
//! consumes the tokens.

pub mod repl;
