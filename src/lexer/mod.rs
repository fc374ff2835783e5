//! Lexical analysis of arithmetic expressions.
//!
//! This module contains the scanner that converts one line of input into
//! the token sequence consumed by an expression parser. It handles:
//!
//! - Single character operators and parentheses
//! - `**` versus `*` disambiguation
//! - Digit runs, kept as text
//! - Silent skipping of whitespace and unrecognised characters

pub mod lexer;
pub mod tokens;
