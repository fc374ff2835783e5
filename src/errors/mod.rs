//! Error types for the read loop.
//!
//! The scanner has no error path. This module covers what can go wrong
//! around it:
//!
//! - Input files that cannot be opened or read
//! - Line editor failures in interactive mode
//! - Failures writing the rendered tokens
//! - Names and suggestions for reporting

pub mod errors;
