use std::fmt::Display;

use thiserror::Error;

/// Failure of the read loop around the scanner.
///
/// Scanning itself never fails; these only come from obtaining input or
/// writing the rendered tokens.
#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InputUnreadable { .. } => "InputUnreadable",
            ErrorImpl::LineEditor { .. } => "LineEditor",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InputUnreadable { path, message } => ErrorTip::Suggestion(format!(
                "Could not read `{}`: {}, does the file exist?",
                path, message
            )),
            ErrorImpl::LineEditor { message } => ErrorTip::Suggestion(format!(
                "Line editor failed: {}, try piping input instead",
                message
            )),
            ErrorImpl::OutputFailed { .. } => ErrorTip::None,
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

impl From<rustyline::error::ReadlineError> for Error {
    fn from(error: rustyline::error::ReadlineError) -> Self {
        Error::new(ErrorImpl::LineEditor {
            message: error.to_string(),
        })
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("could not read input {path:?}: {message}")]
    InputUnreadable { path: String, message: String },
    #[error("line editor failure: {message}")]
    LineEditor { message: String },
    #[error("could not write output: {message}")]
    OutputFailed { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
