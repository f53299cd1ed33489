//! Unified error type for the interpreter pipeline.
//!
//! Every phase (I/O, lexing, parsing, evaluation) reports into this one enum
//! so the driver can format a single diagnostic line and pick an exit code
//! without matching on four different error types.

use crate::span::Span;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpError {
    #[error("Error: File extension must be .lua")]
    BadExtension,

    #[error("Error: File {0} not found")]
    FileNotFound(String),

    #[error("{span}: unexpected character: {found:?}")]
    UnexpectedChar { found: char, span: Span },

    #[error("{span}: string literal not closed")]
    UnterminatedString { span: Span },

    #[error("{span}: expected {expected}, got {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("{span}: variable '{name}' already declared")]
    AlreadyDeclared { name: String, span: Span },

    #[error("{span}: variable '{name}' not declared")]
    NotDeclared { name: String, span: Span },

    #[error("{span}: function '{name}' is not defined")]
    UnknownFunction { name: String, span: Span },

    #[error("{span}: function '{name}' redeclared")]
    FunctionRedeclared { name: String, span: Span },

    #[error("{span}: function '{name}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("{span}: {message}")]
    TypeError { message: String, span: Span },

    #[error("{span}: division by zero")]
    DivisionByZero { span: Span },

    #[error("{span}: failed to read an integer from standard input")]
    BadRead { span: Span },

    #[error("unexpected tokens after end of program")]
    TrailingTokens,

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl InterpError {
    /// The source location this error points at, if it has one. Variants
    /// raised before any source file is read (or after the whole program has
    /// already been consumed) carry no span.
    pub fn span(&self) -> Option<Span> {
        match self {
            InterpError::UnexpectedChar { span, .. }
            | InterpError::UnterminatedString { span }
            | InterpError::UnexpectedToken { span, .. }
            | InterpError::AlreadyDeclared { span, .. }
            | InterpError::NotDeclared { span, .. }
            | InterpError::UnknownFunction { span, .. }
            | InterpError::FunctionRedeclared { span, .. }
            | InterpError::ArityMismatch { span, .. }
            | InterpError::TypeError { span, .. }
            | InterpError::DivisionByZero { span }
            | InterpError::BadRead { span } => Some(*span),
            InterpError::BadExtension
            | InterpError::FileNotFound(_)
            | InterpError::TrailingTokens
            | InterpError::Io { .. } => None,
        }
    }
}

pub type InterpResult<T> = std::result::Result<T, InterpError>;
