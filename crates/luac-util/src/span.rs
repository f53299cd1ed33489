//! Source positions.
//!
//! A `Span` is a half-open byte range into the (single) source file being
//! interpreted, plus the 1-based line it starts on. It is attached to tokens,
//! to AST nodes that can fail at runtime, and to diagnostics, purely for error
//! reporting — nothing in the evaluator branches on a `Span`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    pub fn new(start: u32, end: u32, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}
