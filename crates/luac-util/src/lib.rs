//! luac-util - shared foundation for the luac pipeline
//!
//! Holds what every other crate in the workspace needs: interned identifiers
//! (`Symbol`/`Interner`), source positions (`Span`), the one-file
//! `SourceMap` diagnostics pull line text from, and the unified error type
//! (`InterpError`) diagnostics are reported through.

mod error;
mod source_map;
mod span;
mod symbol;

pub use error::{InterpError, InterpResult};
pub use source_map::SourceMap;
pub use span::Span;
pub use symbol::{Interner, Symbol};
