//! luac-lex - tokenizer for the interpreted language
//!
//! Exposes a single-pass, lazy [`Lexer`] that yields one [`Token`] per call
//! to [`Lexer::advance`]. Identifiers are interned through a caller-owned
//! [`luac_util::Interner`] rather than a global table.

mod cursor;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
