//! Lexer: turns preprocessed source text into a token stream, one token at
//! a time.
//!
//! The lexer is a lazy, restartable-by-construction cursor: it holds
//! `(source, position, current)` and each call to [`Lexer::advance`]
//! mutates position and stores the freshly scanned token as `current`.
//! Scanning rules are tried in a fixed order (whitespace/newline, EOF,
//! digit run, identifier/keyword run, `==`/`=`, `..`/`.`, string literal,
//! single-char punctuation, then failure) exactly as laid out in the
//! language's scanning rules.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use luac_util::{InterpError, InterpResult, Interner, Span};

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    current: Token,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned before the first token. Call [`advance`]
    /// once to populate `current` before reading it.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            current: Token::new(TokenKind::Eof, Span::DUMMY),
        }
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Scans the next token, stores it as `current`, and returns it.
    pub fn advance(&mut self, interner: &mut Interner) -> InterpResult<&Token> {
        self.current = self.scan(interner)?;
        Ok(&self.current)
    }

    fn scan(&mut self, interner: &mut Interner) -> InterpResult<Token> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(Token::new(TokenKind::Eof, self.span_here()));
            }

            let c = self.cursor.current();

            if c == b'\n' {
                let span = self.span_here();
                self.cursor.advance();
                return Ok(Token::new(TokenKind::Newline, span));
            }

            if c.is_ascii_whitespace() {
                self.cursor.advance();
                continue;
            }

            break;
        }

        let span_start = self.cursor.position();
        let line = self.cursor.line();
        let c = self.cursor.current();

        if c.is_ascii_digit() {
            return Ok(self.lex_int(span_start, line));
        }

        if c.is_ascii_alphabetic() || c == b'_' {
            return Ok(self.lex_ident(interner, span_start, line));
        }

        match c {
            b'=' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::Eq, self.span_from(span_start, line)))
                } else {
                    Ok(Token::new(TokenKind::Assign, self.span_from(span_start, line)))
                }
            }
            b'.' => {
                self.cursor.advance();
                if self.cursor.current() == b'.' {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::Concat, self.span_from(span_start, line)))
                } else {
                    Err(InterpError::UnexpectedChar {
                        found: '.',
                        span: self.span_from(span_start, line),
                    })
                }
            }
            b'"' => self.lex_string(span_start, line),
            b'+' => self.single(TokenKind::Plus, span_start, line),
            b'-' => self.single(TokenKind::Minus, span_start, line),
            b'*' => self.single(TokenKind::Star, span_start, line),
            b'/' => self.single(TokenKind::Slash, span_start, line),
            b'(' => self.single(TokenKind::LParen, span_start, line),
            b')' => self.single(TokenKind::RParen, span_start, line),
            b'>' => self.single(TokenKind::Gt, span_start, line),
            b'<' => self.single(TokenKind::Lt, span_start, line),
            b',' => self.single(TokenKind::Comma, span_start, line),
            other => Err(InterpError::UnexpectedChar {
                found: other as char,
                span: self.span_from(span_start, line),
            }),
        }
    }

    fn single(&mut self, kind: TokenKind, start: usize, line: u32) -> InterpResult<Token> {
        self.cursor.advance();
        Ok(Token::new(kind, self.span_from(start, line)))
    }

    fn lex_int(&mut self, start: usize, line: u32) -> Token {
        let mut value: i64 = 0;
        while self.cursor.current().is_ascii_digit() {
            let digit = (self.cursor.advance() - b'0') as i64;
            value = value * 10 + digit;
        }
        Token::new(TokenKind::Int(value), self.span_from(start, line))
    }

    fn lex_ident(&mut self, interner: &mut Interner, start: usize, line: u32) -> Token {
        let mut text = String::new();
        while {
            let c = self.cursor.current();
            c.is_ascii_alphanumeric() || c == b'_'
        } {
            text.push(self.cursor.advance() as char);
        }
        let span = self.span_from(start, line);
        match TokenKind::keyword(&text) {
            Some(kind) => Token::new(kind, span),
            None => Token::new(TokenKind::Ident(interner.intern(&text)), span),
        }
    }

    fn lex_string(&mut self, start: usize, line: u32) -> InterpResult<Token> {
        self.cursor.advance(); // opening quote
        // Accumulated as raw bytes rather than `char`s: the body is free-form
        // UTF-8 text, and a multi-byte codepoint's continuation bytes must
        // never be decoded one at a time (they are not valid `char`s on their
        // own). The quote/backslash/escape letters checked below are all
        // single-byte ASCII, so they can never appear as part of a multi-byte
        // sequence and splitting on them can't cut one in half.
        let mut bytes = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(InterpError::UnterminatedString {
                    span: self.span_from(start, line),
                });
            }
            let c = self.cursor.advance();
            match c {
                b'"' => break,
                b'\\' => {
                    if self.cursor.is_at_end() {
                        return Err(InterpError::UnterminatedString {
                            span: self.span_from(start, line),
                        });
                    }
                    match self.cursor.current() {
                        b'"' => {
                            self.cursor.advance();
                            bytes.push(b'"');
                        }
                        b'n' => {
                            self.cursor.advance();
                            bytes.push(b'\n');
                        }
                        b't' => {
                            self.cursor.advance();
                            bytes.push(b'\t');
                        }
                        // Unknown escape: keep the backslash literally and
                        // re-scan the following byte through the normal path.
                        _ => bytes.push(b'\\'),
                    }
                }
                other => bytes.push(other),
            }
        }
        let content = String::from_utf8(bytes)
            .expect("source is valid UTF-8 and escape handling never splits a multi-byte sequence");
        Ok(Token::new(TokenKind::Str(content), self.span_from(start, line)))
    }

    fn span_here(&self) -> Span {
        let pos = self.cursor.position() as u32;
        Span::new(pos, pos, self.cursor.line())
    }

    fn span_from(&self, start: usize, line: u32) -> Span {
        Span::new(start as u32, self.cursor.position() as u32, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<TokenKind> {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let tok = lexer.advance(&mut interner).expect("lex ok").clone();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn integers_and_identifiers() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("local x = 42");
        let kinds: Vec<_> = std::iter::from_fn(|| {
            let tok = lexer.advance(&mut interner).expect("lex ok").clone();
            (tok.kind != TokenKind::Eof).then_some(tok.kind)
        })
        .collect();
        assert_eq!(kinds.len(), 4);
        assert_eq!(kinds[0], TokenKind::Local);
        match &kinds[1] {
            TokenKind::Ident(sym) => assert_eq!(interner.resolve(*sym), "x"),
            other => panic!("expected ident, got {other:?}"),
        }
        assert_eq!(kinds[2], TokenKind::Assign);
        assert_eq!(kinds[3], TokenKind::Int(42));
    }

    #[test]
    fn consecutive_newlines_each_emit_a_token() {
        let kinds = tokens("\n\n");
        assert_eq!(kinds, vec![TokenKind::Newline, TokenKind::Newline, TokenKind::Eof]);
    }

    #[test]
    fn equals_vs_assign() {
        assert_eq!(tokens("=="), vec![TokenKind::Eq, TokenKind::Eof]);
        assert_eq!(tokens("="), vec![TokenKind::Assign, TokenKind::Eof]);
    }

    #[test]
    fn concat_requires_two_dots() {
        assert_eq!(tokens(".."), vec![TokenKind::Concat, TokenKind::Eof]);
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(".");
        assert!(lexer.advance(&mut interner).is_err());
    }

    #[test]
    fn string_escapes() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("\"a\\nb\\tc\\\"d\"");
        let tok = lexer.advance(&mut interner).unwrap().clone();
        assert_eq!(tok.kind, TokenKind::Str("a\nb\tc\"d".into()));
    }

    #[test]
    fn non_ascii_string_content_round_trips() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("\"caf\u{e9}\"");
        let tok = lexer.advance(&mut interner).unwrap().clone();
        assert_eq!(tok.kind, TokenKind::Str("caf\u{e9}".into()));
    }

    #[test]
    fn unknown_escape_keeps_backslash_literally() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("\"a\\zb\"");
        let tok = lexer.advance(&mut interner).unwrap().clone();
        assert_eq!(tok.kind, TokenKind::Str("a\\zb".into()));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("\"abc");
        assert!(lexer.advance(&mut interner).is_err());
    }

    #[test]
    fn reserved_words_become_keywords() {
        assert_eq!(
            tokens("while do end"),
            vec![TokenKind::While, TokenKind::Do, TokenKind::End, TokenKind::Eof]
        );
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("@");
        assert!(lexer.advance(&mut interner).is_err());
    }

    #[test]
    fn eof_is_idempotent() {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.advance(&mut interner).unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.advance(&mut interner).unwrap().kind, TokenKind::Eof);
    }
}
