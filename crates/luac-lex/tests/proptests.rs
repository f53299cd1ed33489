//! Property tests: the lexer must never panic, and digit runs must always
//! round-trip through `Token::Int`.

use luac_lex::{Lexer, TokenKind};
use luac_util::Interner;
use proptest::prelude::*;

proptest! {
    #[test]
    fn never_panics_on_arbitrary_text(text in "\\PC*") {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(&text);
        for _ in 0..256 {
            match lexer.advance(&mut interner) {
                Ok(tok) if tok.kind == TokenKind::Eof => break,
                Ok(_) => continue,
                Err(_) => break,
            }
        }
    }

    #[test]
    fn digit_runs_parse_as_their_value(n in 0i64..1_000_000_000) {
        let source = n.to_string();
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(&source);
        let tok = lexer.advance(&mut interner).unwrap();
        prop_assert_eq!(tok.kind.clone(), TokenKind::Int(n));
    }

    /// Arbitrary UTF-8 text (excluding `"` and `\`, which change the
    /// literal's own grammar) must survive a round trip through a string
    /// literal unchanged, multi-byte codepoints included.
    #[test]
    fn string_literal_content_round_trips(body in "[^\"\\\\]*") {
        let source = format!("\"{body}\"");
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(&source);
        let tok = lexer.advance(&mut interner).unwrap();
        prop_assert_eq!(tok.kind.clone(), TokenKind::Str(body));
    }
}
