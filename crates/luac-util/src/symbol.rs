//! String interning for identifiers.
//!
//! Identifiers (variable and function names) are interned into a compact
//! `Symbol` so the evaluator's symbol/function tables can key on a `Copy`
//! 4-byte handle instead of cloning `String`s on every lookup. Unlike a
//! compiler meant to live across a whole process and many threads, a single
//! interpreter run only ever touches one file, so the interner here is an
//! owned, non-global table rather than a lazily-initialized concurrent
//! singleton — there is nothing to share across threads because there is
//! only one.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<String>,
    lookup: FxHashMap<String, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&idx) = self.lookup.get(text) {
            return Symbol(idx);
        }
        let idx = self.strings.len() as u32;
        self.strings.push(text.to_string());
        self.lookup.insert(text.to_string(), idx);
        Symbol(idx)
    }

    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.0 as usize]
    }
}
