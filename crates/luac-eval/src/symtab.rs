//! Symbol table and function table.
//!
//! Both are closed over three operations — `has`, `get`, `set` — exactly as
//! laid out for the runtime environments. `IndexMap` is used instead of a
//! plain hash map so a `--dump-ast`-style debug tool can walk a scope's
//! bindings in declaration order; lookups stay `O(1)` average case.

use crate::value::Value;
use indexmap::IndexMap;
use luac_par::Block;
use luac_util::{InterpError, InterpResult, Interner, Span, Symbol};

#[derive(Debug, Default)]
pub struct SymbolTable {
    bindings: IndexMap<Symbol, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: Symbol) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn get(&self, name: Symbol, span: Span, interner: &Interner) -> InterpResult<&Value> {
        self.bindings.get(&name).ok_or_else(|| InterpError::NotDeclared {
            name: interner.resolve(name).to_string(),
            span,
        })
    }

    pub fn set(&mut self, name: Symbol, value: Value) {
        self.bindings.insert(name, value);
    }
}

#[derive(Debug, Clone)]
pub struct FuncDef {
    pub params: Vec<Symbol>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: IndexMap<Symbol, FuncDef>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: Symbol) -> bool {
        self.functions.contains_key(&name)
    }

    pub fn get(&self, name: Symbol, span: Span, interner: &Interner) -> InterpResult<&FuncDef> {
        self.functions.get(&name).ok_or_else(|| InterpError::UnknownFunction {
            name: interner.resolve(name).to_string(),
            span,
        })
    }

    pub fn declare(&mut self, name: Symbol, def: FuncDef, interner: &Interner) -> InterpResult<()> {
        if self.functions.contains_key(&name) {
            return Err(InterpError::FunctionRedeclared {
                name: interner.resolve(name).to_string(),
                span: def.span,
            });
        }
        self.functions.insert(name, def);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_lookup_fails() {
        let table = SymbolTable::new();
        let mut interner = Interner::new();
        let x = interner.intern("x");
        assert!(table.get(x, Span::DUMMY, &interner).is_err());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut table = SymbolTable::new();
        let mut interner = Interner::new();
        let x = interner.intern("x");
        table.set(x, Value::Int(5));
        assert_eq!(table.get(x, Span::DUMMY, &interner).unwrap(), &Value::Int(5));
    }

    #[test]
    fn redeclaring_a_function_is_an_error() {
        let mut functions = FunctionTable::new();
        let mut interner = Interner::new();
        let f = interner.intern("f");
        let def = FuncDef {
            params: vec![],
            body: vec![],
            span: Span::DUMMY,
        };
        functions.declare(f, def.clone(), &interner).unwrap();
        assert!(functions.declare(f, def, &interner).is_err());
    }
}
