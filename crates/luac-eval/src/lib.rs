//! luac-eval - tree-walking evaluator, symbol table, and function table
//!
//! Consumes the AST produced by [`luac_par`] and walks it depth-first,
//! consulting a per-call [`SymbolTable`] and a process-wide
//! [`FunctionTable`], emitting `print`/`read` through an injectable [`Io`].

mod eval;
mod io;
mod symtab;
mod value;

pub use eval::Evaluator;
pub use io::{Io, MemoryIo, StdIo};
pub use symtab::{FuncDef, FunctionTable, SymbolTable};
pub use value::Value;
