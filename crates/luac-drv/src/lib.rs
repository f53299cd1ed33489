//! luac-drv - driver: CLI surface, preprocessing, and pipeline orchestration
//!
//! Wires the other four crates together: read the source file, strip
//! comments, parse, then evaluate. Everything beyond that single straight
//! line (flags, logging, diagnostics) is ambient tooling around the same
//! four-stage pipeline spec.md describes.

mod preprocess;

use clap::Parser as ClapParser;
use luac_eval::{Evaluator, FunctionTable, StdIo, SymbolTable};
use luac_lex::{Lexer, TokenKind};
use luac_par::Parser as LuaParser;
use luac_util::{InterpError, InterpResult, Interner, SourceMap};
use std::path::PathBuf;
use tracing::debug_span;

pub use preprocess::strip_comments;

/// Command-line configuration for a single interpreter invocation.
#[derive(ClapParser, Debug)]
#[command(name = "luac", about = "Interpreter for a small Lua-flavoured language")]
pub struct Config {
    /// Source file to interpret; must end in `.lua`.
    pub file: PathBuf,

    /// Enable verbose (debug-level) pipeline tracing on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the token stream and exit without evaluating.
    #[arg(long)]
    pub dump_tokens: bool,

    /// Print the parsed AST and exit without evaluating.
    #[arg(long)]
    pub dump_ast: bool,
}

/// Runs the full pipeline for `config`. Returns the first error encountered;
/// the caller (`main`) is responsible for formatting it and picking an exit
/// code.
pub fn run(config: &Config) -> InterpResult<()> {
    let path = &config.file;

    if path.extension().and_then(|ext| ext.to_str()) != Some("lua") {
        return Err(InterpError::BadExtension);
    }

    let raw = {
        let _span = debug_span!("read_source", path = %path.display()).entered();
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InterpError::FileNotFound(path.display().to_string())
            } else {
                InterpError::Io {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?
    };

    let source = {
        let _span = debug_span!("preprocess").entered();
        strip_comments(&raw)
    };
    let source_map = SourceMap::new(path.display().to_string(), source.clone());

    if config.dump_tokens {
        dump_tokens(&source);
        return Ok(());
    }

    let mut interner = Interner::new();
    let program = {
        let _span = debug_span!("parse").entered();
        parse(&source, &mut interner).map_err(|e| report_source_context(&source_map, e))?
    };

    if config.dump_ast {
        println!("{program:#?}");
        return Ok(());
    }

    let _span = debug_span!("evaluate").entered();
    let mut symbols = SymbolTable::new();
    let mut functions = FunctionTable::new();
    let mut io = StdIo::new();
    let mut evaluator = Evaluator::new(&interner, &mut io);
    evaluator
        .eval_program(&program, &mut symbols, &mut functions)
        .map_err(|e| report_source_context(&source_map, e))
}

fn parse(source: &str, interner: &mut Interner) -> InterpResult<luac_par::Block> {
    let mut parser = LuaParser::new(source, interner)?;
    parser.parse_program()
}

/// Prints the offending source line to stderr, then hands the error straight
/// back so the caller can still format and propagate it as usual.
fn report_source_context(source_map: &SourceMap, err: InterpError) -> InterpError {
    if let Some(span) = err.span() {
        if let Some(line_text) = source_map.line_at(span.line) {
            eprintln!("  --> {}:{}", source_map.name(), span.line);
            eprintln!("   | {line_text}");
        }
    }
    err
}

fn dump_tokens(source: &str) {
    let mut interner = Interner::new();
    let mut lexer = Lexer::new(source);
    loop {
        match lexer.advance(&mut interner) {
            Ok(tok) if tok.kind == TokenKind::Eof => {
                println!("{:?}", tok.kind);
                break;
            }
            Ok(tok) => println!("{:?}", tok.kind),
            Err(e) => {
                eprintln!("error: {e}");
                break;
            }
        }
    }
}
