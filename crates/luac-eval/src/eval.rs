//! Depth-first AST evaluation.
//!
//! `return` is threaded out of nested `if`/`while` bodies as an explicit
//! [`Flow`] value rather than detected by inspecting child node types — the
//! fragility the language's own design notes call out. Every statement
//! evaluator returns a `Flow`; the block/if/while evaluators stop walking
//! and propagate as soon as they see `Flow::Return`.

use crate::io::Io;
use crate::symtab::{FuncDef, FunctionTable, SymbolTable};
use crate::value::Value;
use luac_par::{BinOpKind, Block, Expr, Stmt, UnOpKind};
use luac_util::{InterpError, InterpResult, Interner, Span};

pub enum Flow {
    Normal,
    Return(Value),
}

pub struct Evaluator<'a> {
    interner: &'a Interner,
    io: &'a mut dyn Io,
}

impl<'a> Evaluator<'a> {
    pub fn new(interner: &'a Interner, io: &'a mut dyn Io) -> Self {
        Self { interner, io }
    }

    pub fn eval_program(
        &mut self,
        program: &Block,
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
    ) -> InterpResult<()> {
        self.eval_block(program, symbols, functions)?;
        Ok(())
    }

    fn eval_block(
        &mut self,
        block: &Block,
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
    ) -> InterpResult<Flow> {
        for stmt in block {
            match self.eval_stmt(stmt, symbols, functions)? {
                Flow::Normal => continue,
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Normal)
    }

    fn eval_stmt(
        &mut self,
        stmt: &Stmt,
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
    ) -> InterpResult<Flow> {
        match stmt {
            Stmt::VarDec { name, init, span } => {
                if symbols.has(*name) {
                    return Err(InterpError::AlreadyDeclared {
                        name: self.interner.resolve(*name).to_string(),
                        span: *span,
                    });
                }
                let value = match init {
                    Some(expr) => self.eval_expr(expr, symbols, functions)?,
                    None => Value::Null,
                };
                symbols.set(*name, value);
                Ok(Flow::Normal)
            }
            Stmt::Assign { name, expr, span } => {
                if !symbols.has(*name) {
                    return Err(InterpError::NotDeclared {
                        name: self.interner.resolve(*name).to_string(),
                        span: *span,
                    });
                }
                let value = self.eval_expr(expr, symbols, functions)?;
                symbols.set(*name, value);
                Ok(Flow::Normal)
            }
            Stmt::Call { name, args, span } => {
                self.call_function(*name, args, symbols, functions, *span)?;
                Ok(Flow::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr, symbols, functions)?;
                self.io.print_line(&value.to_string());
                Ok(Flow::Normal)
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond, symbols, functions)? {
                    self.eval_block(then_branch, symbols, functions)
                } else {
                    self.eval_block(else_branch, symbols, functions)
                }
            }
            Stmt::While { cond, body } => {
                while self.eval_condition(cond, symbols, functions)? {
                    match self.eval_block(body, symbols, functions)? {
                        Flow::Normal => continue,
                        ret @ Flow::Return(_) => return Ok(ret),
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::FuncDec {
                name,
                params,
                body,
                span,
            } => {
                functions.declare(
                    *name,
                    FuncDef {
                        params: params.clone(),
                        body: body.clone(),
                        span: *span,
                    },
                    self.interner,
                )?;
                Ok(Flow::Normal)
            }
            Stmt::Return(expr) => {
                let value = self.eval_expr(expr, symbols, functions)?;
                Ok(Flow::Return(value))
            }
        }
    }

    fn eval_condition(
        &mut self,
        cond: &Expr,
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
    ) -> InterpResult<bool> {
        let value = self.eval_expr(cond, symbols, functions)?;
        match value {
            Value::Int(n) => Ok(n != 0),
            other => Err(InterpError::TypeError {
                message: format!(
                    "condition must be an int, got {}",
                    other.type_name()
                ),
                span: cond.span(),
            }),
        }
    }

    fn eval_expr(
        &mut self,
        expr: &Expr,
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
    ) -> InterpResult<Value> {
        match expr {
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Ident(name, span) => symbols.get(*name, *span, self.interner).map(Value::clone),
            Expr::UnOp { op, operand, span } => self.eval_unop(*op, operand, symbols, functions, *span),
            Expr::BinOp { op, left, right, span } => {
                self.eval_binop(*op, left, right, symbols, functions, *span)
            }
            Expr::Call { name, args, span } => self.call_function(*name, args, symbols, functions, *span),
            Expr::Read(span) => self.eval_read(*span),
        }
    }

    fn eval_unop(
        &mut self,
        op: UnOpKind,
        operand: &Expr,
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
        span: Span,
    ) -> InterpResult<Value> {
        let value = self.eval_expr(operand, symbols, functions)?;
        let n = match value {
            Value::Int(n) => n,
            other => {
                return Err(InterpError::TypeError {
                    message: format!("unary operator requires an int, got {}", other.type_name()),
                    span,
                })
            }
        };
        Ok(match op {
            UnOpKind::Plus => Value::Int(n),
            UnOpKind::Neg => Value::Int(-n),
            UnOpKind::Not => Value::Int(if n == 0 { 1 } else { 0 }),
        })
    }

    fn eval_binop(
        &mut self,
        op: BinOpKind,
        left: &Expr,
        right: &Expr,
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
        span: Span,
    ) -> InterpResult<Value> {
        // Non-short-circuit: both operands are always evaluated, in order,
        // including their side effects.
        let left_val = self.eval_expr(left, symbols, functions)?;
        let right_val = self.eval_expr(right, symbols, functions)?;

        if op == BinOpKind::Concat {
            return Ok(Value::Str(format!("{left_val}{right_val}")));
        }

        match op {
            BinOpKind::Add | BinOpKind::Sub | BinOpKind::Mul | BinOpKind::Div => {
                let (l, r) = expect_ints(&left_val, &right_val, span)?;
                Ok(Value::Int(match op {
                    BinOpKind::Add => l + r,
                    BinOpKind::Sub => l - r,
                    BinOpKind::Mul => l * r,
                    BinOpKind::Div => floor_div(l, r, span)?,
                    _ => unreachable!(),
                }))
            }
            BinOpKind::And | BinOpKind::Or => {
                let (l, r) = expect_ints(&left_val, &right_val, span)?;
                Ok(Value::Int(match op {
                    BinOpKind::And => if l == 0 { l } else { r },
                    BinOpKind::Or => if l != 0 { l } else { r },
                    _ => unreachable!(),
                }))
            }
            BinOpKind::Eq | BinOpKind::Gt | BinOpKind::Lt => {
                if left_val.type_name() != right_val.type_name() {
                    return Err(InterpError::TypeError {
                        message: format!(
                            "comparison requires matching types, got {} and {}",
                            left_val.type_name(),
                            right_val.type_name()
                        ),
                        span,
                    });
                }
                let result = match op {
                    BinOpKind::Eq => values_equal(&left_val, &right_val),
                    BinOpKind::Gt => values_ordering(&left_val, &right_val)?.is_gt(),
                    BinOpKind::Lt => values_ordering(&left_val, &right_val)?.is_lt(),
                    _ => unreachable!(),
                };
                Ok(Value::Int(result as i64))
            }
            BinOpKind::Concat => unreachable!("handled above"),
        }
    }

    fn call_function(
        &mut self,
        name: luac_util::Symbol,
        args: &[Expr],
        symbols: &mut SymbolTable,
        functions: &mut FunctionTable,
        span: Span,
    ) -> InterpResult<Value> {
        let def = functions.get(name, span, self.interner)?.clone();
        if args.len() != def.params.len() {
            return Err(InterpError::ArityMismatch {
                name: self.interner.resolve(name).to_string(),
                expected: def.params.len(),
                found: args.len(),
                span,
            });
        }

        // Arguments are evaluated in the caller's scope before the callee's
        // fresh symbol table is allocated — a call sees only its own
        // parameters, never the caller's locals.
        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.eval_expr(arg, symbols, functions)?);
        }

        let mut call_scope = SymbolTable::new();
        for (param, value) in def.params.iter().zip(arg_values) {
            call_scope.set(*param, value);
        }

        match self.eval_block(&def.body, &mut call_scope, functions)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }

    fn eval_read(&mut self, span: Span) -> InterpResult<Value> {
        let line = self
            .io
            .read_line()
            .map_err(|_| InterpError::BadRead { span })?
            .ok_or(InterpError::BadRead { span })?;
        line.trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| InterpError::BadRead { span })
    }
}

fn expect_ints(left: &Value, right: &Value, span: Span) -> InterpResult<(i64, i64)> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Ok((*l, *r)),
        (l, r) => Err(InterpError::TypeError {
            message: format!(
                "arithmetic requires int operands, got {} and {}",
                l.type_name(),
                r.type_name()
            ),
            span,
        }),
    }
}

fn floor_div(a: i64, b: i64, span: Span) -> InterpResult<i64> {
    if b == 0 {
        return Err(InterpError::DivisionByZero { span });
    }
    let q = a / b;
    let r = a % b;
    Ok(if r != 0 && (r < 0) != (b < 0) { q - 1 } else { q })
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => l == r,
        (Value::Str(l), Value::Str(r)) => l == r,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

fn values_ordering(left: &Value, right: &Value) -> InterpResult<std::cmp::Ordering> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Ok(l.cmp(r)),
        (Value::Str(l), Value::Str(r)) => Ok(l.cmp(r)),
        _ => unreachable!("caller already checked matching types"),
    }
}
