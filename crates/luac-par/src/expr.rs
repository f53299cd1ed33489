//! Expression grammar: `BoolExpr` down to `Factor`, six precedence levels.
//!
//! ```text
//! BoolExpr := BoolTerm { 'or' BoolTerm }
//! BoolTerm := RelExpr  { 'and' RelExpr }
//! RelExpr  := AddExpr  [ ('>'|'<'|'==') AddExpr ]      (non-associative)
//! AddExpr  := Term     { ('+'|'-'|'..') Term }
//! Term     := Factor   { ('*'|'/') Factor }
//! Factor   := INT | STRING | IDENT [ '(' ArgList ')' ]
//!           | ('+'|'-'|'not') Factor | '(' BoolExpr ')' | 'read' '(' ')'
//! ```

use crate::ast::{BinOpKind, Expr, UnOpKind};
use crate::Parser;
use luac_lex::TokenKind;
use luac_util::{InterpError, InterpResult};

impl<'a> Parser<'a> {
    pub(crate) fn parse_bool_expression(&mut self) -> InterpResult<Expr> {
        let mut result = self.parse_bool_term()?;
        while self.current.kind == TokenKind::Or {
            let span = self.span();
            self.bump()?;
            let right = self.parse_bool_term()?;
            result = Expr::BinOp {
                op: BinOpKind::Or,
                left: Box::new(result),
                right: Box::new(right),
                span,
            };
        }
        Ok(result)
    }

    fn parse_bool_term(&mut self) -> InterpResult<Expr> {
        let mut result = self.parse_rel_expression()?;
        while self.current.kind == TokenKind::And {
            let span = self.span();
            self.bump()?;
            let right = self.parse_rel_expression()?;
            result = Expr::BinOp {
                op: BinOpKind::And,
                left: Box::new(result),
                right: Box::new(right),
                span,
            };
        }
        Ok(result)
    }

    /// Exactly zero or one relational operator: `a < b < c` is rejected by
    /// the grammar (the caller sees a leftover `<` and fails elsewhere)
    /// rather than silently chaining.
    fn parse_rel_expression(&mut self) -> InterpResult<Expr> {
        let result = self.parse_add_expression()?;
        let op = match self.current.kind {
            TokenKind::Gt => BinOpKind::Gt,
            TokenKind::Lt => BinOpKind::Lt,
            TokenKind::Eq => BinOpKind::Eq,
            _ => return Ok(result),
        };
        let span = self.span();
        self.bump()?;
        let right = self.parse_add_expression()?;
        Ok(Expr::BinOp {
            op,
            left: Box::new(result),
            right: Box::new(right),
            span,
        })
    }

    fn parse_add_expression(&mut self) -> InterpResult<Expr> {
        let mut result = self.parse_term()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinOpKind::Add,
                TokenKind::Minus => BinOpKind::Sub,
                TokenKind::Concat => BinOpKind::Concat,
                _ => break,
            };
            let span = self.span();
            self.bump()?;
            let right = self.parse_term()?;
            result = Expr::BinOp {
                op,
                left: Box::new(result),
                right: Box::new(right),
                span,
            };
        }
        Ok(result)
    }

    fn parse_term(&mut self) -> InterpResult<Expr> {
        let mut result = self.parse_factor()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinOpKind::Mul,
                TokenKind::Slash => BinOpKind::Div,
                _ => break,
            };
            let span = self.span();
            self.bump()?;
            let right = self.parse_factor()?;
            result = Expr::BinOp {
                op,
                left: Box::new(result),
                right: Box::new(right),
                span,
            };
        }
        Ok(result)
    }

    fn parse_factor(&mut self) -> InterpResult<Expr> {
        match self.current.kind.clone() {
            TokenKind::Int(value) => {
                self.bump()?;
                Ok(Expr::Int(value))
            }
            TokenKind::Str(value) => {
                self.bump()?;
                Ok(Expr::Str(value))
            }
            TokenKind::Ident(sym) => {
                let span = self.span();
                self.bump()?;
                if self.current.kind == TokenKind::LParen {
                    let args = self.parse_call_args()?;
                    Ok(Expr::Call { name: sym, args, span })
                } else {
                    Ok(Expr::Ident(sym, span))
                }
            }
            TokenKind::Plus => {
                let span = self.span();
                self.bump()?;
                let operand = self.parse_factor()?;
                Ok(Expr::UnOp {
                    op: UnOpKind::Plus,
                    operand: Box::new(operand),
                    span,
                })
            }
            TokenKind::Minus => {
                let span = self.span();
                self.bump()?;
                let operand = self.parse_factor()?;
                Ok(Expr::UnOp {
                    op: UnOpKind::Neg,
                    operand: Box::new(operand),
                    span,
                })
            }
            TokenKind::Not => {
                let span = self.span();
                self.bump()?;
                let operand = self.parse_factor()?;
                Ok(Expr::UnOp {
                    op: UnOpKind::Not,
                    operand: Box::new(operand),
                    span,
                })
            }
            TokenKind::LParen => {
                self.bump()?;
                let result = self.parse_bool_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(result)
            }
            TokenKind::Read => {
                let span = self.span();
                self.bump()?;
                self.expect(TokenKind::LParen)?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::Read(span))
            }
            other => Err(InterpError::UnexpectedToken {
                expected: "a number, string, identifier, or '('".into(),
                found: other.describe(),
                span: self.span(),
            }),
        }
    }

    /// `'(' [ BoolExpr { ',' BoolExpr } ] ')'`, shared by call expressions
    /// and call statements.
    pub(crate) fn parse_call_args(&mut self) -> InterpResult<Vec<Expr>> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.current.kind != TokenKind::RParen {
            args.push(self.parse_bool_expression()?);
            while self.current.kind == TokenKind::Comma {
                self.bump()?;
                args.push(self.parse_bool_expression()?);
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }
}
