//! Statement grammar.
//!
//! ```text
//! Statement := LocalDecl | Assignment | Call | Print
//!            | If | While | FuncDec | Return | ε(NEWLINE)
//! ```
//!
//! An `IDENT` at statement start is disambiguated with one token of
//! lookahead: `(` means a call statement, `=` means an assignment, anything
//! else is a syntax error.

use crate::ast::Stmt;
use crate::Parser;
use luac_lex::TokenKind;
use luac_util::{InterpError, InterpResult};

impl<'a> Parser<'a> {
    /// Returns `None` for a blank line (`NoOp`), which callers drop from
    /// the surrounding block.
    pub(crate) fn parse_statement(&mut self) -> InterpResult<Option<Stmt>> {
        match self.current.kind.clone() {
            TokenKind::Newline => {
                self.bump()?;
                Ok(None)
            }
            TokenKind::Local => self.parse_local_decl().map(Some),
            TokenKind::Ident(_) => self.parse_assignment_or_call().map(Some),
            TokenKind::Print => self.parse_print().map(Some),
            TokenKind::If => self.parse_if().map(Some),
            TokenKind::While => self.parse_while().map(Some),
            TokenKind::Function => self.parse_func_dec().map(Some),
            TokenKind::Return => self.parse_return().map(Some),
            other => Err(InterpError::UnexpectedToken {
                expected: "a statement".into(),
                found: other.describe(),
                span: self.span(),
            }),
        }
    }

    fn parse_local_decl(&mut self) -> InterpResult<Stmt> {
        let span = self.span();
        self.bump()?; // 'local'
        let name = self.expect_ident()?;
        let init = if self.current.kind == TokenKind::Assign {
            self.bump()?;
            Some(self.parse_bool_expression()?)
        } else {
            None
        };
        self.expect_line_end()?;
        Ok(Stmt::VarDec { name, init, span })
    }

    fn parse_assignment_or_call(&mut self) -> InterpResult<Stmt> {
        let span = self.span();
        let name = self.expect_ident()?;
        match self.current.kind {
            TokenKind::Assign => {
                self.bump()?;
                let expr = self.parse_bool_expression()?;
                self.expect_line_end()?;
                Ok(Stmt::Assign { name, expr, span })
            }
            TokenKind::LParen => {
                let args = self.parse_call_args()?;
                self.expect_line_end()?;
                Ok(Stmt::Call { name, args, span })
            }
            _ => Err(InterpError::UnexpectedToken {
                expected: "'=' or '('".into(),
                found: self.current.kind.describe(),
                span: self.span(),
            }),
        }
    }

    fn parse_print(&mut self) -> InterpResult<Stmt> {
        self.bump()?; // 'print'
        self.expect(TokenKind::LParen)?;
        let expr = self.parse_bool_expression()?;
        self.expect(TokenKind::RParen)?;
        self.expect_line_end()?;
        Ok(Stmt::Print(expr))
    }

    fn parse_if(&mut self) -> InterpResult<Stmt> {
        self.bump()?; // 'if'
        let cond = self.parse_bool_expression()?;
        self.expect(TokenKind::Then)?;
        self.expect(TokenKind::Newline)?;
        let then_branch = self.parse_block(&[TokenKind::Else, TokenKind::End])?;
        let else_branch = if self.current.kind == TokenKind::Else {
            self.bump()?;
            self.expect(TokenKind::Newline)?;
            self.parse_block(&[TokenKind::End])?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::End)?;
        self.expect_line_end()?;
        Ok(Stmt::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> InterpResult<Stmt> {
        self.bump()?; // 'while'
        let cond = self.parse_bool_expression()?;
        self.expect(TokenKind::Do)?;
        self.expect(TokenKind::Newline)?;
        let body = self.parse_block(&[TokenKind::End])?;
        self.expect(TokenKind::End)?;
        self.expect_line_end()?;
        Ok(Stmt::While { cond, body })
    }

    fn parse_func_dec(&mut self) -> InterpResult<Stmt> {
        let span = self.span();
        self.bump()?; // 'function'
        let name = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if self.current.kind != TokenKind::RParen {
            params.push(self.expect_ident()?);
            while self.current.kind == TokenKind::Comma {
                self.bump()?;
                params.push(self.expect_ident()?);
            }
        }
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Newline)?;
        let body = self.parse_block(&[TokenKind::End])?;
        self.expect(TokenKind::End)?;
        self.expect_line_end()?;
        Ok(Stmt::FuncDec {
            name,
            params,
            body,
            span,
        })
    }

    fn parse_return(&mut self) -> InterpResult<Stmt> {
        self.bump()?; // 'return'
        let expr = self.parse_bool_expression()?;
        self.expect_line_end()?;
        Ok(Stmt::Return(expr))
    }
}
