//! Recursive-descent parser building the Minisharp AST from tokens.

use minisharp_syntax::ast::*;
use minisharp_syntax::error::{error_at, Result};
use minisharp_syntax::token::{Token, TokenKind};
use tracing::debug;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a token stream. A trailing `Eof` is added if the
    /// stream lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let (line, col) = tokens.last().map(|t| (t.line, t.col)).unwrap_or((1, 1));
            tokens.push(Token { kind: TokenKind::Eof, line, col });
        }
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn unexpected<T>(&self, expected: &str) -> Result<T> {
        let tok = self.peek();
        error_at(
            tok.line,
            tok.col,
            format!("Expected {}, found {}", expected, tok.kind.describe()),
        )
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            self.unexpected(&kind.describe())
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => self.unexpected("identifier"),
        }
    }

    /// `"(" [param ("," param)*] ")" block`, followed by end of input.
    pub fn parse_program(&mut self) -> Result<Program> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let ty = self.parse_type()?;
                let name = self.expect_ident()?;
                params.push(Param { name, ty });
                if self.check(&TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        self.expect(TokenKind::Eof)?;
        debug!(params = params.len(), statements = body.len(), "parsed program");
        Ok(Program::new(params, body))
    }

    fn parse_scalar_type(&mut self) -> Result<Type> {
        let ty = match self.peek().kind {
            TokenKind::Int => Type::Int,
            TokenKind::Double => Type::Double,
            TokenKind::Boolean => Type::Bool,
            _ => return self.unexpected("type"),
        };
        self.advance();
        Ok(ty)
    }

    /// Consumes `[ ]` if present.
    fn parse_array_suffix(&mut self) -> Result<bool> {
        if self.check(&TokenKind::LBracket) {
            self.advance();
            self.expect(TokenKind::RBracket)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// A full type: a scalar, or `int[]`.
    fn parse_type(&mut self) -> Result<Type> {
        let at = self.peek().clone();
        let scalar = self.parse_scalar_type()?;
        if !self.parse_array_suffix()? {
            return Ok(scalar);
        }
        match scalar {
            Type::Int => Ok(Type::IntSequence),
            other => error_at(
                at.line,
                at.col,
                format!("Arrays of {} are not supported, only int[]", other),
            ),
        }
    }

    fn parse_block(&mut self) -> Result<Block> {
        self.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.check(&TokenKind::Eof) {
                return self.unexpected("'}'");
            }
            stmts.push(self.parse_stmt()?);
        }
        self.advance();
        Ok(stmts)
    }

    fn parse_stmt(&mut self) -> Result<Stmt> {
        match self.peek().kind {
            TokenKind::Int | TokenKind::Double | TokenKind::Boolean => {
                let decl = self.parse_decl()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Decl(decl))
            }
            TokenKind::Ident(_) => {
                let assign = self.parse_assign()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Assign(assign))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::For => self.parse_for(),
            TokenKind::Return => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Return(expr))
            }
            _ => self.unexpected("statement"),
        }
    }

    /// `T[] id = { .. }` keeps `T` as the element type so the checker can
    /// reject non-int arrays; `int[] id = expr` is a scalar declaration of
    /// type `int[]`.
    fn parse_decl(&mut self) -> Result<Decl> {
        let at = self.peek().clone();
        let scalar = self.parse_scalar_type()?;
        let is_array = self.parse_array_suffix()?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Equal)?;

        if is_array && self.check(&TokenKind::LBrace) {
            let values = self.parse_literals()?;
            return Ok(Decl::Array { elem: scalar, name, values });
        }
        let ty = match (is_array, scalar) {
            (false, ty) => ty,
            (true, Type::Int) => Type::IntSequence,
            (true, other) => {
                return error_at(
                    at.line,
                    at.col,
                    format!("Arrays of {} are not supported, only int[]", other),
                );
            }
        };
        let init = self.parse_expr()?;
        Ok(Decl::Scalar { ty, name, init })
    }

    fn parse_assign(&mut self) -> Result<Assign> {
        let name = self.expect_ident()?;
        self.expect(TokenKind::Equal)?;
        if self.check(&TokenKind::LBrace) {
            let values = self.parse_literals()?;
            Ok(Assign::Array { name, values })
        } else {
            let expr = self.parse_expr()?;
            Ok(Assign::Scalar { name, expr })
        }
    }

    /// `{ 1, 2, 3 }`; the empty literal `{ }` is allowed.
    fn parse_literals(&mut self) -> Result<Vec<i64>> {
        self.expect(TokenKind::LBrace)?;
        let mut values = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            loop {
                match self.peek().kind {
                    TokenKind::Number(n) => {
                        self.advance();
                        values.push(n);
                    }
                    _ => return self.unexpected("integer constant"),
                }
                if self.check(&TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(values)
    }

    fn parse_if(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let then_body = self.parse_block()?;
        let else_body = if self.check(&TokenKind::Else) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Stmt::If { cond, then_body, else_body })
    }

    fn parse_for(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::LParen)?;
        let init = self.parse_decl()?;
        self.expect(TokenKind::Semicolon)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        let name = self.expect_ident()?;
        let op = match self.peek().kind {
            TokenKind::PlusPlus => StepOp::Increment,
            TokenKind::MinusMinus => StepOp::Decrement,
            _ => return self.unexpected("'++' or '--'"),
        };
        self.advance();
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Stmt::For { init, cond, step: Step { name, op }, body })
    }

    /// Comparisons bind loosest and do not chain.
    pub fn parse_expr(&mut self) -> Result<Expr> {
        let left = self.parse_additive()?;
        let ctor: fn(Box<Expr>, Box<Expr>) -> Expr = match self.peek().kind {
            TokenKind::Less => Expr::Lt,
            TokenKind::Greater => Expr::Gt,
            TokenKind::EqEq => Expr::Eq,
            _ => return Ok(left),
        };
        self.advance();
        let right = self.parse_additive()?;
        Ok(ctor(Box::new(left), Box::new(right)))
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        let mut left = self.parse_term()?;
        loop {
            let ctor: fn(Box<Expr>, Box<Expr>) -> Expr = match self.peek().kind {
                TokenKind::Plus => Expr::Add,
                TokenKind::Minus => Expr::Sub,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_term()?;
            left = ctor(Box::new(left), Box::new(right));
        }
    }

    fn parse_term(&mut self) -> Result<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            let ctor: fn(Box<Expr>, Box<Expr>) -> Expr = match self.peek().kind {
                TokenKind::Star => Expr::Mul,
                TokenKind::Slash => Expr::Div,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_factor()?;
            left = ctor(Box::new(left), Box::new(right));
        }
    }

    fn parse_factor(&mut self) -> Result<Expr> {
        match self.peek().kind.clone() {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::Const(n))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            TokenKind::Ident(name) => {
                self.advance();
                match self.peek().kind {
                    TokenKind::LBracket => {
                        self.advance();
                        let index = self.parse_expr()?;
                        self.expect(TokenKind::RBracket)?;
                        Ok(Expr::Index(name, Box::new(index)))
                    }
                    TokenKind::Dot => {
                        self.advance();
                        if matches!(&self.peek().kind, TokenKind::Ident(field) if field == "length") {
                            self.advance();
                            Ok(Expr::Length(name))
                        } else {
                            self.unexpected("'length'")
                        }
                    }
                    _ => Ok(Expr::Var(name)),
                }
            }
            _ => self.unexpected("expression"),
        }
    }
}
