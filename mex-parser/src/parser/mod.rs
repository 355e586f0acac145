pub mod ast;
pub mod error;

use ast::{Ast, Node, NodeId, NodeKind};
use error::{
    ExpectedCloseParen,
    ExpectedOpenParen,
    ExpectedSemicolon,
    InvalidStatementSyntax,
    UnexpectedEof,
};
use id_arena::Arena;
use mex_error::{Error, ErrorKind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A recursive-descent parser for Mex programs.
///
/// The grammar, from lowest precedence to highest:
///
/// ```text
/// program        = statement
/// statement      = ";" | expr ";"
/// expr           = additive | IDENT "=" expr
/// additive       = multiplicative { ("+" | "-") multiplicative }
/// multiplicative = primary { ("*" | "/") primary }
/// primary        = IDENT | NUMBER | "(" expr ")"
/// ```
///
/// Assignment binds loosest and is right-associative; it only applies when the parsed left-hand
/// side is a bare variable. The additive and multiplicative operators are left-associative, so an
/// unbroken chain of them parses into a left-skewed tree with depth equal to the chain length.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The arena the parsed nodes are allocated into.
    arena: Arena<Node>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source. Fails on lexical errors.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
            arena: Arena::new(),
        })
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next non-whitespace token without advancing the cursor. Returns [`None`] if
    /// only whitespace remains.
    fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..].iter().find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(UnexpectedEof))
    }

    /// Parses the token stream into a complete program, rooted at a `Prog` node.
    ///
    /// Exactly one statement is consumed; anything left over after it is an error.
    pub fn parse(mut self) -> Result<Ast, Error> {
        let stmt = self.statement()?;
        let span = self.arena[stmt].span.clone();
        let root = self.arena.alloc(Node::wrapper(NodeKind::Prog, stmt, span));

        match self.peek_token() {
            Some(token) => Err(Error::new(vec![token.span.clone()], InvalidStatementSyntax)),
            None => Ok(Ast::new(self.arena, root)),
        }
    }

    /// `statement = ";" | expr ";"`
    ///
    /// A bare `;` produces an `Empty` node; otherwise the expression is wrapped in an `Expr`
    /// node spanning up to and including the terminator.
    fn statement(&mut self) -> Result<NodeId, Error> {
        if self.peek_token().map(|token| token.kind) == Some(TokenKind::Semicolon) {
            let token = self.next_token()?;
            return Ok(self.arena.alloc(Node::empty(token.span)));
        }

        let expr = self.expr()?;
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Semicolon => {
                let span = self.arena[expr].span.start..token.span.end;
                Ok(self.arena.alloc(Node::wrapper(NodeKind::Expr, expr, span)))
            },
            Ok(token) => Err(Error::new(vec![token.span], ExpectedSemicolon)),
            Err(_) => Err(Error::new(vec![self.eof_span()], ExpectedSemicolon)),
        }
    }

    /// `expr = additive | IDENT "=" expr`
    ///
    /// Assignment is detected after the fact: if the additive expression parsed down to a bare
    /// variable and the lookahead is `=`, the variable becomes the target of a right-associative
    /// `Set`. An `=` following anything else is left for the statement terminator check to
    /// reject.
    fn expr(&mut self) -> Result<NodeId, Error> {
        let lhs = self.additive()?;

        if self.arena[lhs].kind == NodeKind::Var
            && self.peek_token().map(|token| token.kind) == Some(TokenKind::Assign)
        {
            self.next_token()?;
            let rhs = self.expr()?;
            let span = self.arena[lhs].span.start..self.arena[rhs].span.end;
            return Ok(self.arena.alloc(Node::binary(NodeKind::Set, lhs, rhs, span)));
        }

        Ok(lhs)
    }

    /// `additive = multiplicative { ("+" | "-") multiplicative }`
    fn additive(&mut self) -> Result<NodeId, Error> {
        let mut lhs = self.multiplicative()?;

        loop {
            let kind = match self.peek_token().map(|token| token.kind) {
                Some(TokenKind::Add) => NodeKind::Add,
                Some(TokenKind::Sub) => NodeKind::Sub,
                _ => break,
            };
            self.next_token()?;

            let rhs = self.multiplicative()?;
            let span = self.arena[lhs].span.start..self.arena[rhs].span.end;
            lhs = self.arena.alloc(Node::binary(kind, lhs, rhs, span));
        }

        Ok(lhs)
    }

    /// `multiplicative = primary { ("*" | "/") primary }`
    fn multiplicative(&mut self) -> Result<NodeId, Error> {
        let mut lhs = self.primary()?;

        loop {
            let kind = match self.peek_token().map(|token| token.kind) {
                Some(TokenKind::Mul) => NodeKind::Multiply,
                Some(TokenKind::Div) => NodeKind::Divide,
                _ => break,
            };
            self.next_token()?;

            let rhs = self.primary()?;
            let span = self.arena[lhs].span.start..self.arena[rhs].span.end;
            lhs = self.arena.alloc(Node::binary(kind, lhs, rhs, span));
        }

        Ok(lhs)
    }

    /// `primary = IDENT | NUMBER | "(" expr ")"`
    fn primary(&mut self) -> Result<NodeId, Error> {
        match self.peek_token().map(|token| token.kind) {
            Some(TokenKind::Name) => {
                let token = self.next_token()?;
                // the tokenizer guarantees a single ASCII letter
                let letter = token.lexeme.chars().next().unwrap().to_ascii_lowercase();
                let index = (letter as u8 - b'a') as usize;
                Ok(self.arena.alloc(Node::var(index, token.span)))
            },
            Some(TokenKind::Int) => {
                let token = self.next_token()?;
                Ok(self.arena.alloc(Node::constant(token.lexeme.parse().unwrap(), token.span)))
            },
            _ => self.paren_expr(),
        }
    }

    /// `"(" expr ")"`
    fn paren_expr(&mut self) -> Result<NodeId, Error> {
        match self.next_token()? {
            token if token.kind == TokenKind::OpenParen => {},
            token => return Err(Error::new(vec![token.span], ExpectedOpenParen)),
        }

        let expr = self.expr()?;

        match self.next_token() {
            Ok(token) if token.kind == TokenKind::CloseParen => Ok(expr),
            Ok(token) => Err(Error::new(vec![token.span], ExpectedCloseParen)),
            Err(_) => Err(Error::new(vec![self.eof_span()], ExpectedCloseParen)),
        }
    }
}
