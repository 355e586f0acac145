pub mod error;
pub mod token;

use error::{UnexpectedSymbol, UnknownIdentifier};
use logos::{Lexer, Logos};
use mex_error::Error;
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack while parsing.
///
/// Lexical errors are fatal: a letter run longer than one character or a character outside the
/// language fails the whole tokenization, and no token stream is produced.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(TokenKind::Word) => {
                return Err(Error::new(
                    vec![lexer.span()],
                    UnknownIdentifier { name: lexer.slice().to_string() },
                ));
            },
            Ok(TokenKind::Symbol) | Err(()) => {
                return Err(Error::new(
                    vec![lexer.span()],
                    UnexpectedSymbol { symbol: lexer.slice().to_string() },
                ));
            },
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
        }
    }

    Ok(tokens.into_boxed_slice())
}
