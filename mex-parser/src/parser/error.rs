//! Syntax errors. Every parser error is fatal: no partial tree is returned.

use mex_attrs::ErrorKind;
use mex_error::ErrorKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = ["the statement is incomplete here"],
)]
pub struct UnexpectedEof;

/// Expected to see a parenthesized expression here.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected `(`",
    labels = ["I expected a number, a variable, or a parenthesized expression here"],
)]
pub struct ExpectedOpenParen;

/// A parenthesized expression was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected `)`",
    labels = ["the parenthesized expression should be closed here"],
)]
pub struct ExpectedCloseParen;

/// A statement was not terminated.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected `;`",
    labels = ["the statement should end here"],
    help = "every statement is terminated by a semicolon"
)]
pub struct ExpectedSemicolon;

/// There were tokens left over after the statement was parsed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid statement syntax",
    labels = ["I could not understand the remaining input here"],
    help = "a program is a single statement"
)]
pub struct InvalidStatementSyntax;
