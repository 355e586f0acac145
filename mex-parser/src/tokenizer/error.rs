//! Lexical errors. These are the only errors that can occur before parsing begins, and they are
//! fatal: no token stream is produced.

use mex_attrs::ErrorKind;
use mex_error::ErrorKind;

/// An identifier was more than one letter long.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown identifier: `{}`", self.name),
    labels = ["identifiers are single letters"],
    help = "variables are named `a` through `z`"
)]
pub struct UnknownIdentifier {
    /// The offending run of letters.
    pub name: String,
}

/// A character that is not part of the language was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected symbol: `{}`", self.symbol),
    labels = ["this character is not part of the language"],
)]
pub struct UnexpectedSymbol {
    /// The offending character.
    pub symbol: String,
}
