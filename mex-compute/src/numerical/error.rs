//! Errors that can occur while evaluating a tree.
//!
//! These are reported as values rather than aborting the process: rewrite passes run over trees
//! that may contain non-constant operands (which are simply never evaluated) but can still reach
//! a genuine zero divisor among constants.

use ariadne::Fmt;
use mex_attrs::ErrorKind;
use mex_error::{ErrorKind, EXPR};

/// Attempted to divide by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// The variable has not been assigned a value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = format!("to define it, type: {} = {}", self.name.fg(EXPR), "<expression>".fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The letter naming the variable.
    pub name: char,
}
