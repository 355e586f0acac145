use std::fmt;

/// The result of evaluating a statement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// A numeric result.
    Num(f64),

    /// The result of an empty statement. Callers typically print nothing for it.
    Unit,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(num) => write!(f, "{num}"),
            Value::Unit => Ok(()),
        }
    }
}
