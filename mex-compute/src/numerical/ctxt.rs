/// The number of addressable variables, `a` through `z`.
pub const NUM_VARS: usize = 26;

/// A context to evaluate programs in, holding the values of the 26 single-letter variables.
///
/// A fresh context has every variable unset; reading an unset variable is an evaluation error.
/// Contexts are cheap to clone and are kept across statements by the REPL, so an assignment in
/// one program is visible to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ctxt {
    vars: [Option<f64>; NUM_VARS],
}

impl Ctxt {
    /// Creates a context with no variables set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the variable with the given index, if it has been set.
    pub fn get_var(&self, index: usize) -> Option<f64> {
        self.vars[index]
    }

    /// Sets the value of the variable with the given index.
    pub fn set_var(&mut self, index: usize, value: f64) {
        self.vars[index] = Some(value);
    }
}
