//! Numerical evaluation of Mex programs.
//!
//! Evaluation walks the parsed tree directly. Variables resolve through a [`Ctxt`] holding the
//! 26 single-letter slots; assignment writes into the context and yields the assigned value.
//! Division is real-valued, so evaluating an all-integer program can still produce a
//! non-integral result.

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod value;

pub use ctxt::Ctxt;
pub use eval::{eval, evaluate};
pub use value::Value;
