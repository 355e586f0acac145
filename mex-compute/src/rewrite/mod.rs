//! Semantics-preserving tree rewrites.
//!
//! Each pass here transforms the shape or size of a parsed tree without changing the value it
//! evaluates to under any assignment of its variables:
//!
//! - [`rebalance`](rebalance::rebalance) shortens left-skewed operator chains by associative
//!   regrouping, reducing the depth of the dependency chain an evaluator has to walk.
//! - [`factor`](factor::factor) extracts the greatest common divisor of constant terms,
//!   rewriting `a ± b` into `((a/g) ± (b/g)) * g`.
//! - [`fold`](fold::fold) collapses constant operand pairs bottom-up using parent links,
//!   recording each fold for inspection.
//!
//! The passes are independent treatments of the same tree, not a pipeline; run them on deep
//! copies to compare their effects on one program.

pub mod factor;
pub mod fold;
pub mod rebalance;

pub use factor::{factor, gcd, FactorStep};
pub use fold::{fold, FoldStep};
pub use rebalance::{height, rebalance};
