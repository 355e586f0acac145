//! Evaluation and rewriting of Mex programs.
//!
//! The [`numerical`] module computes the value of a parsed tree against a store of variables.
//! The [`rewrite`] module contains three semantics-preserving tree transformations: associative
//! height reduction, common-factor extraction, and bottom-up constant folding. Every pass leaves
//! the evaluated value of the program unchanged for every assignment of its variables; what
//! changes is the shape or size of the tree.

pub mod numerical;
pub mod rewrite;
pub mod step_collector;

pub use step_collector::StepCollector;
