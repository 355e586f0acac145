//! A tokenizer and parser for Mex, a miniature expression language.
//!
//! A Mex program is a single statement: either an empty statement (a bare `;`), or an arithmetic
//! expression terminated by `;`. Expressions are built from unsigned integers, single-letter
//! variables (`a` through `z`, case-insensitive), parentheses, the four arithmetic operators, and
//! right-associative assignment (`x = <expression>`).
//!
//! Parsing produces an [`Ast`](parser::ast::Ast): an arena of [`Node`](parser::ast::Node)s
//! addressed by ids, rooted at a `Prog` node. The arena representation keeps child and parent
//! edges as plain indices, which lets rewrite passes relink subtrees freely without fighting
//! ownership.
//!
//! ```
//! use mex_parser::parser::{ast::NodeKind, Parser};
//!
//! let ast = Parser::new("x = 1 + 2;").unwrap().parse().unwrap();
//! assert_eq!(ast[ast.root].kind, NodeKind::Prog);
//! ```

pub mod parser;
pub mod tokenizer;
