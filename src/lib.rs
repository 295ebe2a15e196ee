//! # formula-lowering: rewriting propositional formulas into minimal operator bases
//!
//! Given a formula over any of the connectives `~`, `&`, `|`, `->`, `+` (xor),
//! `<->`, `-&` (nand), `-|` (nor) and the constants `T`/`F`, produce a formula with the
//! **same truth table** that only uses one of the following bases:
//!
//! | Reducer                | Output basis      |
//! |------------------------|-------------------|
//! | [`to_not_and_or`]      | `{~, &, \|}`      |
//! | [`to_not_and`]         | `{~, &}`          |
//! | [`to_nand`]            | `{-&}`            |
//! | [`to_implies_not`]     | `{->, ~}`         |
//! | [`to_implies_false`]   | `{->, F}`         |
//!
//! Only membership in the basis is guaranteed, not a small result.
//!
//! ## Staged lowering
//!
//! The reducers are built as a chain of passes, compiler style:
//!
//! - [`base`] removes every derived connective and both constants, leaving `{~, &, |}`.
//! - [`not_and`] starts from the base stage and removes `|`, then (for `-&`) `~` and `&`.
//! - [`implies`] starts from the base stage and encodes `|`, `&` (and `~`) by `->`.
//!
//! Each later pass accepts only what its predecessor produces, and reports anything
//! else as [`RewriteError::UnrecognizedOperator`][crate::error::RewriteError].
//!
//! Formulas are immutable; every pass builds new nodes, and a rewrite that mentions a
//! subexpression twice references the same node twice.
//!
//! ## Usage
//!
//! ```rust
//! use formula_lowering::basis::Basis;
//! use formula_lowering::formula::Formula;
//!
//! let p = Formula::var("p");
//! let q = Formula::var("q");
//!
//! let f = formula_lowering::to_nand(&(p & q)).unwrap();
//! assert_eq!(f.to_string(), "((p-&q)-&(p-&q))");
//! assert!(Basis::Nand.admits(&f));
//!
//! let t = formula_lowering::to_implies_false(&Formula::tt()).unwrap();
//! assert_eq!(t.to_string(), "(F->F)");
//! ```
//!
//! ## Constants and the placeholder variable
//!
//! With no constants in the target basis, `T` and `F` are spelled `(p|~p)` and `(p&~p)`.
//! By default `p` is literally the variable `p`, which may already occur in the input.
//! [`Rewriter`][crate::rewriter::Rewriter] with
//! [`Placeholder::Fresh`][crate::config::Placeholder::Fresh] picks an unused name instead.

pub mod base;
pub mod basis;
pub mod cache;
pub mod config;
pub mod error;
pub mod formula;
pub mod implies;
pub mod not_and;
pub mod rewriter;

use crate::error::Result;
use crate::formula::Formula;
use crate::rewriter::Rewriter;

/// See [`Rewriter::to_not_and_or`]; uses the default configuration.
pub fn to_not_and_or(formula: &Formula) -> Result<Formula> {
    Rewriter::default().to_not_and_or(formula)
}

/// See [`Rewriter::to_not_and`]; uses the default configuration.
pub fn to_not_and(formula: &Formula) -> Result<Formula> {
    Rewriter::default().to_not_and(formula)
}

/// See [`Rewriter::to_nand`]; uses the default configuration.
pub fn to_nand(formula: &Formula) -> Result<Formula> {
    Rewriter::default().to_nand(formula)
}

/// See [`Rewriter::to_implies_not`]; uses the default configuration.
pub fn to_implies_not(formula: &Formula) -> Result<Formula> {
    Rewriter::default().to_implies_not(formula)
}

/// See [`Rewriter::to_implies_false`].
pub fn to_implies_false(formula: &Formula) -> Result<Formula> {
    Rewriter::default().to_implies_false(formula)
}
