//! Lowering to `{~, &}` and further to `{-&}`.
//!
//! Both reducers start from the base stage. [`to_not_and`] removes `|` by De Morgan,
//! then [`to_nand`] rewrites the remaining `~` and `&` with the identities
//!
//! ```text
//! ~x    == x -& x
//! x & y == (x -& y) -& (x -& y)
//! ```
//!
//! Each identity mentions a subexpression twice; both mentions point at the same
//! rewritten node.

use std::sync::Arc;

use log::{debug, trace};

use crate::base::{self, Constants};
use crate::cache::NodeCache;
use crate::error::{Result, RewriteError};
use crate::formula::{BinOp, Formula, Var};

const OR_PASS: &str = "not-and";
const NAND_PASS: &str = "nand";

/// Converts `formula` to an equivalent formula over `{~, &}`.
///
/// Constants are removed by the base stage using `placeholder`.
pub fn to_not_and(formula: &Formula, placeholder: Var) -> Result<Formula> {
    let f = base::lower(formula, Constants::Eliminate(placeholder));
    lower_or(&f)
}

/// Converts `formula` to an equivalent formula over `{-&}`.
///
/// Constants are removed by the base stage using `placeholder`.
pub fn to_nand(formula: &Formula, placeholder: Var) -> Result<Formula> {
    let f = to_not_and(formula, placeholder)?;
    lower_not_and(&f)
}

/// Rewrites every `a | b` of a `{~, &, |}` formula into `~(~a & ~b)`.
///
/// Variables and constants pass through. Any other operator is an
/// [`UnrecognizedOperator`][RewriteError::UnrecognizedOperator]: the input did not come
/// out of the base stage.
pub fn lower_or(formula: &Formula) -> Result<Formula> {
    debug!("lower_or(size = {})", formula.size());
    let mut cache = NodeCache::new();
    let result = lower_or_node(&Arc::new(formula.clone()), &mut cache)?;
    Ok(Formula::from_shared(result))
}

fn lower_or_node(node: &Arc<Formula>, cache: &mut NodeCache) -> Result<Arc<Formula>> {
    if let Some(done) = cache.get(node) {
        return Ok(done);
    }

    let result = match node.as_ref() {
        Formula::Var(_) | Formula::Const(_) => node.clone(),
        Formula::Not { arg } => Arc::new(Formula::not(lower_or_node(arg, cache)?)),
        Formula::BinOp { op: BinOp::And, lhs, rhs } => {
            let a = lower_or_node(lhs, cache)?;
            let b = lower_or_node(rhs, cache)?;
            Arc::new(Formula::and(a, b))
        }
        Formula::BinOp { op: BinOp::Or, lhs, rhs } => {
            trace!("a|b => ~(~a&~b)");
            let a = lower_or_node(lhs, cache)?;
            let b = lower_or_node(rhs, cache)?;
            Arc::new(Formula::not(Formula::and(Formula::not(a), Formula::not(b))))
        }
        Formula::BinOp { op, .. } => return Err(RewriteError::unrecognized(*op, OR_PASS)),
    };

    cache.insert(node, result.clone());
    Ok(result)
}

/// Rewrites a `{~, &}` formula into `{-&}`.
///
/// Variables and constants pass through. Any other operator is an
/// [`UnrecognizedOperator`][RewriteError::UnrecognizedOperator].
pub fn lower_not_and(formula: &Formula) -> Result<Formula> {
    debug!("lower_not_and(size = {})", formula.size());
    let mut cache = NodeCache::new();
    let result = lower_not_and_node(&Arc::new(formula.clone()), &mut cache)?;
    Ok(Formula::from_shared(result))
}

fn lower_not_and_node(node: &Arc<Formula>, cache: &mut NodeCache) -> Result<Arc<Formula>> {
    if let Some(done) = cache.get(node) {
        return Ok(done);
    }

    let result = match node.as_ref() {
        Formula::Var(_) | Formula::Const(_) => node.clone(),
        Formula::Not { arg } => {
            trace!("~x => x-&x");
            let x = lower_not_and_node(arg, cache)?;
            Arc::new(Formula::nand(x.clone(), x))
        }
        Formula::BinOp { op: BinOp::And, lhs, rhs } => {
            trace!("x&y => (x-&y)-&(x-&y)");
            let x = lower_not_and_node(lhs, cache)?;
            let y = lower_not_and_node(rhs, cache)?;
            let t = Arc::new(Formula::nand(x, y));
            Arc::new(Formula::nand(t.clone(), t))
        }
        Formula::BinOp { op, .. } => return Err(RewriteError::unrecognized(*op, NAND_PASS)),
    };

    cache.insert(node, result.clone());
    Ok(result)
}
