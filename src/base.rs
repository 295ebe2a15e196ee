//! Base stage: lowering to `{~, &, |}`.
//!
//! Every derived connective is expanded in terms of `~`, `&` and `|`:
//!
//! | Input      | Output                  |
//! |------------|-------------------------|
//! | `a -> b`   | `(~a \| b)`             |
//! | `a + b`    | `((a & ~b) \| (~a & b))`|
//! | `a <-> b`  | `((a & b) \| (~a & ~b))`|
//! | `a -& b`   | `~(a & b)`              |
//! | `a -\| b`  | `~(a \| b)`             |
//! | `T`        | `(p \| ~p)`             |
//! | `F`        | `(p & ~p)`              |
//!
//! where `p` is the placeholder picked by [`Placeholder`][crate::config::Placeholder].
//! Children are lowered first and each lowered child is referenced (not rebuilt) by
//! every occurrence in the expansion.
//!
//! Every later stage starts from this one, and relies on its output containing no
//! operator besides `~`, `&` and `|`.

use std::sync::Arc;

use log::{debug, trace};

use crate::cache::NodeCache;
use crate::formula::{BinOp, Constant, Formula, Var};

/// Treatment of `T` and `F` leaves.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Constants {
    /// Replace them by a tautology/contradiction over the given variable.
    Eliminate(Var),
    /// Leave them in place, for stages whose target basis can express constants itself.
    Keep,
}

/// Lowers `formula` to an equivalent formula over `{~, &, |}`.
///
/// With [`Constants::Eliminate`] the output contains no constants; with
/// [`Constants::Keep`] the `T`/`F` leaves of the input are carried over unchanged.
///
/// The base stage handles every operator there is, so unlike the later stages it
/// cannot fail.
pub fn lower(formula: &Formula, constants: Constants) -> Formula {
    debug!("base::lower(size = {}, constants = {:?})", formula.size(), constants);
    let mut pass = BaseLowering::new(constants);
    let result = pass.lower(&Arc::new(formula.clone()));
    debug!(
        "base::lower: size = {}, cache hits = {}",
        result.size(),
        pass.cache.hits()
    );
    Formula::from_shared(result)
}

struct BaseLowering {
    tautology: Option<Arc<Formula>>,
    contradiction: Option<Arc<Formula>>,
    cache: NodeCache,
}

impl BaseLowering {
    fn new(constants: Constants) -> Self {
        match constants {
            Constants::Eliminate(placeholder) => {
                let p = Arc::new(Formula::Var(placeholder));
                let not_p = Arc::new(Formula::not(p.clone()));
                Self {
                    tautology: Some(Arc::new(Formula::or(p.clone(), not_p.clone()))),
                    contradiction: Some(Arc::new(Formula::and(p, not_p))),
                    cache: NodeCache::new(),
                }
            }
            Constants::Keep => Self {
                tautology: None,
                contradiction: None,
                cache: NodeCache::new(),
            },
        }
    }

    fn lower(&mut self, node: &Arc<Formula>) -> Arc<Formula> {
        if let Some(done) = self.cache.get(node) {
            return done;
        }

        let result = match node.as_ref() {
            Formula::Var(_) => node.clone(),
            Formula::Const(Constant::True) => match &self.tautology {
                Some(t) => {
                    trace!("T => (p|~p)");
                    t.clone()
                }
                None => node.clone(),
            },
            Formula::Const(Constant::False) => match &self.contradiction {
                Some(f) => {
                    trace!("F => (p&~p)");
                    f.clone()
                }
                None => node.clone(),
            },
            Formula::Not { arg } => Arc::new(Formula::not(self.lower(arg))),
            Formula::BinOp { op, lhs, rhs } => {
                let a = self.lower(lhs);
                let b = self.lower(rhs);
                Arc::new(expand(*op, a, b))
            }
        };

        self.cache.insert(node, result.clone());
        result
    }
}

/// Expands one binary node whose children are already lowered.
fn expand(op: BinOp, a: Arc<Formula>, b: Arc<Formula>) -> Formula {
    match op {
        BinOp::And | BinOp::Or => Formula::binary(op, a, b),
        BinOp::Implies => {
            trace!("a->b => (~a|b)");
            Formula::or(Formula::not(a), b)
        }
        BinOp::Xor => {
            trace!("a+b => ((a&~b)|(~a&b))");
            Formula::or(
                Formula::and(a.clone(), Formula::not(b.clone())),
                Formula::and(Formula::not(a), b),
            )
        }
        BinOp::Iff => {
            trace!("a<->b => ((a&b)|(~a&~b))");
            Formula::or(
                Formula::and(a.clone(), b.clone()),
                Formula::and(Formula::not(a), Formula::not(b)),
            )
        }
        BinOp::Nand => {
            trace!("a-&b => ~(a&b)");
            Formula::not(Formula::and(a, b))
        }
        BinOp::Nor => {
            trace!("a-|b => ~(a|b)");
            Formula::not(Formula::or(a, b))
        }
    }
}
