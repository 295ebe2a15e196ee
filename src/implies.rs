//! Lowering to implication-based bases: `{->, ~}` and `{->, F}`.
//!
//! Both start from the base stage's `{~, &, |}` output and use
//!
//! ```text
//! a | b == ~a -> b                 == (a -> F) -> b
//! a & b == ~(a -> ~b)              == (a -> (b -> F)) -> F
//! ~a    ==                            a -> F
//! T     ==                            F -> F
//! ```

use std::sync::Arc;

use log::{debug, trace};

use crate::base::{self, Constants};
use crate::cache::NodeCache;
use crate::error::{Result, RewriteError};
use crate::formula::{BinOp, Constant, Formula, Var};

const IMPLIES_NOT_PASS: &str = "implies-not";
const IMPLIES_FALSE_PASS: &str = "implies-false";

/// Converts `formula` to an equivalent formula over `{->, ~}`.
///
/// Constants are removed by the base stage using `placeholder`.
pub fn to_implies_not(formula: &Formula, placeholder: Var) -> Result<Formula> {
    let f = base::lower(formula, Constants::Eliminate(placeholder));
    lower_to_implies_not(&f)
}

/// Converts `formula` to an equivalent formula over `{->, F}`.
///
/// `F` is itself part of the target basis, so the base stage keeps constants here
/// and no placeholder variable is ever introduced: `T` becomes `F -> F`.
pub fn to_implies_false(formula: &Formula) -> Result<Formula> {
    let f = base::lower(formula, Constants::Keep);
    lower_to_implies_false(&f)
}

/// Rewrites a `{~, &, |}` formula into `{->, ~}`.
///
/// Variables and constants pass through.
pub fn lower_to_implies_not(formula: &Formula) -> Result<Formula> {
    debug!("lower_to_implies_not(size = {})", formula.size());
    let mut cache = NodeCache::new();
    let result = implies_not_node(&Arc::new(formula.clone()), &mut cache)?;
    Ok(Formula::from_shared(result))
}

fn implies_not_node(node: &Arc<Formula>, cache: &mut NodeCache) -> Result<Arc<Formula>> {
    if let Some(done) = cache.get(node) {
        return Ok(done);
    }

    let result = match node.as_ref() {
        Formula::Var(_) | Formula::Const(_) => node.clone(),
        Formula::Not { arg } => Arc::new(Formula::not(implies_not_node(arg, cache)?)),
        Formula::BinOp { op, lhs, rhs } => {
            let a = implies_not_node(lhs, cache)?;
            let b = implies_not_node(rhs, cache)?;
            match op {
                BinOp::Or => {
                    trace!("a|b => ~a->b");
                    Arc::new(Formula::implies(Formula::not(a), b))
                }
                BinOp::And => {
                    trace!("a&b => ~(a->~b)");
                    Arc::new(Formula::not(Formula::implies(a, Formula::not(b))))
                }
                _ => return Err(RewriteError::unrecognized(*op, IMPLIES_NOT_PASS)),
            }
        }
    };

    cache.insert(node, result.clone());
    Ok(result)
}

/// Rewrites a `{~, &, |}` formula, possibly with constants, into `{->, F}`.
///
/// Variables and `F` pass through; `T` becomes `F -> F`.
pub fn lower_to_implies_false(formula: &Formula) -> Result<Formula> {
    debug!("lower_to_implies_false(size = {})", formula.size());
    let mut pass = ImpliesFalseLowering::new();
    let result = pass.lower(&Arc::new(formula.clone()))?;
    Ok(Formula::from_shared(result))
}

struct ImpliesFalseLowering {
    /// The one `F` leaf every rewrite points at.
    ff: Arc<Formula>,
    cache: NodeCache,
}

impl ImpliesFalseLowering {
    fn new() -> Self {
        Self {
            ff: Arc::new(Formula::ff()),
            cache: NodeCache::new(),
        }
    }

    /// `x -> F`
    fn negate(&self, x: impl Into<Arc<Formula>>) -> Formula {
        Formula::implies(x, self.ff.clone())
    }

    fn lower(&mut self, node: &Arc<Formula>) -> Result<Arc<Formula>> {
        if let Some(done) = self.cache.get(node) {
            return Ok(done);
        }

        let result = match node.as_ref() {
            Formula::Var(_) => node.clone(),
            Formula::Const(Constant::False) => self.ff.clone(),
            Formula::Const(Constant::True) => {
                trace!("T => F->F");
                Arc::new(self.negate(self.ff.clone()))
            }
            Formula::Not { arg } => {
                trace!("~a => a->F");
                let x = self.lower(arg)?;
                Arc::new(self.negate(x))
            }
            Formula::BinOp { op, lhs, rhs } => {
                let a = self.lower(lhs)?;
                let b = self.lower(rhs)?;
                match op {
                    BinOp::Or => {
                        trace!("a|b => (a->F)->b");
                        Arc::new(Formula::implies(self.negate(a), b))
                    }
                    BinOp::And => {
                        trace!("a&b => (a->(b->F))->F");
                        Arc::new(self.negate(Formula::implies(a, self.negate(b))))
                    }
                    _ => return Err(RewriteError::unrecognized(*op, IMPLIES_FALSE_PASS)),
                }
            }
        };

        self.cache.insert(node, result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::basis::Basis;
    use crate::formula::Operator;

    fn p() -> Formula {
        Formula::var("p")
    }

    fn q() -> Formula {
        Formula::var("q")
    }

    fn ff() -> Formula {
        Formula::ff()
    }

    fn imp(a: Formula, b: Formula) -> Formula {
        Formula::implies(a, b)
    }

    #[test]
    fn test_implies_not_or() {
        let res = lower_to_implies_not(&(p() | q())).unwrap();
        assert_eq!(res, imp(!p(), q()));
    }

    #[test]
    fn test_implies_not_and() {
        let res = lower_to_implies_not(&(p() & q())).unwrap();
        assert_eq!(res, !imp(p(), !q()));
    }

    #[test]
    fn test_implies_not_rejects_xor() {
        let res = lower_to_implies_not(&!(p() ^ q()));
        assert_eq!(
            res,
            Err(RewriteError::UnrecognizedOperator {
                operator: Operator::Binary(BinOp::Xor),
                pass: "implies-not",
            })
        );
    }

    #[test]
    fn test_to_implies_not() {
        let f = Formula::nor(p(), Formula::tt());
        let res = to_implies_not(&f, Var::new("r")).unwrap();
        // ~(p | (r | ~r))
        let r = Formula::var("r");
        assert_eq!(res, !imp(!p(), imp(!r.clone(), !r)));
        assert!(Basis::ImpliesNot.admits(&res));
    }

    #[test]
    fn test_implies_false_constants() {
        assert_eq!(lower_to_implies_false(&ff()).unwrap(), ff());
        assert_eq!(lower_to_implies_false(&Formula::tt()).unwrap(), imp(ff(), ff()));
        assert_eq!(to_implies_false(&Formula::tt()).unwrap(), imp(ff(), ff()));
    }

    #[test]
    fn test_implies_false_connectives() {
        assert_eq!(lower_to_implies_false(&!p()).unwrap(), imp(p(), ff()));
        assert_eq!(
            lower_to_implies_false(&(p() | q())).unwrap(),
            imp(imp(p(), ff()), q())
        );
        assert_eq!(
            lower_to_implies_false(&(p() & q())).unwrap(),
            imp(imp(p(), imp(q(), ff())), ff())
        );
    }

    #[test]
    fn test_implies_false_rejects_iff() {
        let res = lower_to_implies_false(&Formula::iff(p(), q()));
        assert!(matches!(
            res,
            Err(RewriteError::UnrecognizedOperator {
                pass: "implies-false",
                ..
            })
        ));
    }

    #[test]
    fn test_implies_false_shares_false_leaf() {
        let res = to_implies_false(&(!p() & !q())).unwrap();
        assert!(Basis::ImpliesFalse.admits(&res));
        assert_eq!(res.constants().len(), 1);
        // p, q, one F, and 2 + 3 implications.
        assert_eq!(res.size(), 8);
    }

    #[test]
    fn test_to_implies_false_no_placeholder() {
        let f = Formula::xor(q(), Formula::tt());
        let res = to_implies_false(&f).unwrap();
        assert_eq!(res.variables().len(), 1);
        assert!(Basis::ImpliesFalse.admits(&res));
    }
}
