use log::debug;

use crate::basis::Basis;
use crate::config::RewriteConfig;
use crate::error::Result;
use crate::formula::{Formula, Var};
use crate::{base, implies, not_and};

/// Entry point to all reducers, carrying a [`RewriteConfig`].
///
/// ```
/// use formula_lowering::basis::Basis;
/// use formula_lowering::formula::Formula;
/// use formula_lowering::rewriter::Rewriter;
///
/// let p = Formula::var("p");
/// let q = Formula::var("q");
/// let rewriter = Rewriter::default();
///
/// let f = rewriter.to_not_and_or(&Formula::implies(p, q)).unwrap();
/// assert_eq!(f.to_string(), "(~p|q)");
/// assert!(Basis::NotAndOr.admits(&f));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    config: RewriteConfig,
}

impl Rewriter {
    pub fn new(config: RewriteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    fn placeholder(&self, formula: &Formula) -> Var {
        let var = self.config.placeholder.resolve(&formula.variables());
        debug!("placeholder = {}", var);
        var
    }

    /// Equivalent formula over `{~, &, |}`, without constants.
    ///
    /// This never fails; the `Result` keeps the signature uniform with the other reducers.
    pub fn to_not_and_or(&self, formula: &Formula) -> Result<Formula> {
        let placeholder = self.placeholder(formula);
        Ok(base::lower(formula, base::Constants::Eliminate(placeholder)))
    }

    /// Equivalent formula over `{~, &}`, without constants.
    pub fn to_not_and(&self, formula: &Formula) -> Result<Formula> {
        not_and::to_not_and(formula, self.placeholder(formula))
    }

    /// Equivalent formula over `{-&}`, without constants.
    pub fn to_nand(&self, formula: &Formula) -> Result<Formula> {
        not_and::to_nand(formula, self.placeholder(formula))
    }

    /// Equivalent formula over `{->, ~}`, without constants.
    pub fn to_implies_not(&self, formula: &Formula) -> Result<Formula> {
        implies::to_implies_not(formula, self.placeholder(formula))
    }

    /// Equivalent formula over `{->, F}`.
    ///
    /// Needs no placeholder, so the configuration has no effect here.
    pub fn to_implies_false(&self, formula: &Formula) -> Result<Formula> {
        implies::to_implies_false(formula)
    }

    /// Dispatches to the reducer for `basis`.
    pub fn reduce(&self, formula: &Formula, basis: Basis) -> Result<Formula> {
        debug!("reduce(basis = {}, size = {})", basis, formula.size());
        let result = match basis {
            Basis::NotAndOr => self.to_not_and_or(formula),
            Basis::NotAnd => self.to_not_and(formula),
            Basis::Nand => self.to_nand(formula),
            Basis::ImpliesNot => self.to_implies_not(formula),
            Basis::ImpliesFalse => self.to_implies_false(formula),
        }?;
        debug!("reduce(basis = {}) -> size = {}", basis, result.size());
        Ok(result)
    }
}
