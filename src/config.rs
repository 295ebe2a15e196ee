//! Rewriter configuration.
//!
//! The only tunable today is how the base stage spells out the constants `T` and `F`:
//! it has no constant-free way to say "true" without mentioning some variable, so it
//! writes `(p|~p)` and `(p&~p)` for a placeholder `p`.

use std::collections::BTreeSet;

use crate::formula::Var;

/// Name used by [`Placeholder::default`] and as the stem for fresh names.
pub const DEFAULT_PLACEHOLDER: &str = "p";

/// Choice of placeholder variable for constant elimination.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Placeholder {
    /// Always use the given variable.
    ///
    /// The rewritten constant is still a tautology (or contradiction) whatever the
    /// placeholder's value, so the result is equivalent to the input. The variable may,
    /// however, coincide with one the formula already uses, in which case the output's
    /// variable set does not tell the two apart.
    Fixed(Var),
    /// Use the first of `p`, `p1`, `p2`, ... that does not occur in the input formula.
    Fresh,
}

impl Default for Placeholder {
    fn default() -> Self {
        Placeholder::Fixed(Var::new(DEFAULT_PLACEHOLDER))
    }
}

impl Placeholder {
    /// Resolves the policy against the variables of a concrete input formula.
    pub fn resolve(&self, used: &BTreeSet<Var>) -> Var {
        match self {
            Placeholder::Fixed(var) => var.clone(),
            Placeholder::Fresh => {
                let stem = Var::new(DEFAULT_PLACEHOLDER);
                if !used.contains(&stem) {
                    return stem;
                }
                (1..)
                    .map(|i| Var::new(format!("{DEFAULT_PLACEHOLDER}{i}")))
                    .find(|v| !used.contains(v))
                    .unwrap_or(stem)
            }
        }
    }
}

/// Configuration for [`Rewriter`][crate::rewriter::Rewriter].
///
/// ```
/// use formula_lowering::config::{Placeholder, RewriteConfig};
///
/// let config = RewriteConfig::default().with_placeholder(Placeholder::Fresh);
/// assert_eq!(config.placeholder, Placeholder::Fresh);
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RewriteConfig {
    pub placeholder: Placeholder,
}

impl RewriteConfig {
    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }
}
