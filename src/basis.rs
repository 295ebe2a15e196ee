//! Target operator bases.
//!
//! Each reducer guarantees that its output only uses the operators of one [`Basis`].
//! [`Basis::admits`] is the structural check for that guarantee.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use crate::formula::{BinOp, Constant, Formula, Operator};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Basis {
    /// `{~, &, |}`
    NotAndOr,
    /// `{~, &}`
    NotAnd,
    /// `{-&}`
    Nand,
    /// `{->, ~}`
    ImpliesNot,
    /// `{->, F}`
    ImpliesFalse,
}

impl Basis {
    pub const ALL: [Basis; 5] = [
        Basis::NotAndOr,
        Basis::NotAnd,
        Basis::Nand,
        Basis::ImpliesNot,
        Basis::ImpliesFalse,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Basis::NotAndOr => "not-and-or",
            Basis::NotAnd => "not-and",
            Basis::Nand => "nand",
            Basis::ImpliesNot => "implies-not",
            Basis::ImpliesFalse => "implies-false",
        }
    }

    pub fn admits_operator(self, op: Operator) -> bool {
        use BinOp::*;
        match self {
            Basis::NotAndOr => matches!(op, Operator::Not | Operator::Binary(And | Or)),
            Basis::NotAnd => matches!(op, Operator::Not | Operator::Binary(And)),
            Basis::Nand => matches!(op, Operator::Binary(Nand)),
            Basis::ImpliesNot => matches!(op, Operator::Not | Operator::Binary(Implies)),
            Basis::ImpliesFalse => matches!(op, Operator::Binary(Implies)),
        }
    }

    /// Only `F` under [`Basis::ImpliesFalse`]; every other basis is constant-free.
    pub fn admits_constant(self, c: Constant) -> bool {
        matches!((self, c), (Basis::ImpliesFalse, Constant::False))
    }

    pub fn operators(self) -> BTreeSet<Operator> {
        std::iter::once(Operator::Not)
            .chain(BinOp::ALL.into_iter().map(Operator::Binary))
            .filter(|&op| self.admits_operator(op))
            .collect()
    }

    /// Returns `true` if every node of `formula` is a variable, an admitted constant,
    /// or an admitted operator.
    pub fn admits(self, formula: &Formula) -> bool {
        let mut ok = true;
        formula.visit(|node| {
            ok &= match node {
                Formula::Var(_) => true,
                Formula::Const(c) => self.admits_constant(*c),
                _ => node.operator().is_some_and(|op| self.admits_operator(op)),
            };
        });
        ok
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
