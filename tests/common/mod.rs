//! Shared test support: truth-table evaluation and random formulas.
//!
//! Evaluation lives here rather than in the library: the crate only rewrites formulas,
//! and the tests use semantics to check that rewriting preserves meaning.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use formula_lowering::formula::{BinOp, Constant, Formula, Var};
use quickcheck::{Arbitrary, Gen};

pub type Assignment = BTreeMap<Var, bool>;

pub const VARS: [&str; 4] = ["p", "q", "r", "s"];

pub fn var(name: &str) -> Formula {
    Formula::var(name)
}

/// Evaluates `formula` under `assignment`; unassigned variables are `false`.
///
/// Memoized by node address, so shared subtrees are evaluated once.
pub fn eval(formula: &Formula, assignment: &Assignment) -> bool {
    fn go(
        node: &Formula,
        assignment: &Assignment,
        memo: &mut HashMap<*const Formula, bool>,
    ) -> bool {
        let key = node as *const Formula;
        if let Some(&value) = memo.get(&key) {
            return value;
        }
        let value = match node {
            Formula::Var(v) => assignment.get(v).copied().unwrap_or(false),
            Formula::Const(Constant::True) => true,
            Formula::Const(Constant::False) => false,
            Formula::Not { arg } => !go(arg, assignment, memo),
            Formula::BinOp { op, lhs, rhs } => {
                let a = go(lhs, assignment, memo);
                let b = go(rhs, assignment, memo);
                match op {
                    BinOp::And => a && b,
                    BinOp::Or => a || b,
                    BinOp::Implies => !a || b,
                    BinOp::Xor => a != b,
                    BinOp::Iff => a == b,
                    BinOp::Nand => !(a && b),
                    BinOp::Nor => !(a || b),
                }
            }
        };
        memo.insert(key, value);
        value
    }

    go(formula, assignment, &mut HashMap::new())
}

/// All assignments over `vars`.
pub fn assignments(vars: &BTreeSet<Var>) -> Vec<Assignment> {
    let vars: Vec<&Var> = vars.iter().collect();
    (0u32..1 << vars.len())
        .map(|bits| {
            vars.iter()
                .enumerate()
                .map(|(i, &v)| (v.clone(), bits & (1 << i) != 0))
                .collect()
        })
        .collect()
}

/// Returns `true` if `f` and `g` agree under every assignment to their joint variables.
///
/// Ranging over the joint variables also covers a placeholder introduced by constant
/// elimination: the output must not depend on its value.
pub fn equivalent(f: &Formula, g: &Formula) -> bool {
    let vars: BTreeSet<Var> = f.variables().union(&g.variables()).cloned().collect();
    assignments(&vars)
        .iter()
        .all(|assignment| eval(f, assignment) == eval(g, assignment))
}

/// Random formula over [`VARS`] with every operator and both constants, at most
/// `depth` levels deep.
pub fn random_formula(g: &mut Gen, depth: usize) -> Formula {
    let leaf = depth == 0 || u8::arbitrary(g) % 4 == 0;
    if leaf {
        return match u8::arbitrary(g) % 6 {
            0 => Formula::tt(),
            1 => Formula::ff(),
            _ => var(g.choose(&VARS).copied().unwrap_or("p")),
        };
    }
    match u8::arbitrary(g) % 8 {
        0 => !random_formula(g, depth - 1),
        k => {
            let op = BinOp::ALL[(k as usize - 1) % BinOp::ALL.len()];
            let lhs = random_formula(g, depth - 1);
            let rhs = random_formula(g, depth - 1);
            Formula::binary(op, lhs, rhs)
        }
    }
}

/// Newtype so quickcheck can generate formulas.
#[derive(Debug, Clone)]
pub struct Arb(pub Formula);

impl Arbitrary for Arb {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 6;
        Arb(random_formula(g, depth))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let children: Vec<Arb> = [self.0.first(), self.0.second()]
            .into_iter()
            .flatten()
            .map(|child| Arb(child.as_ref().clone()))
            .collect();
        Box::new(children.into_iter())
    }
}
