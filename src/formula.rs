//! Propositional formulas as immutable expression trees.
//!
//! A [`Formula`] is never mutated in place: every rewrite builds new nodes.
//! Children are held behind [`Arc`], so a rewrite that needs the same subexpression
//! twice (e.g. `x -& x`) clones the handle instead of rebuilding the subtree.
//!
//! ```
//! use formula_lowering::formula::Formula;
//!
//! let p = Formula::var("p");
//! let q = Formula::var("q");
//! let f = Formula::implies(p.clone(), q.clone() ^ Formula::ff());
//! assert_eq!(f.to_string(), "(p->(q+F))");
//! assert_eq!(f.size(), 5);
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::ops;
use std::sync::Arc;

/// A propositional variable.
///
/// The name is treated as an opaque token: it is compared, ordered and hashed,
/// but never inspected by the rewriting passes.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(Arc<str>);

impl Var {
    pub fn new(name: impl AsRef<str>) -> Self {
        Var(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Var(Arc::from(name))
    }
}

/// Formula-level truth constants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Constant {
    True,
    False,
}

impl Display for Constant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::True => write!(f, "T"),
            Constant::False => write!(f, "F"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BinOp {
    And,
    Or,
    Implies,
    Xor,
    Iff,
    Nand,
    Nor,
}

impl BinOp {
    pub const ALL: [BinOp; 7] = [
        BinOp::And,
        BinOp::Or,
        BinOp::Implies,
        BinOp::Xor,
        BinOp::Iff,
        BinOp::Nand,
        BinOp::Nor,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Implies => "->",
            BinOp::Xor => "+",
            BinOp::Iff => "<->",
            BinOp::Nand => "-&",
            BinOp::Nor => "-|",
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operator symbol of an inner node.
///
/// This is what operator bases are made of, and what
/// [`RewriteError::UnrecognizedOperator`][crate::error::RewriteError::UnrecognizedOperator]
/// reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    Not,
    Binary(BinOp),
}

impl Operator {
    pub const fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::Binary(_) => 2,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "~",
            Operator::Binary(op) => op.symbol(),
        }
    }
}

impl From<BinOp> for Operator {
    fn from(op: BinOp) -> Self {
        Operator::Binary(op)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Formula {
    Var(Var),
    Const(Constant),
    Not { arg: Arc<Formula> },
    BinOp { op: BinOp, lhs: Arc<Formula>, rhs: Arc<Formula> },
}

// Constructors
impl Formula {
    pub fn var(name: impl Into<Var>) -> Self {
        Formula::Var(name.into())
    }

    pub fn constant(value: Constant) -> Self {
        Formula::Const(value)
    }

    pub fn tt() -> Self {
        Formula::Const(Constant::True)
    }

    pub fn ff() -> Self {
        Formula::Const(Constant::False)
    }

    pub fn not(arg: impl Into<Arc<Formula>>) -> Self {
        Formula::Not { arg: arg.into() }
    }

    pub fn binary(op: BinOp, lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::BinOp {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub fn and(lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::binary(BinOp::And, lhs, rhs)
    }

    pub fn or(lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::binary(BinOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::binary(BinOp::Implies, lhs, rhs)
    }

    pub fn xor(lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::binary(BinOp::Xor, lhs, rhs)
    }

    pub fn iff(lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::binary(BinOp::Iff, lhs, rhs)
    }

    pub fn nand(lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::binary(BinOp::Nand, lhs, rhs)
    }

    pub fn nor(lhs: impl Into<Arc<Formula>>, rhs: impl Into<Arc<Formula>>) -> Self {
        Formula::binary(BinOp::Nor, lhs, rhs)
    }
}

impl Formula {
    /// Takes the root out of a shared handle, cloning it (shallowly) if still shared.
    pub fn from_shared(node: Arc<Formula>) -> Self {
        Arc::try_unwrap(node).unwrap_or_else(|shared| (*shared).clone())
    }
}

// Classification and accessors
impl Formula {
    pub fn is_variable(&self) -> bool {
        matches!(self, Formula::Var(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Formula::Const(_))
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Formula::Not { .. })
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Formula::BinOp { .. })
    }

    /// Operator at the root, or `None` for leaves.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Formula::Var(_) | Formula::Const(_) => None,
            Formula::Not { .. } => Some(Operator::Not),
            Formula::BinOp { op, .. } => Some(Operator::Binary(*op)),
        }
    }

    pub fn first(&self) -> Option<&Arc<Formula>> {
        match self {
            Formula::Var(_) | Formula::Const(_) => None,
            Formula::Not { arg } => Some(arg),
            Formula::BinOp { lhs, .. } => Some(lhs),
        }
    }

    pub fn second(&self) -> Option<&Arc<Formula>> {
        match self {
            Formula::BinOp { rhs, .. } => Some(rhs),
            _ => None,
        }
    }
}

// Structural queries
//
// Rewrites share converted subexpressions through `Arc`, so an output tree may reuse one
// node many times. All queries below walk each distinct node (by address) once, which
// keeps them linear in the number of allocated nodes instead of the unfolded tree.
impl Formula {
    /// Number of distinct nodes reachable from this one.
    ///
    /// A subtree referenced twice through the same handle is counted once.
    pub fn size(&self) -> usize {
        let mut count = 0;
        self.visit(|_| count += 1);
        count
    }

    /// Height of the tree; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        fn go(node: &Formula, memo: &mut HashMap<*const Formula, usize>) -> usize {
            let key = node as *const Formula;
            if let Some(&depth) = memo.get(&key) {
                return depth;
            }
            let depth = match node {
                Formula::Var(_) | Formula::Const(_) => 0,
                Formula::Not { arg } => 1 + go(arg, memo),
                Formula::BinOp { lhs, rhs, .. } => 1 + go(lhs, memo).max(go(rhs, memo)),
            };
            memo.insert(key, depth);
            depth
        }

        go(self, &mut HashMap::new())
    }

    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.visit(|node| {
            if let Formula::Var(v) = node {
                vars.insert(v.clone());
            }
        });
        vars
    }

    pub fn operators(&self) -> BTreeSet<Operator> {
        let mut ops = BTreeSet::new();
        self.visit(|node| {
            if let Some(op) = node.operator() {
                ops.insert(op);
            }
        });
        ops
    }

    pub fn constants(&self) -> BTreeSet<Constant> {
        let mut consts = BTreeSet::new();
        self.visit(|node| {
            if let Formula::Const(c) = node {
                consts.insert(*c);
            }
        });
        consts
    }

    /// Pre-order traversal over distinct nodes.
    ///
    /// Uses an explicit stack, so arbitrarily deep trees do not exhaust the call stack.
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(&Formula),
    {
        let mut seen: HashSet<*const Formula> = HashSet::new();
        let mut stack: Vec<&Formula> = vec![self];
        while let Some(node) = stack.pop() {
            if !seen.insert(node as *const Formula) {
                continue;
            }
            f(node);
            match node {
                Formula::Var(_) | Formula::Const(_) => {}
                Formula::Not { arg } => stack.push(arg),
                Formula::BinOp { lhs, rhs, .. } => {
                    stack.push(rhs);
                    stack.push(lhs);
                }
            }
        }
    }
}

impl From<Var> for Formula {
    fn from(var: Var) -> Self {
        Formula::Var(var)
    }
}

impl From<Constant> for Formula {
    fn from(value: Constant) -> Self {
        Formula::Const(value)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Var(v) => write!(f, "{v}"),
            Formula::Const(c) => write!(f, "{c}"),
            Formula::Not { arg } => write!(f, "~{arg}"),
            Formula::BinOp { op, lhs, rhs } => write!(f, "({lhs}{op}{rhs})"),
        }
    }
}

impl ops::Not for Formula {
    type Output = Self;

    fn not(self) -> Self::Output {
        Formula::not(self)
    }
}

impl ops::BitAnd for Formula {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Formula::and(self, rhs)
    }
}

impl ops::BitOr for Formula {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Formula::or(self, rhs)
    }
}

impl ops::BitXor for Formula {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Formula::xor(self, rhs)
    }
}
