mod common;

use common::{equivalent, random_formula, Arb};
use formula_lowering::basis::Basis;
use formula_lowering::config::{Placeholder, RewriteConfig};
use formula_lowering::error::RewriteError;
use formula_lowering::formula::Formula;
use formula_lowering::not_and;
use formula_lowering::rewriter::Rewriter;
use quickcheck::Gen;
use quickcheck_macros::quickcheck;
use test_log::test;

fn all_bases<F>(f: &Formula, mut check: F) -> bool
where
    F: FnMut(Basis, &Formula) -> bool,
{
    let rewriter = Rewriter::default();
    Basis::ALL.into_iter().all(|basis| match rewriter.reduce(f, basis) {
        Ok(res) => check(basis, &res),
        Err(_) => false,
    })
}

#[quickcheck]
fn output_within_basis(f: Arb) -> bool {
    all_bases(&f.0, |basis, res| basis.admits(res))
}

#[quickcheck]
fn output_equivalent(f: Arb) -> bool {
    all_bases(&f.0, |_, res| equivalent(&f.0, res))
}

#[quickcheck]
fn reducing_again_keeps_truth_table(f: Arb) -> bool {
    let rewriter = Rewriter::default();
    all_bases(&f.0, |basis, res| match rewriter.reduce(res, basis) {
        Ok(again) => basis.admits(&again) && equivalent(res, &again),
        Err(_) => false,
    })
}

#[quickcheck]
fn fresh_placeholder_adds_one_unused_variable(f: Arb) -> bool {
    let config = RewriteConfig::default().with_placeholder(Placeholder::Fresh);
    let rewriter = Rewriter::new(config);
    let input_vars = f.0.variables();
    match rewriter.to_not_and_or(&f.0) {
        Ok(res) => {
            let extra: Vec<_> = res.variables().difference(&input_vars).cloned().collect();
            let has_constants = !f.0.constants().is_empty();
            extra.len() == usize::from(has_constants) && equivalent(&f.0, &res)
        }
        Err(_) => false,
    }
}

#[quickcheck]
fn variables_preserved(f: Arb) -> bool {
    all_bases(&f.0, |_, res| f.0.variables().is_subset(&res.variables()))
}

/// One-time cost of the placeholder gadgets for `T`/`F`.
const CONSTANT_OVERHEAD: usize = 16;

#[test]
fn test_size_bound_deep_formulas() {
    let rewriter = Rewriter::default();
    let mut g = Gen::new(100);
    for _ in 0..200 {
        let f = random_formula(&mut g, 10);
        for basis in Basis::ALL {
            let res = rewriter.reduce(&f, basis).unwrap();
            assert!(
                res.size() <= 8 * f.size() + CONSTANT_OVERHEAD,
                "{basis}: size {} -> {}",
                f.size(),
                res.size()
            );
        }
    }
}

#[test]
fn test_nested_xor_does_not_blow_up() {
    let mut f = common::var("p");
    for i in 0..30 {
        let v = common::var(common::VARS[i % common::VARS.len()]);
        f = Formula::xor(f, v);
    }
    let rewriter = Rewriter::default();
    for basis in Basis::ALL {
        let res = rewriter.reduce(&f, basis).unwrap();
        assert!(res.size() <= 8 * f.size(), "{basis}: {}", res.size());
        assert!(basis.admits(&res));
    }
}

#[test]
fn test_skipping_base_stage_is_an_error() {
    let f = Formula::implies(common::var("p"), common::var("q"));
    assert!(matches!(
        not_and::lower_or(&f),
        Err(RewriteError::UnrecognizedOperator { .. })
    ));
    assert!(matches!(
        not_and::lower_not_and(&f),
        Err(RewriteError::UnrecognizedOperator { .. })
    ));
}

#[test]
fn test_reducers_are_shareable_across_threads() {
    let f = random_formula(&mut Gen::new(100), 8);
    let handles: Vec<_> = Basis::ALL
        .into_iter()
        .map(|basis| {
            let f = f.clone();
            std::thread::spawn(move || {
                let res = Rewriter::default().reduce(&f, basis).unwrap();
                basis.admits(&res) && equivalent(&f, &res)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
