// tests/combine_props.rs
//
// Algebraic properties of the positive-evidence CF combination rule,
// checked on randomly sampled inputs in [0,1].

use rand::Rng;

use cf_screening_engine::score::{combine, combine_all};

const EPS: f64 = 1e-9;
const SAMPLES: usize = 1_000;

fn sample() -> f64 {
    rand::rng().random_range(0.0..=1.0)
}

#[test]
fn combine_is_commutative() {
    for _ in 0..SAMPLES {
        let (a, b) = (sample(), sample());
        assert!(
            (combine(a, b) - combine(b, a)).abs() < EPS,
            "combine({a}, {b}) != combine({b}, {a})"
        );
    }
}

#[test]
fn combine_is_associative() {
    for _ in 0..SAMPLES {
        let (a, b, c) = (sample(), sample(), sample());
        let left = combine(combine(a, b), c);
        let right = combine(a, combine(b, c));
        assert!((left - right).abs() < EPS, "({a}, {b}, {c}): {left} vs {right}");
    }
}

#[test]
fn zero_is_identity_and_one_absorbs() {
    for _ in 0..SAMPLES {
        let a = sample();
        assert!((combine(a, 0.0) - a).abs() < EPS);
        assert!((combine(1.0, a) - 1.0).abs() < EPS);
    }
}

#[test]
fn fold_is_order_independent() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let mut cfs: Vec<f64> = (0..5).map(|_| rng.random_range(0.0..=1.0)).collect();
        let forward = combine_all(cfs.iter().copied());
        cfs.reverse();
        let backward = combine_all(cfs.iter().copied());
        assert!((forward - backward).abs() < EPS);
    }
}

#[test]
fn fold_is_monotone_in_each_input() {
    let mut rng = rand::rng();
    for _ in 0..SAMPLES {
        let mut cfs: Vec<f64> = (0..4).map(|_| rng.random_range(0.0..=1.0)).collect();
        let before = combine_all(cfs.iter().copied());
        let idx = rng.random_range(0..cfs.len());
        let bumped = (cfs[idx] + rng.random_range(0.0..=0.5)).min(1.0);
        cfs[idx] = bumped;
        let after = combine_all(cfs.iter().copied());
        assert!(after + EPS >= before, "raising one input lowered the fold");
    }
}

#[test]
fn fold_never_leaves_unit_interval() {
    let mut rng = rand::rng();
    for _ in 0..SAMPLES {
        let n = rng.random_range(0..8);
        let cfs: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..=1.0)).collect();
        let cf = combine_all(cfs);
        assert!((0.0..=1.0).contains(&cf));
    }
}
