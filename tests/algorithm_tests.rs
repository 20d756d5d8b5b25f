// tests/algorithm_tests.rs

mod common;

use common::ReferenceBackend;
use qoracle::{AlgorithmRunner, FunctionClass, OracleError, OracleFunction, RetryPolicy, SignConvention};

fn runner(seed: u64) -> AlgorithmRunner<ReferenceBackend> {
    AlgorithmRunner::new(ReferenceBackend::seeded(seed))
}

fn runner_with_shots(seed: u64, shots: usize) -> AlgorithmRunner<ReferenceBackend> {
    runner(seed).with_retry_policy(RetryPolicy { max_attempts: 10, shots_per_attempt: Some(shots) })
}

#[test]
fn test_bernstein_vazirani_truth_tables() -> Result<(), OracleError> {
    let cases: Vec<(usize, Vec<u64>, (u64, u64))> = vec![
        (1, vec![0, 1], (1, 0)),
        (1, vec![1, 0], (1, 1)),
        (2, vec![1, 1, 1, 1], (0, 1)),
        (2, vec![1, 0, 0, 1], (0b11, 1)),
        (3, vec![1, 0, 1, 0, 0, 1, 0, 1], (0b101, 1)),
    ];
    let mut runner = runner(7);
    for (n, table, expected) in cases {
        let f = OracleFunction::table(table.clone());
        assert_eq!(runner.bernstein_vazirani(n, &f)?, expected, "n={} table={:?}", n, table);
    }
    Ok(())
}

#[test]
fn test_bernstein_vazirani_callables() -> Result<(), OracleError> {
    let mut runner = runner(11);
    let four = OracleFunction::callable(|x| u64::from((x & 0b1101).count_ones() % 2));
    assert_eq!(runner.bernstein_vazirani(4, &four)?, (0b1101, 0));
    let five = OracleFunction::callable(|x| u64::from((x & 0b10110).count_ones() % 2));
    assert_eq!(runner.bernstein_vazirani(5, &five)?, (0b10110, 0));
    Ok(())
}

#[test]
fn test_deutsch_jozsa_classifies() -> Result<(), OracleError> {
    let mut runner = runner_with_shots(3, 4);
    let balanced = OracleFunction::callable(|x| x % 2);
    let constant = OracleFunction::callable(|_| 0);
    let constant_one = OracleFunction::callable(|_| 1);
    for n in 1..=5 {
        assert_eq!(runner.deutsch_jozsa(n, &balanced)?, FunctionClass::Balanced, "n={}", n);
        assert_eq!(runner.deutsch_jozsa(n, &constant)?, FunctionClass::Constant, "n={}", n);
        assert_eq!(runner.deutsch_jozsa(n, &constant_one)?, FunctionClass::Constant, "n={}", n);
    }
    Ok(())
}

#[test]
fn test_grover_finds_marked_element() -> Result<(), OracleError> {
    for convention in [SignConvention::Standard, SignConvention::GlobalPhaseFlip] {
        let mut runner = runner_with_shots(5, 4).with_sign_convention(convention);
        for (n, marked) in [(1usize, 1u64), (2, 0b10), (3, 0b011), (4, 0b1001), (5, 0b11110)] {
            let f = OracleFunction::predicate(move |x| x == marked);
            assert_eq!(runner.grover(n, &f)?, Some(marked), "n={} {:?}", n, convention);
        }
    }
    Ok(())
}

#[test]
fn test_grover_without_marked_element() -> Result<(), OracleError> {
    let mut runner = runner(9);
    let nothing = OracleFunction::predicate(|_| false);
    assert_eq!(runner.grover(3, &nothing)?, None);
    assert_eq!(runner.backend().jobs_run, RetryPolicy::default().max_attempts);
    Ok(())
}

#[test]
fn test_simon_recovers_hidden_strings() -> Result<(), OracleError> {
    let cases: Vec<(usize, Vec<u64>, u64)> = vec![
        (1, vec![0, 1], 0),
        (2, vec![3, 0, 3, 0], 0b10),
        (2, vec![2, 1, 1, 2], 0b11),
        (3, vec![0, 1, 2, 3, 2, 3, 0, 1], 0b110),
    ];
    let mut runner = runner_with_shots(13, 8);
    for (n, table, s) in cases {
        let f = OracleFunction::table(table.clone());
        assert_eq!(runner.simon(n, &f)?, s, "n={} table={:?}", n, table);
    }

    let one_to_one = OracleFunction::callable(|x| x);
    assert_eq!(runner.simon(3, &one_to_one)?, 0);
    Ok(())
}

#[test]
fn test_simon_rejects_out_of_range_outputs() {
    let mut runner = runner(1);
    let f = OracleFunction::table(vec![0, 4, 0, 4]);
    assert!(matches!(runner.simon(2, &f), Err(OracleError::OutputOutOfRange { .. })));
    assert_eq!(runner.backend().jobs_run, 0);
}

#[test]
fn test_runner_reuses_cached_oracles() -> Result<(), OracleError> {
    let mut runner = runner(21);
    let f = OracleFunction::table(vec![1, 0, 0, 1]);
    runner.bernstein_vazirani(2, &f)?;
    // an equal truth table built separately hits the same entry
    let same = OracleFunction::table(vec![1, 0, 0, 1]);
    assert_eq!(runner.deutsch_jozsa(2, &same)?, FunctionClass::Balanced);

    assert_eq!(runner.cache().misses(), 1);
    assert_eq!(runner.cache().hits(), 1);
    assert_eq!(runner.into_backend().jobs_run, 2);
    Ok(())
}

#[test]
fn test_runner_distinguishes_short_lived_closures() -> Result<(), OracleError> {
    let mut runner = runner(33);
    for a in 0..8u64 {
        let f = OracleFunction::callable(move |x| u64::from((x & a).count_ones() % 2));
        assert_eq!(runner.bernstein_vazirani(3, &f)?, (a, 0), "a={:#b}", a);
    }
    assert_eq!(runner.cache().misses(), 8);
    Ok(())
}
