//! Example: Bernstein-Vazirani and Deutsch-Jozsa with synthesized oracles.
//! Builds U_f|x>|b> = |x>|b ⊕ f(x)> as a permutation matrix, then recovers the
//! hidden string of f(x) = a·x ⊕ b with a single query.

#[path = "../tests/common/mod.rs"]
mod common;

use common::ReferenceBackend;
use qoracle::{check_permutation, synthesize_oracle_matrix, AlgorithmRunner, Arity, OracleFunction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- qoracle Example: Bernstein-Vazirani (n=3, a=101, b=1) ---");

    // --- The oracle matrix for a small case ---
    let small = OracleFunction::table(vec![1, 0, 0, 1]);
    let u_f = synthesize_oracle_matrix(2, &small, Arity::OneBit)?;
    check_permutation(&u_f)?;
    println!("U_f for f = [1, 0, 0, 1] ({}x{} permutation):\n{}", u_f.dim(), u_f.dim(), u_f);

    // --- Recover a and b ---
    let n = 3;
    let f = OracleFunction::table(vec![1, 0, 1, 0, 0, 1, 0, 1]);
    let mut runner = AlgorithmRunner::new(ReferenceBackend::seeded(42));
    let (a, b) = runner.bernstein_vazirani(n, &f)?;
    println!("Recovered a = {:0width$b}, b = {}", a, b, width = n);
    assert_eq!((a, b), (0b101, 1), "Expected a = 101 and b = 1");

    // --- Same circuit shape, different question ---
    let balanced = OracleFunction::callable(|x| x % 2);
    let constant = OracleFunction::callable(|_| 1);
    println!("x mod 2 is {}", runner.deutsch_jozsa(n, &balanced)?);
    println!("f = 1 is {}", runner.deutsch_jozsa(n, &constant)?);

    println!("Oracle cache: {} hits, {} misses", runner.cache().hits(), runner.cache().misses());
    Ok(())
}
