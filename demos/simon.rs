//! Example: Simon's algorithm.
//! f is two-to-one with f(x) = f(x ⊕ s). Each run yields an outcome e with
//! e·s = 0 (mod 2); enough independent outcomes pin s down.

#[path = "../tests/common/mod.rs"]
mod common;

use common::ReferenceBackend;
use qoracle::{analyze_simon_system, gf2_rank, solve_simon_system, AlgorithmRunner, OracleFunction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- qoracle Example: Simon's algorithm (n=3, s=110) ---");

    // --- Post-processing on its own ---
    let equations = [0b001, 0b111, 0b110, 0b000];
    println!(
        "Equations {:?} have rank {} and solve to {:03b} ({})",
        equations,
        gf2_rank(&equations),
        solve_simon_system(&equations, 3)?,
        analyze_simon_system(&equations, 3)?
    );
    println!("All-zero equations: {}", analyze_simon_system(&[0, 0, 0], 3)?);

    // --- End to end ---
    let f = OracleFunction::table(vec![0, 1, 2, 3, 2, 3, 0, 1]);
    let mut runner = AlgorithmRunner::new(ReferenceBackend::seeded(3));
    let s = runner.simon(3, &f)?;
    println!("Recovered s = {:03b}", s);
    assert_eq!(s, 0b110, "Expected s = 110");

    let one_to_one = OracleFunction::callable(|x| x);
    println!("One-to-one f gives s = {}", runner.simon(3, &one_to_one)?);
    Ok(())
}
