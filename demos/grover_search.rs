//! Example: Grover search over 3 qubits.
//! Shows the sign oracle Z_f, the zero reflection Z_0, how the marked-state
//! probability grows under G = -H·Z_0·H·Z_f, and a full search run.

#[path = "../tests/common/mod.rs"]
mod common;

use common::ReferenceBackend;
use qoracle::{
    check_amplification, optimal_iterations, synthesize_phase_oracle, zero_reflection, AlgorithmRunner,
    OracleFunction, SignConvention,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let n = 3;
    let marked = 0b110;
    println!("--- qoracle Example: Grover search (n={}, marked={:03b}) ---", n, marked);

    let f = OracleFunction::predicate(move |x| x == marked);
    println!("Z_f:\n{}", synthesize_phase_oracle(n, &f, SignConvention::Standard)?);
    println!("Z_0:\n{}", zero_reflection(n)?);

    // Both conventions differ by a global phase and amplify alike.
    for convention in [SignConvention::Standard, SignConvention::GlobalPhaseFlip] {
        let z_f = synthesize_phase_oracle(n, &f, convention)?;
        let report = check_amplification(n, &f, &z_f)?;
        println!("{:?}: P(marked) starts at {:.4}", convention, report.initial);
        for (k, p) in report.probabilities.iter().enumerate() {
            println!("  after iteration {}: {:.4}", k + 1, p);
        }
    }

    let mut runner = AlgorithmRunner::new(ReferenceBackend::seeded(7));
    let found = runner.grover(n, &f)?;
    println!("Search with {} iteration(s) found {:?}", optimal_iterations(n), found);
    assert_eq!(found, Some(marked), "Expected the marked element");

    let nothing = OracleFunction::predicate(|_| false);
    println!("Search for an unmarked function found {:?}", runner.grover(n, &nothing)?);
    Ok(())
}
