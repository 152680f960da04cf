//! Generate one round and validate a perfect answer against it.
//!
//! Usage:
//!   cargo run -p congruence --example demo_round -- [seed]

use congruence::prelude::*;
use congruence::validate::expected_correspondence;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let problem = match ProblemGenerator::generate_single(&GeneratorParams::default(), seed) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("generation failed: {err}");
            return;
        }
    };
    println!("seed {seed}: theorem {}", problem.theorem);
    println!(
        "target sides: {:?} labels: {:?}",
        side_lengths(&problem.target.vertices),
        problem.target.labels.as_array()
    );
    for t in &problem.choices {
        println!(
            "  {:?}: sides {:?} congruent={}",
            t.id,
            side_lengths(&t.vertices),
            t.congruent_to_target
        );
    }
    let Some(correct) = problem.choice(TriangleId::Correct) else {
        eprintln!("no correct choice generated");
        return;
    };
    let statement = expected_correspondence(&problem.target, correct);
    let verdict = validate(
        Some(correct),
        statement,
        problem.theorem,
        problem.theorem,
        correct,
        &problem.target,
    );
    println!("perfect answer -> success={}", verdict.success);
    for msg in &verdict.messages {
        println!("  {msg}");
    }
}
