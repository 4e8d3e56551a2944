//! Find and minimize a counterexample with a hand-written search loop
//!
//! Run with `cargo run --example shrink_counterexample`.

use num_bigint::BigInt;
use protest_bigint::{BigIntConstraints, Generator, GeneratorConfig, big_int, create_seeded_rng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let generator = big_int(BigIntConstraints::new().with_min(-(BigInt::from(1) << 100u32)))?;
    let config = GeneratorConfig::default();
    let mut rng = create_seeded_rng(2024);

    // Claim under test: every value is below 10^12 in magnitude
    let limit = BigInt::from(10).pow(12);
    let fails = |value: &BigInt| value.magnitude() >= limit.magnitude();

    let Some(mut failing) = (0..100)
        .map(|_| generator.generate(&mut rng, &config))
        .find(|value| fails(value))
    else {
        println!("No counterexample found");
        return Ok(());
    };
    println!("Counterexample: {}", failing);

    // Greedy descent: take the first candidate that still fails
    let mut steps = 0;
    while let Some(smaller) = generator.shrink(&failing).find(|candidate| fails(candidate)) {
        failing = smaller;
        steps += 1;
    }

    println!("Minimal counterexample after {} shrinks: {}", steps, failing);
    Ok(())
}
