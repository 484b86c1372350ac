//! Basic example demonstrating the selection stack
//!
//! Run with: cargo run --example basic -p selection-facade

use selection_facade::prelude::*;

fn main() -> Result<()> {
    println!("=== selectful Basic Examples ===\n");

    // 1. Directions
    println!("1. Search Directions");
    for direction in [SearchDirection::Forward, SearchDirection::Backward] {
        println!("   {}", direction);
    }
    println!();

    // 2. Deterministic search against a fixture table
    println!("2. Forward Search Over A Fixture Oracle");
    let oracle = FixtureOracle::from_table([
        (vec![], 10.0),
        (vec![0], 20.0),
        (vec![1], 50.0),
        (vec![2], 15.0),
        (vec![0, 1], 60.0),
        (vec![0, 2], 55.0),
        (vec![1, 2], 65.0),
        (vec![0, 1, 2], 70.0),
    ]);
    let engine = SearchEngine::forward();
    let outcome = engine.run(3, &oracle, &mut SilentObserver)?;
    println!("   Baseline: {}", outcome.baseline);
    for round in &outcome.rounds {
        println!("   Round {}: {}", round.round, round.winner);
    }
    println!("   Best: {}\n", outcome.best);

    // 3. Reproducible randomized search
    println!("3. Seeded Random Oracle");
    let outcome = SearchEngine::backward().run(5, &RandomOracle::seeded(42), &mut SilentObserver)?;
    println!("   Best: {}", outcome.best);
    println!("   Evaluations: {}", outcome.evaluations);
    if let Some(round) = outcome.degradation_round {
        println!("   Accuracy first degraded in round {}", round);
    }

    Ok(())
}
