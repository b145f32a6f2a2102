// demos/demo.rs
use gbm_paths::math_utils::Timer;
use gbm_paths::mc::engine::{generate_paths, SimulationParameters};

fn main() {
    println!("gbm-paths Demo");
    println!("==============\n");

    let params = SimulationParameters {
        s0: 100.0,
        mu: 0.05,
        sigma: 0.2,
        steps: 252,
        paths: 100_000,
        base_seed: 42,
    };

    println!(
        "Generating {} paths x {} steps (S0={}, mu={}, sigma={}, seed={})...",
        params.paths, params.steps, params.s0, params.mu, params.sigma, params.base_seed
    );

    let mut timer = Timer::new();
    timer.start();
    let batch = generate_paths(&params).expect("Valid parameters");
    let elapsed_ms = timer.elapsed_ms();

    let draws = params.paths * params.steps;
    println!(
        "Done in {:.1} ms ({:.1}M draws/sec)\n",
        elapsed_ms,
        draws as f64 / elapsed_ms / 1000.0
    );

    // Terminal price summary
    let terminals: Vec<f64> = (0..batch.path_count())
        .map(|i| batch.path(i)[params.steps - 1])
        .collect();
    let mean = terminals.iter().sum::<f64>() / terminals.len() as f64;
    let min = terminals.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = terminals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    println!("Terminal price across {} paths:", batch.path_count());
    println!("  mean: {:.4}", mean);
    println!("  min:  {:.4}", min);
    println!("  max:  {:.4}", max);

    // Reproducibility check: regenerate and compare a sample path
    let again = generate_paths(&params).expect("Valid parameters");
    assert_eq!(batch.path(1234), again.path(1234));
    println!("\nRe-run with the same seed reproduced the batch exactly.");

    // First few prices of path 0
    println!("\nPath 0, steps 1..6: {:?}", &batch.path(0)[..5]);
}
