// tests/statistical_test.rs
use gbm_paths::mc::engine::{generate_paths, SimulationParameters};

/// Terminal log-return moments under the unscaled-increment discretization:
/// log(S_N / S_0) = (mu - sigma^2/2)*N + sigma*W_N with W_N ~ N(0, N),
/// so the sample mean should approach (mu - sigma^2/2)*N and the sample
/// variance should approach sigma^2 * N as the path count grows.
#[test]
fn test_terminal_log_return_moments() {
    let params = SimulationParameters {
        s0: 100.0,
        mu: 0.05,
        sigma: 0.2,
        steps: 10,
        paths: 100_000,
        base_seed: 42,
    };

    let batch = generate_paths(&params).expect("Valid parameters");

    let n = params.steps as f64;
    let log_returns: Vec<f64> = (0..batch.path_count())
        .map(|i| (batch.path(i)[params.steps - 1] / params.s0).ln())
        .collect();

    let mean = log_returns.iter().sum::<f64>() / log_returns.len() as f64;
    let variance = log_returns.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
        / (log_returns.len() - 1) as f64;

    let expected_mean = (params.mu - 0.5 * params.sigma * params.sigma) * n;
    let expected_variance = params.sigma * params.sigma * n;

    println!("terminal log-return mean: {} (expected {})", mean, expected_mean);
    println!(
        "terminal log-return variance: {} (expected {})",
        variance, expected_variance
    );

    // Standard error of the mean is sigma*sqrt(N)/sqrt(paths) ~ 0.002
    assert!(
        (mean - expected_mean).abs() < 0.01,
        "Mean log-return off: got {}, expected {}",
        mean,
        expected_mean
    );
    assert!(
        (variance - expected_variance).abs() / expected_variance < 0.05,
        "Variance of log-return off: got {}, expected {}",
        variance,
        expected_variance
    );
}

/// The batch mean at each step should track the lognormal expectation
/// E[S_k] = S_0 * exp(mu * k) to within Monte Carlo error.
#[test]
fn test_stepwise_mean_tracks_expectation() {
    let params = SimulationParameters {
        s0: 100.0,
        mu: 0.03,
        sigma: 0.15,
        steps: 5,
        paths: 200_000,
        base_seed: 7,
    };

    let batch = generate_paths(&params).expect("Valid parameters");

    for k in 0..params.steps {
        let mean: f64 = (0..batch.path_count())
            .map(|i| batch.path(i)[k])
            .sum::<f64>()
            / batch.path_count() as f64;
        let expected = params.s0 * (params.mu * (k + 1) as f64).exp();
        let rel_error = (mean - expected).abs() / expected;

        println!("step {}: mean {} expected {} rel_error {}", k + 1, mean, expected, rel_error);
        assert!(
            rel_error < 0.01,
            "Step {} mean off by more than 1%: {}",
            k + 1,
            rel_error
        );
    }
}
