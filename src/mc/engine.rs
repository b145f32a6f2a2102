// src/mc/engine.rs
use crate::error::{validation::*, SimError, SimResult};
use crate::models::gbm::Gbm;
use crate::rng::SeedAllocator;
use crate::wiener::WienerAccumulator;
use rayon::prelude::*;

/// Inputs for one batch generation
///
/// Immutable once constructed; the engine borrows it and never mutates it.
#[derive(Debug, Clone)]
pub struct SimulationParameters {
    /// Initial price S_0 (> 0)
    pub s0: f64,
    /// Drift rate μ
    pub mu: f64,
    /// Volatility σ (≥ 0)
    pub sigma: f64,
    /// Steps per path N (≥ 1)
    pub steps: usize,
    /// Paths in the batch N_PATH (≥ 1)
    pub paths: usize,
    /// Base seed; path i draws from seed base_seed + i
    pub base_seed: u64,
}

impl SimulationParameters {
    /// Validate the simulation parameters
    ///
    /// Fail-fast: called before any path generation begins, so an invalid
    /// parameter set never produces a partial batch. Also pre-derives the
    /// last path's seed so seed overflow surfaces here rather than mid-batch.
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("s0", self.s0)?;
        validate_finite("mu", self.mu)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_steps(self.steps)?;
        validate_paths(self.paths)?;

        let allocator = SeedAllocator::new(self.base_seed);
        allocator.derive((self.paths - 1) as u64)?;

        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            s0: 100.0,
            mu: 0.05,
            sigma: 0.2,
            steps: 252,
            paths: 10_000,
            base_seed: 12345,
        }
    }
}

/// A completed batch of price paths, in path-index order
///
/// Row-major by path then step: row i holds the `steps` prices of path i for
/// steps 1..=N. The initial price S_0 is deliberately excluded from every row.
#[derive(Debug, Clone, PartialEq)]
pub struct PathBatch {
    paths: Vec<Vec<f64>>,
    steps: usize,
}

impl PathBatch {
    /// Number of paths in the batch
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of steps per path
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices of path `i` for steps 1..=N
    pub fn path(&self, i: usize) -> &[f64] {
        &self.paths[i]
    }

    /// All paths, row-major by path then step
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.paths
    }

    /// Consume the batch, handing ownership of the rows to the caller
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.paths
    }
}

/// Generate a batch of independent GBM price paths
///
/// # Algorithm
///
/// 1. Validate parameters (fail-fast; no partial batch on error)
/// 2. For each path index i, derive seed `base_seed + i` and reset a fresh
///    [`WienerAccumulator`] with it
/// 3. For each step k in 1..=N, pull the cumulative Wiener value W_k and
///    project `S_k = S_0 * exp((μ - σ²/2)·k + σ·W_k)`
///
/// Paths are generated in parallel with Rayon. Because every path's
/// randomness depends only on its own derived seed, the output is
/// bit-identical to sequential generation, and the ordered collect keeps
/// rows in path-index order regardless of worker completion order.
///
/// # Errors
///
/// Returns `SimError` for:
/// - Invalid parameters (`s0 ≤ 0`, `sigma < 0`, zero counts, non-finite inputs)
/// - Seed overflow (`base_seed + path_index` past `u64::MAX`)
/// - Non-finite projected prices, which abort the whole batch rather than
///   clamping or skipping the offending path
pub fn generate_paths(params: &SimulationParameters) -> SimResult<PathBatch> {
    params.validate()?;

    let allocator = SeedAllocator::new(params.base_seed);
    let model = Gbm::new(params.s0, params.mu, params.sigma);

    let paths: Vec<Vec<f64>> = (0..params.paths)
        .into_par_iter()
        .map(|i| {
            // Cannot fail after validate() pre-derived the last index
            let seed = allocator.derive(i as u64)?;
            let mut wiener = WienerAccumulator::new(seed);

            let mut prices = Vec::with_capacity(params.steps);
            for k in 1..=params.steps {
                let w = wiener.next_increment();
                let price = model.project(k, w);
                if !price.is_finite() {
                    return Err(SimError::NumericOverflow {
                        path_index: i,
                        step: k,
                        value: price,
                    });
                }
                prices.push(price);
            }
            Ok(prices)
        })
        .collect::<SimResult<Vec<_>>>()?;

    Ok(PathBatch {
        paths,
        steps: params.steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> SimulationParameters {
        SimulationParameters {
            s0: 100.0,
            mu: 0.05,
            sigma: 0.2,
            steps: 10,
            paths: 4,
            base_seed: 42,
        }
    }

    #[test]
    fn test_shape_invariant() {
        let batch = generate_paths(&small_params()).expect("Valid parameters");

        assert_eq!(batch.path_count(), 4);
        assert_eq!(batch.steps(), 10);
        for i in 0..batch.path_count() {
            assert_eq!(batch.path(i).len(), 10);
            assert!(batch.path(i).iter().all(|p| p.is_finite()));
        }
    }

    #[test]
    fn test_determinism() {
        let params = small_params();
        let a = generate_paths(&params).expect("Valid parameters");
        let b = generate_paths(&params).expect("Valid parameters");

        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut p = small_params();
        p.s0 = 0.0;
        assert!(matches!(
            generate_paths(&p),
            Err(SimError::InvalidParameter { .. })
        ));

        let mut p = small_params();
        p.sigma = -1.0;
        assert!(matches!(
            generate_paths(&p),
            Err(SimError::InvalidParameter { .. })
        ));

        let mut p = small_params();
        p.steps = 0;
        assert!(matches!(
            generate_paths(&p),
            Err(SimError::InvalidParameter { .. })
        ));

        let mut p = small_params();
        p.paths = 0;
        assert!(matches!(
            generate_paths(&p),
            Err(SimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_seed_overflow_fails_fast() {
        let mut p = small_params();
        p.base_seed = u64::MAX - 1;
        p.paths = 4;

        assert!(matches!(
            generate_paths(&p),
            Err(SimError::SeedOverflow { .. })
        ));
    }

    #[test]
    fn test_numeric_overflow_aborts_batch() {
        let mut p = small_params();
        p.mu = 1e6;
        p.steps = 1000;

        assert!(matches!(
            generate_paths(&p),
            Err(SimError::NumericOverflow { .. })
        ));
    }
}
