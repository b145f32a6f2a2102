// src/models/gbm.rs
//! Geometric Brownian Motion Price Projection
//!
//! # Mathematical Framework
//!
//! GBM has the closed-form solution:
//! ```text
//! S_k = S_0 * exp((μ - σ²/2)·k + σ·W_k)
//! ```
//! where W_k is the cumulative Wiener value at step k. Projection is a pure
//! function of (parameters, step index, W_k): no per-step state is carried,
//! so any step of any path can be projected independently.
//!
//! With σ = 0 the diffusion term vanishes and the path collapses to the
//! deterministic exponential drift `S_0 * exp(μ·k)`.

/// GBM model parameters
#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Gbm { s0, mu, sigma }
    }

    /// Project the price at step k from the cumulative Wiener value W_k
    ///
    /// Valid for k ≥ 1; step 0 (the initial price itself) is never emitted.
    /// The result may be non-finite for extreme drift/diffusion combinations;
    /// the engine checks for that and aborts the batch.
    pub fn project(&self, step: usize, w: f64) -> f64 {
        let drift = (self.mu - 0.5 * self.sigma * self.sigma) * step as f64;
        let diffusion = self.sigma * w;
        self.s0 * (drift + diffusion).exp()
    }
}
