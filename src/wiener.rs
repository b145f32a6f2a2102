// src/wiener.rs
//! Path-Scoped Wiener Process Accumulation
//!
//! # Mathematical Framework
//!
//! A discretized Wiener process is the running sum of independent
//! standard-normal increments:
//! ```text
//! W_k = Z_1 + Z_2 + ... + Z_k,   Z_i ~ N(0, 1)
//! ```
//!
//! The accumulator owns one exclusively seeded random source and one running
//! sum; both are scoped to a single path. Resetting with a new seed discards
//! all previous state, so two accumulators (or one reset accumulator) can
//! never observe or perturb each other's stream.
//!
//! # Note on Scaling
//!
//! The increments are raw unit-variance normals. A conventional
//! Euler-Maruyama discretization over a horizon T with N steps would scale
//! each increment by √Δt = √(T/N); this accumulator deliberately does not,
//! matching the projection in [`crate::models::gbm`] which advances the
//! drift term by whole steps k rather than by k·Δt.

use crate::rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Running cumulative sum of standard-normal draws for one path
#[derive(Debug, Clone)]
pub struct WienerAccumulator {
    rng: StdRng,
    w: f64,
}

impl WienerAccumulator {
    /// Create an accumulator with a fresh path-local source and W = 0
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            w: 0.0,
        }
    }

    /// Reseed the path-local source and zero the cumulative sum
    ///
    /// The previous stream is unrecoverable after a reset; a path's draws
    /// can only be reproduced by resetting with the same seed.
    pub fn reset(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.w = 0.0;
    }

    /// Draw one N(0,1) increment, fold it into the sum, return the new sum
    pub fn next_increment(&mut self) -> f64 {
        self.w += rng::get_normal_draw(&mut self.rng);
        self.w
    }

    /// Current cumulative value W without advancing the stream
    pub fn level(&self) -> f64 {
        self.w
    }
}
