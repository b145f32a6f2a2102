// src/rng.rs
//! Seed Allocation and Random Number Generation
//!
//! # Design Philosophy
//!
//! Monte Carlo path generation requires random numbers with specific properties:
//! 1. **Reproducibility**: Same seed → same batch (critical for debugging/validation)
//! 2. **Parallel safety**: Different paths must have independent streams
//! 3. **Statistical quality**: Good distributional properties
//!
//! # Per-Path Seeding
//!
//! Each path gets its own seed, derived deterministically from the batch's
//! base seed and the path index:
//! ```text
//! path_seed = base_seed + path_index
//! ```
//! The derivation is checked: if the sum would wrap past `u64::MAX`, the
//! allocator reports [`SimError::SeedOverflow`] instead of silently aliasing
//! two paths onto the same stream.
//!
//! A fresh `StdRng` is constructed from the derived seed for every path, so
//! no generator state is ever shared or reseeded in place.

use crate::error::{SimError, SimResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Allocates per-path seeds and RNG instances for one batch
///
/// # Thread Safety
///
/// The allocator itself is immutable and freely shareable across workers;
/// every call hands back an independent value. Each path owns the `StdRng`
/// built from its derived seed for the path's entire lifetime.
#[derive(Debug, Clone, Copy)]
pub struct SeedAllocator {
    base_seed: u64,
}

impl SeedAllocator {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Derive the seed for a specific path index
    ///
    /// Pure and deterministic: `base_seed + path_index`, failing with
    /// `SeedOverflow` rather than wrapping.
    pub fn derive(&self, path_index: u64) -> SimResult<u64> {
        self.base_seed
            .checked_add(path_index)
            .ok_or(SimError::SeedOverflow {
                base_seed: self.base_seed,
                path_index,
            })
    }

    /// Construct a fresh, exclusively owned RNG for a specific path
    pub fn create_path_rng(&self, path_index: u64) -> SimResult<StdRng> {
        Ok(StdRng::seed_from_u64(self.derive(path_index)?))
    }
}

/// Draw one standard-normal variate (mean 0, variance 1)
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
