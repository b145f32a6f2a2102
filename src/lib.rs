//! # gbm-paths: Reproducible Monte Carlo Path Generation
//!
//! A Rust library for generating batches of synthetic asset-price trajectories
//! under a geometric Brownian motion (GBM) model.
//!
//! ## Key Features
//!
//! - **Reproducible**: Same base seed → bit-identical batch, run after run
//! - **Parallel**: Paths generated concurrently with Rayon, output in path-index order
//! - **Independent Paths**: Each path owns its own seeded random source; no shared state
//! - **Fail-Fast Validation**: Bad parameters are rejected before any simulation work
//! - **Explicit Errors**: Seed overflow and non-finite prices abort the batch, never wrap or clamp
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_paths::mc::engine::{generate_paths, SimulationParameters};
//!
//! let params = SimulationParameters {
//!     s0: 100.0,      // Initial price
//!     mu: 0.05,       // Drift rate
//!     sigma: 0.2,     // Volatility
//!     steps: 252,     // Steps per path
//!     paths: 10_000,  // Paths in the batch
//!     base_seed: 42,
//! };
//!
//! let batch = generate_paths(&params).expect("Valid parameters");
//! assert_eq!(batch.path_count(), 10_000);
//! assert_eq!(batch.steps(), 252);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Each path accumulates a discretized Wiener process W_k as a running sum of
//! independent standard-normal draws, and projects a price at every step:
//!
//! ```text
//! S_k = S_0 * exp((μ - σ²/2)·k + σ·W_k),   k = 1..N
//! ```
//!
//! The initial price S_0 is deliberately excluded from the output sequence.
//! Note that the Wiener increments are raw unit-variance normals, not scaled
//! by √Δt; see the `wiener` module documentation.

// Module declarations
pub mod error;
pub mod rng;
pub mod wiener;
pub mod math_utils;
pub mod models;
pub mod mc;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
pub use mc::engine::{generate_paths, PathBatch, SimulationParameters};
