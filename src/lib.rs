//! Unsupervised clustering of real vectors into `k` groups.
//!
//! Two engines share the same primitives and the same return shape:
//!
//! - [`KMeans`] — Lloyd iteration over centroids under any [`Metric`]
//! - [`Gaussian`] — Classification EM over a diagonal Gaussian [`Mixture`]
//!
//! ## Primitives
//!
//! - [`Vector`] / [`Point`] — coordinates plus opaque caller metadata
//! - [`Distance`] / [`Registry`] — named distance metrics
//! - [`mean`], [`variance`], [`combine`], `std` — coordinate-wise statistics
//! - [`nearest`] — first-minimum linear scan
//!
//! ## Determinism
//!
//! Both engines take an injected random source. Seed it (e.g.
//! `SmallRng::seed_from_u64`) for reproducible runs; initial centers are
//! sampled over the points in canonical order, so shuffling the input does
//! not change the outcome under a fixed seed.
//!
//! ## Observability
//!
//! Engines report [`Event`]s to an [`Observer`]. Use [`Logger`] to forward
//! them through the `log` facade, `()` to discard them, or a closure.
pub mod distance;
pub use distance::*;

pub mod em;
pub use em::*;

pub mod error;
pub use error::*;

pub mod gaussian;
pub use gaussian::*;

pub mod kmeans;
pub use kmeans::*;

pub mod nearest;
pub use nearest::*;

pub mod point;
pub use point::*;

pub mod policy;
pub use policy::*;

pub mod progress;
pub use progress::*;

pub mod seed;
pub use seed::*;

pub mod settings;
pub use settings::*;

pub mod solution;
pub use solution::*;

pub mod stats;
pub use stats::*;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod tests;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single coordinate of a vector.
pub type Coordinate = f64;
/// Distances, center shifts, and convergence deltas.
pub type Energy = f64;
/// Mixture weights and densities.
pub type Probability = f64;

// ============================================================================
// DEFAULT RUN PARAMETERS
// ============================================================================
/// Number of clusters when the caller does not choose one.
pub const DEFAULT_K: usize = 2;
/// Convergence threshold on center movement between iterations.
pub const DEFAULT_EPSILON: Energy = 0.001;
/// Iteration budget before giving up on convergence.
pub const DEFAULT_ITERATIONS: usize = 1000;
/// Largest accepted coordinate magnitude.
/// Squared differences between accepted coordinates stay finite.
pub const COORDINATE_LIMIT: Coordinate = 1e150;

// ============================================================================
// GAUSSIAN MIXTURE
// ============================================================================
/// Lower bound on any per-dimension variance.
/// Keeps a component of identical points at a finite density.
pub const VARIANCE_FLOOR: Coordinate = 1e-9;
/// Variance assigned to every dimension of a freshly seeded component.
pub const VARIANCE_UNIT: Coordinate = 1.0;

