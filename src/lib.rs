//! Exact hyper-volume indicator (or S-metric) calculations for Pareto fronts produced by
//! multi-objective optimisation algorithms. The hyper-volume is the Lebesgue measure of the
//! region dominated by a set of objective vectors and bounded by a reference point, and is a
//! common scalar metric to rank the quality of a front.
//!
//! Two interchangeable algorithms are available in the [`metrics`] module:
//! - [`metrics::HyperVolume2D`]: an `O(n log n)` sort-and-sweep method for two-objective
//!   fronts;
//! - [`metrics::HyperVolumeLebMeasure`]: a recursive box decomposition that handles any number
//!   of objectives.
//!
//! [`metrics::hyper_volume()`] picks the right algorithm based on the reference point size.
//!
//! All objectives are assumed to be minimised and the reference point (for example a nadir
//! point estimated with [`metrics::estimate_reference_point()`]) must be dominated by every
//! point.
//!
//! # Example
//! ```
//! use hypervolume::metrics::HyperVolume2D;
//!
//! let front = vec![vec![1.0, 5.0], vec![3.0, 2.0]];
//! let hv = HyperVolume2D::new(&front, &[6.0, 6.0]).unwrap();
//! assert_eq!(hv.compute(), 14.0);
//! ```

pub mod core;
pub mod metrics;
