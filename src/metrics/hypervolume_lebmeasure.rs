use std::collections::VecDeque;

use log::debug;

use crate::core::DimensionalityError;
use crate::metrics::hypervolume::check_args;

static METRIC_NAME: &str = "LebMeasure Hyper-volume";

/// A point generated while the dominated region is decomposed, paired with its spawn dimension.
/// The spawn dimension is the exclusive upper bound of the axes the point may still split on:
/// the input points start at the full dimension count, while a spawn produced on axis `d`
/// carries `d + 1` and may split again on axes `0..=d` only.
#[derive(Debug, Clone)]
struct SpawnPoint {
    point: Vec<f64>,
    spawn_dim: usize,
}

/// Calculate the hyper-volume for any number of objectives with the LebMeasure algorithm by
/// [Fleischer (2003)](https://doi.org/10.1007/3-540-36970-8_37). The dominated region is
/// decomposed into non-overlapping hyper-rectangles: each point contributes the box between
/// itself and its opposite corner, and spawned points are queued to account for the region the
/// box leaves out. The worst-case number of spawns grows exponentially with the number of
/// objectives (see the analysis in While (2005), "A new analysis of the LebMeasure algorithm
/// for calculating hypervolume").
///
/// **IMPLEMENTATION NOTES**:
/// 1) All objectives are assumed to be minimised and the reference point must be dominated by
///    every point.
/// 2) Dominated points are detected during the decomposition and contribute nothing, so the
///    input does not need to be a non-dominated front.
/// 3) The cost grows sharply with both the point count and the number of objectives. This is
///    the general-purpose fallback; for two objectives prefer the `O(n log n)`
///    [`crate::metrics::HyperVolume2D`] sweep.
#[derive(Debug)]
pub struct HyperVolumeLebMeasure {
    /// The objective vectors of the points. Each nested vector holds the objective values of
    /// one point and must have as many coordinates as the reference point.
    points: Vec<Vec<f64>>,
    /// The reference point.
    reference_point: Vec<f64>,
}

impl HyperVolumeLebMeasure {
    /// Set up the hyper-volume calculation for a front with one or more objectives.
    ///
    /// # Arguments
    ///
    /// * `points`: The objective vectors to use in the calculation.
    /// * `reference_point`: The reference or anti-optimal point to use in the calculation. If
    ///   you are not sure about the point to use, you could pick the worst value of each
    ///   objective with [`crate::metrics::estimate_reference_point()`].
    ///
    /// returns: `Result<HyperVolumeLebMeasure, DimensionalityError>`
    pub fn new(points: &[Vec<f64>], reference_point: &[f64]) -> Result<Self, DimensionalityError> {
        check_args(points, reference_point)
            .map_err(|e| DimensionalityError::new(METRIC_NAME, e))?;

        debug!("Using points {:?}", points);
        debug!("Reference point is {:?}", reference_point);

        Ok(Self {
            points: points.to_vec(),
            reference_point: reference_point.to_vec(),
        })
    }

    /// Calculate the hyper-volume.
    ///
    /// return: `f64`
    pub fn compute(&self) -> f64 {
        let dimension = self.reference_point.len();

        // seed the work queue with the input points; every axis may still be split
        let mut queue: VecDeque<SpawnPoint> = self
            .points
            .iter()
            .map(|point| SpawnPoint {
                point: point.clone(),
                spawn_dim: dimension,
            })
            .collect();

        let mut hypervolume = 0.0;
        let mut processed: usize = 0;
        while let Some(SpawnPoint { point, spawn_dim }) = queue.pop_front() {
            processed += 1;
            // a covered point adds no volume; the covering point still in the queue accounts
            // for its whole region
            if Self::dominated(&point, &queue) {
                continue;
            }

            let opposite = self.opposite_point(&point, &queue);
            hypervolume += Self::volume_between(&point, &opposite);
            self.generate_spawns(&point, spawn_dim, &opposite, &mut queue);
        }
        debug!("Processed {} points to decompose the dominated region", processed);

        hypervolume
    }

    /// Check whether some queued point is at least as good as `point` on every axis. Equal
    /// coordinates count as covering, so duplicates produced by the spawning are processed
    /// once.
    ///
    /// # Arguments
    ///
    /// * `point`: The point to check.
    /// * `queue`: The queued points.
    ///
    /// returns: `bool`
    fn dominated(point: &[f64], queue: &VecDeque<SpawnPoint>) -> bool {
        queue
            .iter()
            .any(|other| other.point.iter().zip(point).all(|(o, p)| o <= p))
    }

    /// Find the opposite corner of the box exclusively dominated by `point`: on each axis, the
    /// nearest queued coordinate strictly beyond the point's own coordinate, clamped by the
    /// reference point.
    ///
    /// # Arguments
    ///
    /// * `point`: The point being processed.
    /// * `queue`: The queued points competing for the region dominated by `point`.
    ///
    /// returns: `Vec<f64>`
    fn opposite_point(&self, point: &[f64], queue: &VecDeque<SpawnPoint>) -> Vec<f64> {
        point
            .iter()
            .enumerate()
            .map(|(dim, coordinate)| {
                queue
                    .iter()
                    .map(|other| other.point[dim])
                    .filter(|value| value > coordinate)
                    .fold(self.reference_point[dim], f64::min)
            })
            .collect()
    }

    /// Calculate the volume of the hyper-rectangle between two corner points as the product of
    /// the absolute per-axis differences.
    ///
    /// # Arguments
    ///
    /// * `a`: The first corner.
    /// * `b`: The opposite corner.
    ///
    /// returns: `f64`
    fn volume_between(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(va, vb)| (va - vb).abs()).product()
    }

    /// Queue the spawns of `point`: one copy per splittable axis, with the coordinate on that
    /// axis moved to the opposite corner. A spawn is dropped when the move leaves no extent on
    /// the split axis (the opposite corner already touches the reference point) or when a
    /// queued point covers it.
    ///
    /// # Arguments
    ///
    /// * `point`: The point being processed.
    /// * `spawn_dim`: The exclusive upper bound of the axes `point` may split on.
    /// * `opposite`: The opposite corner of the box claimed by `point`.
    /// * `queue`: The work queue the surviving spawns are appended to.
    fn generate_spawns(
        &self,
        point: &[f64],
        spawn_dim: usize,
        opposite: &[f64],
        queue: &mut VecDeque<SpawnPoint>,
    ) {
        for dim in 0..spawn_dim {
            if opposite[dim] == self.reference_point[dim] {
                continue;
            }
            let mut spawn = point.to_vec();
            spawn[dim] = opposite[dim];
            if !Self::dominated(&spawn, queue) {
                queue.push_back(SpawnPoint {
                    point: spawn,
                    spawn_dim: dim + 1,
                });
            }
        }
    }
}
