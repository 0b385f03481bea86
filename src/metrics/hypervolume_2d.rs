use log::debug;

use crate::core::DimensionalityError;
use crate::metrics::hypervolume::check_args;

static METRIC_NAME: &str = "2D Hyper-volume";

/// Calculate the hyper-volume for a two-objective front by summing the areas of the rectangles
/// between the Pareto front and the chosen reference point. The front is swept in ascending
/// order of the first objective, so the dominated region splits into non-overlapping rectangles
/// and the calculation runs in `O(n log n)`.
#[derive(Debug)]
pub struct HyperVolume2D {
    /// The objective vectors of the front. Each nested vector holds the two objective values of
    /// one point.
    points: Vec<Vec<f64>>,
    /// The reference point.
    reference_point: Vec<f64>,
}

impl HyperVolume2D {
    /// Set up the hyper-volume calculation for a two-objective front.
    ///
    /// **IMPLEMENTATION NOTES**:
    /// 1) Both objectives are assumed to be minimised and the reference point must be dominated
    ///    by every point.
    /// 2) The points must already form a non-dominated front. Dominated points are not removed
    ///    and would corrupt the sweep; filtering is the caller's responsibility. Use
    ///    [`crate::metrics::HyperVolumeLebMeasure`] when the input may contain dominated points.
    /// 3) With no points, a zero hyper-volume is returned.
    ///
    /// # Arguments
    ///
    /// * `points`: The objective vectors of the front. Each point must have two coordinates.
    /// * `reference_point`: The reference or anti-optimal point to use in the calculation. If
    ///   you are not sure about the point to use, you could pick the worst value of each
    ///   objective with [`crate::metrics::estimate_reference_point()`].
    ///
    /// returns: `Result<HyperVolume2D, DimensionalityError>`
    pub fn new(points: &[Vec<f64>], reference_point: &[f64]) -> Result<Self, DimensionalityError> {
        if reference_point.len() != 2 {
            return Err(DimensionalityError::new(
                METRIC_NAME,
                "This can only be used on a 2-objective problem.".to_string(),
            ));
        }
        check_args(points, reference_point)
            .map_err(|e| DimensionalityError::new(METRIC_NAME, e))?;

        debug!("Using front {:?}", points);
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
        // no points in the front
        if self.points.is_empty() {
            return 0.0;
        }

        // sort a copy of the front in ascending order by the first objective
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));

        // rectangles spanning the gap between consecutive points on the first axis, bounded by
        // the reference point's second coordinate
        let mut hypervolume: f64 = sorted
            .windows(2)
            .map(|pair| f64::abs((pair[0][0] - pair[1][0]) * (pair[0][1] - self.reference_point[1])))
            .sum();

        // final rectangle between the point with the largest first coordinate and the reference
        // point on both axes
        let last = &sorted[sorted.len() - 1];
        hypervolume += f64::abs(
            (self.reference_point[0] - last[0]) * (self.reference_point[1] - last[1]),
        );

        hypervolume
    }
}
