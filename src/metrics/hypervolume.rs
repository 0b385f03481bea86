use crate::core::DimensionalityError;
use crate::metrics::{HyperVolume2D, HyperVolumeLebMeasure};

/// Check the input arguments of the hyper-volume algorithms.
///
/// # Arguments
///
/// * `points`: The objective vectors to use in the calculation.
/// * `reference_point`: The reference or anti-optimal point to use in the calculation.
///
/// returns: `Result<(), String>`
pub(crate) fn check_args(points: &[Vec<f64>], reference_point: &[f64]) -> Result<(), String> {
    if reference_point.is_empty() {
        return Err("The reference point must have at least one coordinate".to_string());
    }
    for (idx, point) in points.iter().enumerate() {
        if point.len() != reference_point.len() {
            return Err(format!(
                "The number of coordinates of point #{} ({}) must match the number of coordinates of the reference point ({})",
                idx + 1,
                point.len(),
                reference_point.len()
            ));
        }
    }
    Ok(())
}

/// Calculate the exact hyper-volume metric for a set of objective vectors. Depending on the
/// number of coordinates of the reference point, a different method is used to ensure a correct
/// and fast calculation:
///
/// - with `2` coordinates: by calculating the areas of the rectangles between the sorted front
///   and the reference point in [`HyperVolume2D`]. The points must then form a non-dominated
///   front (see the notes on [`HyperVolume2D`]).
/// - with any other number of coordinates: by decomposing the dominated region into
///   non-overlapping boxes with the LebMeasure algorithm in [`HyperVolumeLebMeasure`].
///
/// All objectives are assumed to be minimised and the reference point must be dominated by
/// every point. If you are not sure about the point to use, you could pick the worst value of
/// each objective with [`estimate_reference_point`].
///
/// # Arguments
///
/// * `points`: The objective vectors to use in the calculation. All points must have as many
///   coordinates as the reference point.
/// * `reference_point`: The reference or anti-optimal point to use in the calculation.
///
/// returns: `Result<f64, DimensionalityError>`
pub fn hyper_volume(
    points: &[Vec<f64>],
    reference_point: &[f64],
) -> Result<f64, DimensionalityError> {
    if reference_point.len() == 2 {
        let hv = HyperVolume2D::new(points, reference_point)?;
        Ok(hv.compute())
    } else {
        let hv = HyperVolumeLebMeasure::new(points, reference_point)?;
        Ok(hv.compute())
    }
}

/// Calculate a reference point by taking the maximum of each objective from the given points,
/// so that the returned point is dominated by all of them. An optional offset for each
/// objective can be added to enforce strict dominance.
///
/// # Arguments
///
/// * `points`: The objective vectors to use in the calculation.
/// * `offset`: The offset to add to each coordinate of the calculated reference point. When
///   given, this must have as many items as the point coordinates.
///
/// returns: `Result<Vec<f64>, DimensionalityError>` The reference point. This returns an error
/// if there are no points, if the points do not share one dimension or if the offset size does
/// not match the number of point coordinates.
pub fn estimate_reference_point(
    points: &[Vec<f64>],
    offset: Option<Vec<f64>>,
) -> Result<Vec<f64>, DimensionalityError> {
    let metric_name = "reference_point";
    let number_of_objectives = match points.first() {
        None => {
            return Err(DimensionalityError::new(
                metric_name,
                "There are no points in the array".to_string(),
            ))
        }
        Some(first) => first.len(),
    };
    if number_of_objectives == 0 {
        return Err(DimensionalityError::new(
            metric_name,
            "The points must have at least one coordinate".to_string(),
        ));
    }
    for (idx, point) in points.iter().enumerate() {
        if point.len() != number_of_objectives {
            return Err(DimensionalityError::new(
                metric_name,
                format!(
                    "The number of coordinates of point #{} ({}) must match the number of coordinates of the other points ({})",
                    idx + 1,
                    point.len(),
                    number_of_objectives
                ),
            ));
        }
    }

    if let Some(ref offset) = offset {
        if offset.len() != number_of_objectives {
            return Err(DimensionalityError::new(
                metric_name,
                format!(
                    "The offset size ({}) must match the number of point coordinates ({})",
                    offset.len(),
                    number_of_objectives
                ),
            ));
        }
    }

    let mut ref_point: Vec<f64> = Vec::with_capacity(number_of_objectives);
    for obj_idx in 0..number_of_objectives {
        let coordinate = points
            .iter()
            .map(|point| point[obj_idx])
            .fold(f64::NEG_INFINITY, f64::max);
        ref_point.push(coordinate);
    }

    // add the offset
    if let Some(offset) = offset {
        for (idx, value) in offset.iter().enumerate() {
            ref_point[idx] += value;
        }
    }

    Ok(ref_point)
}
