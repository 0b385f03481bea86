use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Get the random number generator. If no seed is provided, this is randomly generated.
///
/// # Arguments
///
/// * `seed`: The optional seed number.
///
/// returns: `Box<dyn RngCore>`
pub(crate) fn get_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    let rng = match seed {
        None => ChaCha8Rng::from_seed(Default::default()),
        Some(s) => ChaCha8Rng::seed_from_u64(s),
    };
    Box::new(rng)
}

/// Build a random two-objective non-dominated front with `size` points by pairing ascending
/// first coordinates with descending second coordinates, and a reference point dominated by
/// the whole front.
///
/// # Arguments
///
/// * `rng`: The random number generator.
/// * `size`: The number of points in the front.
///
/// returns: `(Vec<Vec<f64>>, Vec<f64>)` The front and the reference point.
pub(crate) fn random_front_2d(rng: &mut dyn RngCore, size: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut obj1: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..10.0)).collect();
    let mut obj2: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..10.0)).collect();
    obj1.sort_by(|a, b| a.total_cmp(b));
    obj2.sort_by(|a, b| b.total_cmp(a));

    let points = obj1
        .into_iter()
        .zip(obj2)
        .map(|(v1, v2)| vec![v1, v2])
        .collect();
    (points, vec![11.0, 11.0])
}

/// Build a random point set with coordinates in `[0, 1)`. The points may dominate each other.
///
/// # Arguments
///
/// * `rng`: The random number generator.
/// * `size`: The number of points.
/// * `dimension`: The number of coordinates of each point.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn random_points(rng: &mut dyn RngCore, size: usize, dimension: usize) -> Vec<Vec<f64>> {
    (0..size)
        .map(|_| (0..dimension).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect()
}

/// Calculate the hyper-volume with the inclusion-exclusion principle over every non-empty
/// subset of points. The cost is `O(2^n)`, so this is only usable as a test oracle for small
/// point sets.
///
/// # Arguments
///
/// * `points`: The objective vectors. All coordinates must be dominated by the reference point.
/// * `reference_point`: The reference point.
///
/// returns: `f64`
pub(crate) fn hyper_volume_by_inclusion_exclusion(
    points: &[Vec<f64>],
    reference_point: &[f64],
) -> f64 {
    let mut hypervolume = 0.0;
    for subset in 1_u32..(1 << points.len()) {
        let mut volume = 1.0;
        for (dim, ref_coordinate) in reference_point.iter().enumerate() {
            let corner = points
                .iter()
                .enumerate()
                .filter(|(idx, _)| subset & (1 << idx) != 0)
                .map(|(_, point)| point[dim])
                .fold(f64::NEG_INFINITY, f64::max);
            volume *= (ref_coordinate - corner).max(0.0);
        }
        if subset.count_ones() % 2 == 1 {
            hypervolume += volume;
        } else {
            hypervolume -= volume;
        }
    }
    hypervolume
}

#[cfg(test)]
mod test {
    use crate::metrics::test_utils::{get_rng, hyper_volume_by_inclusion_exclusion, random_front_2d};

    #[test]
    /// The generated front must be mutually non-dominated
    fn test_random_front_2d() {
        let mut rng = get_rng(Some(1));
        let (points, reference_point) = random_front_2d(&mut rng, 10);
        assert_eq!(points.len(), 10);

        for (i, a) in points.iter().enumerate() {
            assert!(a[0] < reference_point[0] && a[1] < reference_point[1]);
            for b in points.iter().skip(i + 1) {
                // ascending first coordinate, descending second coordinate
                assert!(a[0] <= b[0] && a[1] >= b[1]);
            }
        }
    }

    #[test]
    /// The oracle on two overlapping boxes subtracts the shared region once
    fn test_inclusion_exclusion() {
        let points = vec![vec![0.2, 0.6], vec![0.5, 0.1]];
        let calculated = hyper_volume_by_inclusion_exclusion(&points, &[1.0, 1.0]);
        // 0.8 * 0.4 + 0.5 * 0.9 - 0.5 * 0.4
        let expected = 0.57;
        assert!((calculated - expected).abs() < 1e-12);
    }
}
