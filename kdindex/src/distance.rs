use std::cmp::Ordering;

/// SQUARED EUCLIDEAN DISTANCE
///
/// Sum of squared component differences over the shared prefix of both vectors, so a
/// shorter query is compared only on the dimensions it carries. The square root is never
/// taken: ordering by squared distance is the same as ordering by distance, and the
/// splitting plane bound used while pruning is squared as well.
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Whether `point` lies inside the closed box `[lower, upper]` on every dimension shared by
/// the three vectors.
pub fn within_bounds(point: &[f64], lower: &[f64], upper: &[f64]) -> bool {
    point
        .iter()
        .zip(lower.iter().zip(upper.iter()))
        .all(|(c, (lo, hi))| lo <= c && c <= hi)
}

/// Exact coordinate equality: same length and every component equal under
/// [`f64::total_cmp`]. No epsilon is applied, `NaN` matches `NaN` and `0.0` does not
/// match `-0.0`.
pub fn same_point(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| x.total_cmp(y) == Ordering::Equal)
}
