//! Roulette-wheel building blocks used by `Population::selection`.

/// Running sum of the fitness-proportional densities `f_i / sum`.
///
/// Returns `None` when any fitness is negative or not finite, or when the
/// total is zero, in which case no proportional wheel exists. Otherwise the
/// result is non-decreasing.
pub fn cumulative_distribution(fitness: &[f64]) -> Option<Vec<f64>> {
    if fitness.iter().any(|&f| !(f >= 0.0 && f.is_finite())) {
        return None;
    }

    let sum: f64 = fitness.iter().sum();

    if !(sum > 0.0 && sum.is_finite()) {
        return None;
    }

    let cdf = fitness
        .iter()
        .scan(0.0, |cumulative, &f| {
            *cumulative += f / sum;
            Some(*cumulative)
        })
        .collect();

    Some(cdf)
}

/// Index of the first bucket whose cumulative probability is strictly greater
/// than `sample`. Rounding can leave the last entry slightly below 1, so the
/// result is clamped to the last index.
pub fn roulette_index(cdf: &[f64], sample: f64) -> usize {
    cdf.partition_point(|&p| p <= sample)
        .min(cdf.len().saturating_sub(1))
}
