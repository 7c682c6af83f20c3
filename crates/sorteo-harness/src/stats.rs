//! Goodness-of-fit helpers for uniformity tests.

/// Chi-square critical values at significance 0.001, indexed by degrees of
/// freedom minus one.
const CRITICAL_0_001: [f64; 12] = [
    10.828, 13.816, 16.266, 18.467, 20.515, 22.458, 24.322, 26.124, 27.877, 29.588, 31.264, 32.909,
];

/// Pearson's chi-square statistic of `counts` against a uniform expectation.
///
/// Returns 0 for empty input or when no observations were made.
pub fn chi_square_uniform(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let expected = total as f64 / counts.len() as f64;

    counts
        .iter()
        .map(|&observed| {
            #[allow(clippy::cast_precision_loss)]
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Critical value at significance 0.001 for `df` degrees of freedom.
///
/// `None` outside the tabulated range `1..=12`.
pub fn critical_value(df: usize) -> Option<f64> {
    df.checked_sub(1).and_then(|i| CRITICAL_0_001.get(i).copied())
}

/// True when `counts` is consistent with a uniform distribution at
/// significance 0.001.
///
/// Returns false when there are too few cells or too many to look up.
pub fn is_uniform(counts: &[u64]) -> bool {
    let df = counts.len().saturating_sub(1);
    critical_value(df).is_some_and(|critical| chi_square_uniform(counts) < critical)
}
