/// Subtracts the row maximum from every score so the largest becomes 0.
///
/// Softmax is invariant under adding a constant to all logits, so this only
/// keeps `exp()` from overflowing.
pub fn shift_by_max(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    scores.iter().map(|s| s - max).collect()
}

/// Numerically stable softmax of a single score row:
///   p_j = exp(s_j - max(s)) / Σ_k exp(s_k - max(s))
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let exp_scores: Vec<f64> = shift_by_max(scores).into_iter().map(f64::exp).collect();
    let sum: f64 = exp_scores.iter().sum();
    exp_scores.into_iter().map(|e| e / sum).collect()
}

/// Cross-entropy of one example given its raw scores: -ln(p_label).
///
/// Panics if `label >= scores.len()`.
pub fn softmax_cross_entropy(scores: &[f64], label: usize) -> f64 {
    -softmax(scores)[label].ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn probabilities_sum_to_one() {
        let p = softmax(&[2.0, -1.0, 0.5, 3.0]);
        assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(p.iter().all(|&x| x > 0.0));
    }

    #[test]
    fn large_logits_do_not_overflow() {
        let p = softmax(&[1000.0, 999.0]);
        assert!(p.iter().all(|x| x.is_finite()));
        assert_abs_diff_eq!(p[0], 1.0 / (1.0 + (-1.0f64).exp()), epsilon = 1e-12);
    }

    #[test]
    fn shift_makes_largest_zero() {
        let shifted = shift_by_max(&[3.0, 7.0, -2.0]);
        assert_eq!(shifted, vec![-4.0, 0.0, -9.0]);
    }

    #[test]
    fn cross_entropy_of_uniform_scores_is_ln_c() {
        assert_abs_diff_eq!(softmax_cross_entropy(&[0.0; 4], 2), 4.0f64.ln(), epsilon = 1e-12);
    }
}
