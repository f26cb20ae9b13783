// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the most recent `window` values.  The output is aligned
// 1:1 with the input: the first `window - 1` cells are `None` because the
// window has not filled yet.
//
// A series shorter than the window is not an error — the whole column is
// simply `None`.
// =============================================================================

/// Compute the rolling arithmetic mean of `values` over `window` points.
///
/// The returned vector has the same length as `values`.  Cell `i` holds the
/// mean of `values[i - window + 1 ..= i]` once `i >= window - 1`, and `None`
/// before that.
///
/// Window lengths must be positive; this is a caller contract.  A zero window
/// yields an all-`None` column rather than a panic.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    // Running-sum formulation: add the incoming value, drop the one that
    // left the window.
    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = Some(sum / window as f64);

    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out[i] = Some(sum / window as f64);
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(rolling_mean(&[], 5).is_empty());
    }

    #[test]
    fn window_zero_is_all_none() {
        let out = rolling_mean(&[1.0, 2.0, 3.0], 0);
        assert_eq!(out, vec![None, None, None]);
    }

    #[test]
    fn series_shorter_than_window_is_all_none() {
        let out = rolling_mean(&[1.0, 2.0, 3.0], 5);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn undefined_prefix_has_window_minus_one_cells() {
        // Property: exactly w-1 leading None entries, then n-w+1 defined ones.
        let values: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        for window in 1..=10 {
            let out = rolling_mean(&values, window);
            assert_eq!(out.len(), values.len());
            assert!(out[..window - 1].iter().all(Option::is_none));
            assert!(out[window - 1..].iter().all(Option::is_some));
        }
    }

    #[test]
    fn window_one_is_identity() {
        let values = vec![3.5, -1.0, 7.25];
        let out = rolling_mean(&values, 1);
        for (cell, v) in out.iter().zip(&values) {
            assert_eq!(*cell, Some(*v));
        }
    }

    #[test]
    fn known_means() {
        // Means of [1..5] over window 3: _, _, 2, 3, 4
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert!((out[2].unwrap() - 2.0).abs() < 1e-12);
        assert!((out[3].unwrap() - 3.0).abs() < 1e-12);
        assert!((out[4].unwrap() - 4.0).abs() < 1e-12);
    }
}
