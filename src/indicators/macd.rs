// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD_i        = EMA(close, short_span)_i - EMA(close, long_span)_i
// signal_line_i = EMA(MACD, signal_span)_i
//
// Both columns inherit the EMA's seeded-recurrence property: they are defined
// at every index, including index 0 where MACD is exactly
// close_0 - close_0 = 0.
// =============================================================================

use super::ema::ema;

/// Compute the MACD line and its signal line over `closes`.
///
/// Returns `(macd, signal_line)`, each the same length as the input and
/// defined at every index.  Default spans are 12 / 26 / 9.
pub fn macd(
    closes: &[f64],
    short_span: usize,
    long_span: usize,
    signal_span: usize,
) -> (Vec<f64>, Vec<f64>) {
    let short_ema = ema(closes, short_span);
    let long_ema = ema(closes, long_span);

    let macd_line: Vec<f64> = short_ema
        .iter()
        .zip(&long_ema)
        .map(|(s, l)| s - l)
        .collect();

    let signal_line = ema(&macd_line, signal_span);

    (macd_line, signal_line)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let (m, s) = macd(&[], 12, 26, 9);
        assert!(m.is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn defined_from_index_zero() {
        let closes: Vec<f64> = (1..=40).map(|x| x as f64).collect();
        let (m, s) = macd(&closes, 12, 26, 9);
        assert_eq!(m.len(), closes.len());
        assert_eq!(s.len(), closes.len());
        // Both EMAs are seeded with close_0, so the first MACD value is 0.
        assert!(m[0].abs() < 1e-12);
        assert!(s[0].abs() < 1e-12);
    }

    #[test]
    fn constant_series_is_flat_zero() {
        let (m, s) = macd(&[50.0; 60], 12, 26, 9);
        for (a, b) in m.iter().zip(&s) {
            assert!(a.abs() < 1e-12);
            assert!(b.abs() < 1e-12);
        }
    }

    #[test]
    fn rising_series_has_positive_macd() {
        // In a steady uptrend the short EMA tracks price more closely than
        // the long EMA, so MACD turns and stays positive.
        let closes: Vec<f64> = (1..=60).map(|x| x as f64).collect();
        let (m, _) = macd(&closes, 12, 26, 9);
        assert!(m.last().unwrap() > &0.0);
    }

    #[test]
    fn known_values_small_spans() {
        // spans 2/4 => alphas 2/3 and 2/5.  x = [1, 2, 3].
        // short: [1, 5/3, 23/9]    long: [1, 7/5, 51/25]
        let (m, _) = macd(&[1.0, 2.0, 3.0], 2, 4, 3);
        assert!((m[0] - 0.0).abs() < 1e-12);
        assert!((m[1] - (5.0 / 3.0 - 7.0 / 5.0)).abs() < 1e-12);
        assert!((m[2] - (23.0 / 9.0 - 51.0 / 25.0)).abs() < 1e-12);
    }
}
