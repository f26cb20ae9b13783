// =============================================================================
// Relative Strength Index (RSI)
// =============================================================================
//
// RSI measures the balance of recent gains against recent losses on a
// bounded [0, 100] scale.
//
// Step 1 — delta_i = close_i - close_{i-1}  (undefined at i = 0).
// Step 2 — partition: gain_i = max(delta_i, 0), loss_i = max(-delta_i, 0).
// Step 3 — avg_gain / avg_loss = simple rolling mean of gain / loss over
//          `window` deltas.
// Step 4 — RS = avg_gain / avg_loss,  RSI = 100 - 100 / (1 + RS).
//
// Because the first delta exists only at index 1, cell `i` is defined once
// `i >= window`.
//
// Numeric edge cases (both must hold, never producing NaN or a panic):
//   * avg_loss = 0, avg_gain > 0  =>  RS is infinite, RSI saturates to 100.
//   * avg_loss = 0, avg_gain = 0  =>  0/0 is indeterminate, the cell is
//     undefined (`None`), not an arbitrary number.
// =============================================================================

/// Compute the RSI column for `closes` over `window` deltas.
///
/// The returned vector is aligned 1:1 with `closes`; the leading `window`
/// cells are `None`.  A series too short to fill the window yields an
/// all-`None` column.  Defined values always lie in [0, 100].
pub fn rsi(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if window == 0 || n < window + 1 {
        return out;
    }

    // gains[i] / losses[i] correspond to the delta ending at close i.
    // Index 0 has no delta; it is never read below.
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    // Rolling sums over the last `window` deltas, i.e. indices
    // (i - window + 1)..=i, all of which are >= 1 once i >= window.
    let mut gain_sum: f64 = gains[1..=window].iter().sum();
    let mut loss_sum: f64 = losses[1..=window].iter().sum();
    out[window] = rsi_from_averages(gain_sum / window as f64, loss_sum / window as f64);

    for i in window + 1..n {
        gain_sum += gains[i] - gains[i - window];
        loss_sum += losses[i] - losses[i - window];
        out[i] = rsi_from_averages(gain_sum / window as f64, loss_sum / window as f64);
    }

    out
}

/// Convert an average gain / average loss pair into an RSI value.
///
/// Returns `None` for the indeterminate 0/0 case; saturates to 100.0 when
/// there are gains but no losses.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            // Flat window: 0/0 has no meaningful value.
            return None;
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_input() {
        assert!(rsi(&[], 14).is_empty());
    }

    #[test]
    fn insufficient_data_is_all_none() {
        // 14 closes => 13 deltas, not enough to fill a 14-delta window.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        let out = rsi(&closes, 14);
        assert_eq!(out.len(), 14);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn leading_window_cells_undefined() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = rsi(&closes, 14);
        assert!(out[..14].iter().all(Option::is_none));
        assert!(out[14..].iter().all(Option::is_some));
    }

    #[test]
    fn monotone_increase_saturates_to_100() {
        // Strictly rising closes: no losses in any window, so RSI pins at
        // 100 from the first defined cell onward.
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = rsi(&closes, 14);
        for cell in &out[14..] {
            let v = cell.unwrap();
            assert!((v - 100.0).abs() < EPS, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn constant_series_is_undefined_after_warmup() {
        // avg_gain = avg_loss = 0 => indeterminate, must stay None — and
        // must not panic or leak a NaN.
        let out = rsi(&[100.0; 30], 14);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn defined_values_bounded() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        for cell in rsi(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&cell), "RSI {cell} out of range");
        }
    }

    #[test]
    fn worked_example_window_3() {
        // close deltas: +1 +1 -1 -1 -1 +1 +1 +1 +1 +1
        // Hand-computed 3-delta averages:
        //   i=3: gain 2/3, loss 1/3 => RS 2   => RSI 66.666...
        //   i=4: gain 1/3, loss 2/3 => RS 0.5 => RSI 33.333...
        //   i=5: gain 0,   loss 1   => RS 0   => RSI 0
        //   i=6: gain 1/3, loss 2/3 =>           RSI 33.333...
        //   i=7: gain 2/3, loss 1/3 =>           RSI 66.666...
        //   i=8..10: loss 0, gain > 0          => RSI 100 (saturated)
        let closes = [10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0];
        let out = rsi(&closes, 3);

        assert!(out[..3].iter().all(Option::is_none));

        let expected = [
            200.0 / 3.0,
            100.0 / 3.0,
            0.0,
            100.0 / 3.0,
            200.0 / 3.0,
            100.0,
            100.0,
            100.0,
        ];
        for (i, want) in expected.iter().enumerate() {
            let got = out[i + 3].unwrap();
            assert!((got - want).abs() < EPS, "index {}: got {got}, want {want}", i + 3);
        }
    }
}
