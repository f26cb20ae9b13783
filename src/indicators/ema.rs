// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives exponentially decreasing weight to older observations:
//
//   alpha  = 2 / (span + 1)
//   ema_0  = x_0
//   ema_t  = x_t * alpha + ema_{t-1} * (1 - alpha)
//
// The recurrence is seeded at the first data point, so the output has NO
// undefined prefix: every index is defined, including index 0.  Early values
// are low-confidence (little history behind them) but that is accepted
// behavior for the MACD family of columns and must not be "fixed" by
// retrofitting an undefined prefix.
// =============================================================================

/// Compute the EMA series of `values` with smoothing span `span`.
///
/// The returned vector has the same length as the input and is defined at
/// every index.  An empty input yields an empty output.
///
/// Spans must be positive; this is a caller contract, not validated here.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let alpha = 2.0 / (span as f64 + 1.0);

    let mut out = Vec::with_capacity(values.len());
    out.push(first);

    let mut prev = first;
    for &v in &values[1..] {
        prev = v * alpha + prev * (1.0 - alpha);
        out.push(prev);
    }

    out
}
