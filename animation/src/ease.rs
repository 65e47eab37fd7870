/// Cubic ease-in-out on `[0, 1]`.
///
/// Monotonic with `f(0) = 0`, `f(0.5) = 0.5` and `f(1) = 1`. Inputs outside
/// the unit interval are clamped, NaN is treated as zero.
pub fn ease_in_out(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Progress through a phase of `duration` milliseconds, clamped to `[0, 1]`.
///
/// A zero-length phase is immediately complete.
pub fn fraction(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}
