pub(crate) fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Unclamped position of `v` between `a` and `b`; 0 when the span is empty.
pub(crate) fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return 0.0;
    }
    (v - a) / span
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
