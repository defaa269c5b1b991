/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: a `NaN` value passes through and
/// an inverted bound pair resolves to `min` first.
pub(crate) fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

pub(crate) fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, clamp01(t))
}

pub(crate) fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
