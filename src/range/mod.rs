mod format;
mod intersection;
mod sample;

use std::{
    hash::{Hash, Hasher},
    ops::RangeInclusive,
};

use getset::CopyGetters;

use crate::utils::math;

/// An inclusive range of `f32` whose two boundaries may be given in either order.
///
/// The boundaries are stored as given. [`min_value`](Self::min_value),
/// [`max_value`](Self::max_value) and [`range_size`](Self::range_size) are derived
/// on every call, so `FloatRange::new(8., 2.)` and `FloatRange::new(2., 8.)` behave
/// identically and compare equal.
#[derive(Debug, Clone, Copy, Default, CopyGetters, derive_more::From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatRange {
    /// The first boundary as stored.
    #[getset(get_copy = "pub")]
    value_a: f32,
    /// The second boundary as stored.
    #[getset(get_copy = "pub")]
    value_b: f32,
}

impl FloatRange {
    /// Creates a new range. The boundaries may be given in either order.
    #[must_use]
    pub const fn new(value_a: f32, value_b: f32) -> Self {
        Self { value_a, value_b }
    }

    /// Creates a new range with `offset` added to both boundaries.
    #[must_use]
    pub fn with_offset(value_a: f32, value_b: f32, offset: f32) -> Self {
        Self::new(value_a + offset, value_b + offset)
    }

    /// Copies `other` with `offset` added to both of its stored boundaries.
    #[must_use]
    pub fn from_range(other: &FloatRange, offset: f32) -> Self {
        Self::with_offset(other.value_a, other.value_b, offset)
    }

    /// Overwrites both boundaries.
    pub fn set(&mut self, value_a: f32, value_b: f32) {
        self.value_a = value_a;
        self.value_b = value_b;
    }

    /// Shifts both boundaries by `offset`.
    pub fn apply_offset(&mut self, offset: f32) {
        self.value_a += offset;
        self.value_b += offset;
    }

    /// Gets the smaller boundary.
    pub fn min_value(&self) -> f32 {
        self.value_a.min(self.value_b)
    }

    /// Gets the larger boundary.
    pub fn max_value(&self) -> f32 {
        self.value_a.max(self.value_b)
    }

    /// Width of the range. Zero for a degenerate range.
    pub fn range_size(&self) -> f32 {
        (self.value_a - self.value_b).abs()
    }

    /// Checks if the range contains `value`, both ends inclusive.
    pub fn is_in_range(&self, value: f32) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }

    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: f32) -> f32 {
        math::clamp(value, self.min_value(), self.max_value())
    }

    /// Interpolates from the minimum to the maximum. `t` is clamped to `[0, 1]`.
    pub fn lerp_from_min_to_max(&self, t: f32) -> f32 {
        math::lerp(self.min_value(), self.max_value(), t)
    }

    /// Interpolates from the maximum to the minimum. `t` is clamped to `[0, 1]`.
    pub fn lerp_from_max_to_min(&self, t: f32) -> f32 {
        math::lerp(self.max_value(), self.min_value(), t)
    }

    /// Same as [`lerp_from_min_to_max`](Self::lerp_from_min_to_max), extrapolating
    /// for `t` outside `[0, 1]`.
    pub fn lerp_unclamped_from_min_to_max(&self, t: f32) -> f32 {
        math::lerp_unclamped(self.min_value(), self.max_value(), t)
    }

    /// Same as [`lerp_from_max_to_min`](Self::lerp_from_max_to_min), extrapolating
    /// for `t` outside `[0, 1]`.
    pub fn lerp_unclamped_from_max_to_min(&self, t: f32) -> f32 {
        math::lerp_unclamped(self.max_value(), self.min_value(), t)
    }

    /// Gets the position of `value` relative to the range, `0` at the minimum and `1` at the maximum.
    ///
    /// If `limit_in_range` is true, the result is clamped to `[0, 1]`.
    /// A degenerate range divides by zero and yields `inf`, `-inf` or `NaN`.
    pub fn get_progress_rate(&self, value: f32, limit_in_range: bool) -> f32 {
        let progress_rate = (value - self.min_value()) / self.range_size();
        if limit_in_range {
            math::clamp01(progress_rate)
        } else {
            progress_rate
        }
    }

    /// Gets the signed distance from `value` to the nearest edge, `0` if `value` is in range.
    ///
    /// Negative below the range, positive above.
    pub fn get_relative_position_from_nearest_edge(&self, value: f32) -> f32 {
        let min = self.min_value();
        let max = self.max_value();
        if value < min {
            value - min
        } else if value > max {
            value - max
        } else {
            0.0
        }
    }

    /// Gets `[min, max]`.
    pub fn get_edge_values(&self) -> [f32; 2] {
        [self.min_value(), self.max_value()]
    }
}

impl PartialEq for FloatRange {
    fn eq(&self, other: &Self) -> bool {
        self.min_value() == other.min_value() && self.max_value() == other.max_value()
    }
}

fn hash_bits(v: f32) -> u32 {
    // -0.0 == 0.0
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl Hash for FloatRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.min_value()).hash(state);
        hash_bits(self.max_value()).hash(state);
    }
}

impl From<RangeInclusive<f32>> for FloatRange {
    fn from(range: RangeInclusive<f32>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl From<FloatRange> for (f32, f32) {
    fn from(range: FloatRange) -> Self {
        (range.min_value(), range.max_value())
    }
}

impl From<FloatRange> for RangeInclusive<f32> {
    fn from(range: FloatRange) -> Self {
        range.min_value()..=range.max_value()
    }
}
