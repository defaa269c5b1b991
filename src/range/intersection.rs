use std::borrow::Borrow;

use super::FloatRange;

impl FloatRange {
    /// Gets the distance between this range and `other`, `0` if they overlap or touch.
    pub fn get_gap(&self, other: &FloatRange) -> f32 {
        self.get_signed_gap(other).abs()
    }

    /// Gets the directional distance from this range to `other`.
    ///
    /// Positive if `other` lies entirely above this range, negative if entirely below,
    /// and exactly `0` if they overlap or touch.
    pub fn get_signed_gap(&self, other: &FloatRange) -> f32 {
        let this_max_to_other_min = other.min_value() - self.max_value();
        if this_max_to_other_min > 0.0 {
            return this_max_to_other_min;
        }
        let this_min_to_other_max = other.max_value() - self.min_value();
        if this_min_to_other_max < 0.0 {
            return this_min_to_other_max;
        }
        0.0
    }

    /// Checks if `a` and `b` share at least one point.
    pub fn has_intersection(a: &FloatRange, b: &FloatRange) -> bool {
        Self::get_intersection(a, b).is_some()
    }

    /// Checks if all `ranges` share at least one point. `false` for no ranges.
    pub fn has_intersection_all<I>(ranges: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<FloatRange>,
    {
        Self::get_intersection_all(ranges).is_some()
    }

    /// Gets the intersection of `a` and `b`.
    ///
    /// Touching ranges intersect in a zero-width range.
    pub fn get_intersection(a: &FloatRange, b: &FloatRange) -> Option<FloatRange> {
        Self::get_intersection_all([a, b])
    }

    /// Gets the intersection of all `ranges`, or `None` if they are disjoint or there are none.
    pub fn get_intersection_all<I>(ranges: I) -> Option<FloatRange>
    where
        I: IntoIterator,
        I::Item: Borrow<FloatRange>,
    {
        let (new_min, new_max) = ranges
            .into_iter()
            .map(|r| {
                let r = r.borrow();
                (r.min_value(), r.max_value())
            })
            .reduce(|(lo, hi), (min, max)| (lo.max(min), hi.min(max)))?;
        (new_min <= new_max).then(|| FloatRange::new(new_min, new_max))
    }
}
