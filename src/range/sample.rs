use itertools::{Itertools, MinMaxResult};

use crate::random::{HostRandom, RandomSource};

use super::FloatRange;

impl FloatRange {
    /// Gets a uniformly distributed random value in `[min, max]` from [`HostRandom`].
    pub fn get_random_in_range(&self) -> f32 {
        self.get_random_in_range_with(&mut HostRandom)
    }

    /// Gets a uniformly distributed random value in `[min, max]` from `rng`.
    pub fn get_random_in_range_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.sample(self.min_value(), self.max_value())
    }

    fn n(&self, resolution: f32) -> usize {
        let n = (self.range_size() / resolution).floor();
        if n.is_finite() && n >= 0.0 {
            (n as usize).saturating_add(1)
        } else {
            1
        }
    }

    /// Gets points from the minimum towards the maximum spaced by `resolution`.
    ///
    /// The maximum is included only if the size is a multiple of `resolution`.
    /// A non-positive or non-finite `resolution` yields the minimum alone.
    pub fn points(&self, resolution: f32) -> impl Iterator<Item = f32> + Clone {
        let start = self.min_value();
        (0..self.n(resolution)).map(move |i| start + resolution * i as f32)
    }

    /// Returns the smallest range containing both this range and `value`.
    #[must_use]
    pub fn grow(self, value: f32) -> FloatRange {
        FloatRange::new(self.min_value().min(value), self.max_value().max(value))
    }

    /// Gets the smallest range containing all `values`. `NaN`s are skipped.
    pub fn enclosing<I: IntoIterator<Item = f32>>(values: I) -> Option<FloatRange> {
        match values
            .into_iter()
            .filter(|v| !v.is_nan())
            .minmax_by(f32::total_cmp)
        {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(FloatRange::new(v, v)),
            MinMaxResult::MinMax(min, max) => Some(FloatRange::new(min, max)),
        }
    }
}
