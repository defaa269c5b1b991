//! Random sources used by [`FloatRange::get_random_in_range`](crate::FloatRange::get_random_in_range).
//!
//! [`HostRandom`] draws from a thread-local `StdRng`, seeded from the OS on first use.
//! Any [`rand::Rng`] is also a [`RandomSource`], so tests can inject a seeded generator.

use std::cell::RefCell;

use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform, Uniform},
    rngs::StdRng,
};

thread_local! {
    static RNG: RefCell<StdRng> = RefCell::new(StdRng::from_rng(&mut rand::rng()));
}

/// Uniform sampling of a real value in an inclusive interval.
pub trait RandomSource {
    /// Samples a value in `[min, max]`.
    ///
    /// `min <= max` is guaranteed by callers in this crate.
    fn sample(&mut self, min: f32, max: f32) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn sample(&mut self, min: f32, max: f32) -> f32 {
        match Uniform::new_inclusive(min, max) {
            Ok(dist) => dist.sample(self),
            // `max - min` overflows for finite bounds wider than `f32::MAX`.
            Err(_) if min.is_finite() && max.is_finite() && min <= max => {
                let u: f32 = StandardUniform.sample(self);
                (min * (1.0 - u) + max * u).clamp(min, max)
            }
            Err(e) => {
                tracing::warn!("cannot sample in [{}, {}]: {}", min, max, e);
                f32::NAN
            }
        }
    }
}

/// The process-supplied random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostRandom;

impl RandomSource for HostRandom {
    fn sample(&mut self, min: f32, max: f32) -> f32 {
        RNG.with(|rng| RandomSource::sample(&mut *rng.borrow_mut(), min, max))
    }
}

/// Reseeds the generator behind [`HostRandom`] on the current thread.
pub fn init_state(seed: u64) {
    tracing::debug!("reseeding host random source with {}", seed);
    RNG.with(|rng| *rng.borrow_mut() = StdRng::seed_from_u64(seed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[test]
    #[case(0.0, 1.0)]
    #[case(-10.0, 10.0)]
    #[case(5.0, 5.0)]
    #[case(-f32::MAX, f32::MAX)]
    #[case(-f32::MAX, 0.0)]
    fn test_sample_in_range(#[case] min: f32, #[case] max: f32) {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let v = RandomSource::sample(&mut rng, min, max);
            assert!(min <= v && v <= max, "{v} not in [{min}, {max}]");
        }
    }

    #[rstest::rstest]
    #[test]
    #[case(0.0, f32::INFINITY)]
    #[case(f32::NAN, 1.0)]
    fn test_sample_non_finite(#[case] min: f32, #[case] max: f32) {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(RandomSource::sample(&mut rng, min, max).is_nan());
    }

    #[test]
    fn test_init_state() {
        init_state(42);
        let a = (0..8)
            .map(|_| RandomSource::sample(&mut HostRandom, 0.0, 1.0))
            .collect::<Vec<_>>();
        init_state(42);
        let b = (0..8)
            .map(|_| RandomSource::sample(&mut HostRandom, 0.0, 1.0))
            .collect::<Vec<_>>();
        assert_eq!(a, b);
    }
}
