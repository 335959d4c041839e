use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Source of displacement noise.
// Implementations must return samples uniformly distributed over [-1, 1).
pub trait RandomSource {
    fn sample(&mut self) -> f64;
}

// Seeded ChaCha8 stream; same seed, same sequence
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    #[inline]
    fn sample(&mut self) -> f64 {
        // Standard f64 is in [0, 1)
        let unit: f64 = self.rng.sample(Standard);
        unit * 2.0 - 1.0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}
