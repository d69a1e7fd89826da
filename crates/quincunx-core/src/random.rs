//! The random-number seam used by beans.
//!
//! Beans never reach for a global generator. Each bean owns a
//! [`RandomSource`], drawn from once at creation (skill level) and once
//! per peg in luck mode. Any [`rand::RngCore`] is a `RandomSource`, so a
//! seeded `ChaCha8Rng` gives fully reproducible runs; tests can supply a
//! scripted source to walk specific paths.

use rand::{Rng, RngCore};

/// Source of the two kinds of randomness a bean consumes.
pub trait RandomSource {
    /// Uniform draw from `{0, 1}`; `true` means 1 ("go right").
    fn next_bit(&mut self) -> bool;

    /// Sample from the standard normal distribution `N(0, 1)`.
    fn standard_normal(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_bit(&mut self) -> bool {
        self.random_range(0..2u32) == 1
    }

    /// Box-Muller transform; avoids the `rand_distr` dependency.
    fn standard_normal(&mut self) -> f64 {
        let u1: f64 = self.random::<f64>().max(1e-300); // avoid ln(0)
        let u2: f64 = self.random();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}
