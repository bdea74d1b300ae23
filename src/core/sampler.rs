use std::{f64::consts::TAU, process::ExitCode};

use error_stack::{Report, ResultExt};
use log::debug;
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, Open01},
};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::histogram::Error;

/// Normal samples via the Box–Muller transform, one output per pair of uniform draws.
///
/// Only the cosine branch is used: the sine companion is thrown away rather than cached so that
/// sample `n` always depends on exactly the `n`th accepted pair of uniforms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxMuller {
    mean: f64,
    std_dev: f64,
}

impl BoxMuller {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (u1, u2) = loop {
            let u1: f64 = Open01.sample(rng);
            let u2: f64 = Open01.sample(rng);
            // ln(u1) blows up near zero
            if u1 > f64::EPSILON {
                break (u1, u2);
            }
        };

        let z0 = (-2. * u1.ln()).sqrt() * (TAU * u2).cos();
        z0.mul_add(self.std_dev, self.mean)
    }
}

/// Fills a freshly allocated list with `list_size` samples drawn from `normal`.
///
/// The PRNG is seeded from `seed` alone, so identical inputs always produce an identical list.
pub fn create_list(
    list_size: usize,
    seed: u64,
    normal: &impl Distribution<f64>,
) -> Result<Vec<f64>, Report<Error>> {
    let mut numbers = Vec::new();
    numbers
        .try_reserve_exact(list_size)
        .change_context(Error::Allocation)
        .attach_printable_lazy(|| format!("Failed to allocate the numbers list ({list_size})"))
        .attach(ExitCode::from(sysexits::ExitCode::OsErr))?;

    debug!("Starting seed: {seed}");
    let mut random = Xoshiro256PlusPlus::seed_from_u64(seed);
    numbers.extend(normal.sample_iter(&mut random).take(list_size));
    Ok(numbers)
}
