use rand::SeedableRng;

/// Source of randomness for the cloud painter.
///
/// Implemented for every [`rand::Rng`]; tests can supply a scripted source to pin sublump
/// placement.
pub trait RandomSource {
    /// Uniform integer in the inclusive range `[lo, hi]`. Callers guarantee `lo <= hi`.
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        self.gen_range(lo..=hi)
    }
}

/// Deterministic generator for a given seed.
pub fn seeded(seed: u64) -> rand::rngs::StdRng {
    rand::rngs::StdRng::seed_from_u64(seed)
}

/// Draw a fresh seed from OS entropy.
pub fn entropy_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
