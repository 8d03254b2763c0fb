use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::health_status_model::HealthStatus;

/// Source of uniform rolls in `[0, 100)`.
pub trait RandomSource: Send {
    fn roll(&mut self) -> u32;
}

/// [`RandomSource`] backed by the standard PRNG.
pub struct StdRandomSource(StdRng);

impl StdRandomSource {
    /// Seeds from operating system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandomSource {
    fn roll(&mut self) -> u32 {
        self.0.gen_range(0..100)
    }
}

/// Trait for health status generation
pub trait HealthStatusGeneratorTrait: Send + Sync {
    /// Draws a fresh status on every call.
    fn generate(&self) -> HealthStatus;
}

pub struct HealthStatusGenerator {
    source: Mutex<Box<dyn RandomSource>>,
}

impl HealthStatusGenerator {
    pub fn new() -> Self {
        Self::with_source(StdRandomSource::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_source(StdRandomSource::seeded(seed))
    }

    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        Self {
            source: Mutex::new(Box::new(source)),
        }
    }
}

impl Default for HealthStatusGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthStatusGeneratorTrait for HealthStatusGenerator {
    fn generate(&self) -> HealthStatus {
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        HealthStatus::from_roll(source.roll())
    }
}
