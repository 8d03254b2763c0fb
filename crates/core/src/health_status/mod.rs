//! Health status module - randomized severity classification for advisors.

mod health_status_generator;
mod health_status_model;

pub use health_status_generator::{
    HealthStatusGenerator, HealthStatusGeneratorTrait, RandomSource, StdRandomSource,
};
pub use health_status_model::HealthStatus;
