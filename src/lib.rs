mod frequency;
mod sampler;

pub use frequency::Frequency;
pub use sampler::{ValidationError, WeightedSampler};

const DEFAULT_SAMPLE_SIZE: usize = 1_000_000;
