use std::fmt::Debug;

use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use thiserror::Error;

/// Draws outcomes from a fixed weighted distribution.
///
/// The outcome and probability sequences are validated once at
/// construction and never change afterwards; the only state advanced by
/// [`draw`](Self::draw) is the owned random source.
#[derive(Debug, Clone)]
pub struct WeightedSampler<K, G = ThreadRng>
where
    K: Copy,
{
    outcomes: Vec<K>,
    probabilities: Vec<f32>,
    rng: G,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid inputs: randomNums and probabilities must have the same length.")]
    LengthMismatch,
    #[error("Invalid inputs: probabilities must be between 0.0 and 1.0 (inclusive).")]
    ProbabilityOutOfRange,
    #[error("Invalid inputs: sum of probabilities must be 1.0.")]
    ProbabilitySum,
}

pub type Result<T> = core::result::Result<T, ValidationError>;

impl<K> WeightedSampler<K>
where
    K: Copy,
{
    pub fn new(outcomes: Vec<K>, probabilities: Vec<f32>) -> Result<Self> {
        Self::with_rng(outcomes, probabilities, thread_rng())
    }

    pub fn single(value: K) -> Self {
        Self {
            outcomes: vec![value],
            probabilities: vec![1.0],
            rng: thread_rng(),
        }
    }

    /// Equal weights over `outcomes`. The last slot takes the remainder
    /// `1.0 - partial` so the sequence sums to exactly 1.0.
    pub fn uniform(outcomes: Vec<K>) -> Result<Self> {
        let n = outcomes.len();
        let mut probabilities = vec![1.0 / n as f32; n];
        if let Some((last, rest)) = probabilities.split_last_mut() {
            *last = 1.0 - rest.iter().sum::<f32>();
        }
        Self::new(outcomes, probabilities)
    }
}

impl<K, G> WeightedSampler<K, G>
where
    K: Copy,
    G: Rng,
{
    pub fn with_rng(outcomes: Vec<K>, probabilities: Vec<f32>, rng: G) -> Result<Self> {
        Self::validate(&outcomes, &probabilities)?;
        Ok(Self {
            outcomes,
            probabilities,
            rng,
        })
    }

    pub fn draw(&mut self) -> K {
        let u = self.rng.gen::<f32>();
        let mut cumulative = 0.0f32;
        for (k, p) in self.outcomes.iter().zip(&self.probabilities) {
            cumulative += p;
            if u < cumulative {
                return *k;
            }
        }
        // the accumulated sum can land a hair below 1.0; every
        // remaining u maps to the last outcome
        self.outcomes[self.outcomes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn outcomes(&self) -> &[K] {
        &self.outcomes
    }

    pub fn probabilities(&self) -> &[f32] {
        &self.probabilities
    }

    pub fn mode(&self) -> Vec<K> {
        self.outcomes
            .iter()
            .zip(&self.probabilities)
            .max_set_by(|(_, a), (_, b)| a.total_cmp(b))
            .into_iter()
            .map(|(k, _)| *k)
            .collect()
    }

    #[allow(clippy::float_cmp)] // the sum check is strict equality
    fn validate(outcomes: &[K], probabilities: &[f32]) -> Result<()> {
        if outcomes.len() != probabilities.len() {
            return Err(ValidationError::LengthMismatch);
        }
        let mut sum = 0.0f32;
        for &p in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(ValidationError::ProbabilityOutOfRange);
            }
            sum += p;
        }
        if sum != 1.0 {
            return Err(ValidationError::ProbabilitySum);
        }
        Ok(())
    }
}

impl<K, G> WeightedSampler<K, G>
where
    K: TryInto<f64, Error: Clone + Debug> + Copy,
{
    pub fn mean(&self) -> core::result::Result<f64, K::Error> {
        let mut m = 0.0;
        for (k, p) in self.outcomes.iter().zip(&self.probabilities) {
            m += (*k).try_into()? * f64::from(*p);
        }
        Ok(m)
    }

    pub fn variance(&self) -> core::result::Result<f64, K::Error> {
        let m = self.mean()?;
        let mut v = 0.0;
        for (k, p) in self.outcomes.iter().zip(&self.probabilities) {
            let kk: f64 = (*k).try_into()?;
            v += (kk - m).powi(2) * f64::from(*p);
        }
        Ok(v)
    }

    pub fn stddev(&self) -> core::result::Result<f64, K::Error> {
        self.variance().map(f64::sqrt)
    }
}
