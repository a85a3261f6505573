use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use bon::Builder;
use rand::Rng;

use crate::{WeightedSampler, DEFAULT_SAMPLE_SIZE};

/// Empirical frequency tally over repeated draws.
#[derive(Debug, Builder)]
pub struct Frequency {
    #[builder(default = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,
}

impl Default for Frequency {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Frequency {
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Draws `sample_size` times and reports each observed outcome with
    /// its empirical frequency, in outcome order.
    pub fn tally<K, G>(&self, sampler: &mut WeightedSampler<K, G>) -> Vec<(K, f64)>
    where
        K: Ord + Copy,
        G: Rng,
    {
        let mut counts = BTreeMap::<K, u64>::new();
        for _ in 0..self.sample_size {
            match counts.entry(sampler.draw()) {
                Entry::Vacant(e) => {
                    e.insert(1);
                }
                Entry::Occupied(mut e) => {
                    *e.get_mut() += 1;
                }
            }
        }
        let denom = self.sample_size as f64;
        counts
            .into_iter()
            .map(|(k, c)| (k, c as f64 / denom))
            .collect()
    }
}
