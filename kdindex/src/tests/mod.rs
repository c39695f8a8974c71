use crate::distance::{squared_distance, within_bounds};
use rand::{Rng, SeedableRng, rngs::StdRng};


pub const SEED: u64 = 0;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn random_points(rng: &mut StdRng, count: usize, dimensions: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|_| {
            (0..dimensions)
                .map(|_| rng.gen_range(-100.0..100.0))
                .collect()
        })
        .collect()
}

pub fn seeded() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Linear scan over every live entry, `live[i]` tells whether `points[i]` is still stored
pub struct BruteForce<'a> {
    pub points: &'a [Vec<f64>],
    pub live: &'a [bool],
}

impl BruteForce<'_> {
    pub fn range(&self, lower: &[f64], upper: &[f64]) -> Vec<usize> {
        self.live_ids()
            .filter(|&id| within_bounds(&self.points[id], lower, upper))
            .collect()
    }

    pub fn nearest_distances(&self, point: &[f64], count: usize) -> Vec<f64> {
        let mut distances = self
            .live_ids()
            .map(|id| squared_distance(point, &self.points[id]))
            .collect::<Vec<_>>();
        distances.sort_by(f64::total_cmp);
        distances.truncate(count);
        distances
    }

    fn live_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.points.len()).filter(|&id| self.live[id])
    }
}
