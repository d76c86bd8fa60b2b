use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub struct SimpleSamplers;
impl SimpleSamplers {
    /// Uniformly samples an index in `[0, num_options)`.  A seed makes the draw
    /// deterministic; `None` draws from the thread rng.
    pub fn uniform_idx_sample(num_options: usize, seed: Option<u64>) -> usize {
        assert!(num_options > 0);
        match seed {
            Some(seed) => {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                rng.gen_range(0..num_options)
            }
            None => {
                let mut rng = rand::thread_rng();
                rng.gen_range(0..num_options)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_idx_sample_in_range() {
        for _ in 0..100 {
            let idx = SimpleSamplers::uniform_idx_sample(10, None);
            assert!(idx < 10);
        }
    }

    #[test]
    fn test_uniform_idx_sample_seeded_is_deterministic() {
        let a = SimpleSamplers::uniform_idx_sample(10, Some(7));
        let b = SimpleSamplers::uniform_idx_sample(10, Some(7));
        assert_eq!(a, b);
    }
}
