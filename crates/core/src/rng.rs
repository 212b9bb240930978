//! RNG module - deterministic random sources for all games
//!
//! A small LCG keeps every game reproducible from its seed (tests and replays),
//! and the sampling helpers built on it cover mine placement and fruit/piece
//! spawning.

/// 32-bit linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is mapped to 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform in `[0, max)`.
    ///
    /// Uses the high bits: the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform in `[min, max]`.
    pub fn next_range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as u32 + 1;
        min + self.next_range(span) as i32
    }

    /// Fair coin
    pub fn next_bool(&mut self) -> bool {
        self.next_range(2) == 0
    }

    /// Current internal state (a seed that continues this sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Draw `n` distinct values uniformly from `[0, exclusive_max)`.
///
/// Rejection sampling: draw, retry on duplicate. Intended for `n` small next
/// to `exclusive_max` (15 mines out of 100 cells). `n` is clamped to
/// `exclusive_max` so the loop always terminates.
pub fn sample_without_replacement(rng: &mut SimpleRng, n: usize, exclusive_max: usize) -> Vec<usize> {
    let n = n.min(exclusive_max);
    let mut picked = Vec::with_capacity(n);
    while picked.len() < n {
        let candidate = rng.next_range(exclusive_max as u32) as usize;
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_replays_sequence() {
        let a: Vec<u32> = {
            let mut rng = SimpleRng::new(4242);
            (0..64).map(|_| rng.next_u32()).collect()
        };
        let mut rng = SimpleRng::new(4242);
        assert!(a.iter().all(|&v| v == rng.next_u32()));

        assert_ne!(SimpleRng::new(1).next_u32(), SimpleRng::new(2).next_u32());
        assert_eq!(SimpleRng::new(0).seed(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(10) < 10);
            let v = rng.next_range_inclusive(4, 176);
            assert!((4..=176).contains(&v));
        }
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.next_range_inclusive(5, 5), 5);
    }

    #[test]
    fn test_next_range_covers_small_domain() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.next_range(4) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_sample_without_replacement_is_distinct() {
        let mut rng = SimpleRng::new(2024);
        let picked = sample_without_replacement(&mut rng, 15, 100);
        assert_eq!(picked.len(), 15);

        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 15);
        assert!(picked.iter().all(|&i| i < 100));
    }

    #[test]
    fn test_sample_without_replacement_clamps_n() {
        let mut rng = SimpleRng::new(3);
        let mut picked = sample_without_replacement(&mut rng, 10, 4);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2, 3]);
    }
}
