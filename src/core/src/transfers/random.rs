/// Source of the rank drawn from the shortlist of best transfers.
pub trait TransferRandom {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Process-wide thread rng.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl TransferRandom for ThreadRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        rand::random::<u32>() as usize % upper
    }
}

/// Reproducible sequence derived from a seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        SeededRandom { state: seed }
    }

    fn next_hash(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e3779b9);
        let hash = self
            .state
            .wrapping_mul(2654435761)
            .wrapping_add(0xdeadbeef);
        let hash = hash ^ (hash >> 16);
        let hash = hash.wrapping_mul(0x45d9f3b);
        hash ^ (hash >> 16)
    }
}

impl TransferRandom for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.next_hash() as usize % upper
    }
}

/// Always picks the same rank, clamped into the window. `FixedIndex(0)` is "always best".
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl TransferRandom for FixedIndex {
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.min(upper - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let mut random = ThreadRandom;
        for _ in 0..200 {
            assert!(random.next_index(5) < 5);
        }
        assert_eq!(random.next_index(1), 0);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut first = SeededRandom::new(42);
        let mut second = SeededRandom::new(42);

        let a: Vec<usize> = (0..20).map(|_| first.next_index(5)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.next_index(5)).collect();

        assert_eq!(a, b);
        assert!(a.iter().all(|i| *i < 5));
    }

    #[test]
    fn test_seeded_random_covers_window() {
        let mut random = SeededRandom::new(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[random.next_index(5)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_fixed_index_clamps() {
        assert_eq!(FixedIndex(2).next_index(5), 2);
        assert_eq!(FixedIndex(4).next_index(3), 2);
        assert_eq!(FixedIndex(0).next_index(1), 0);
    }
}
