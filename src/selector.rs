use crate::debug_log;
use crate::error::{HangmanError, Result};
use crate::wordbank::WordEntry;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random choice of the secret word.
///
/// Generic over the random source so callers can inject a seeded or mock
/// generator; the default is a seeded [`StdRng`].
#[derive(Debug)]
pub struct WordSelector<R = StdRng> {
    rng: R,
}

impl WordSelector<StdRng> {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        debug_log!("WordSelector seeded with {}", seed);
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the wall clock, so not reproducible across runs.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }
}

impl<R: Rng> WordSelector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Index in `[0, count)`.
    pub fn pick_index(&mut self, count: usize) -> Result<usize> {
        if count == 0 {
            return Err(HangmanError::EmptyBank);
        }
        let index = self.rng.gen_range(0..count);
        debug_log!("Picked index {} of {}", index, count);
        Ok(index)
    }

    pub fn pick<'a>(&mut self, words: &'a [WordEntry]) -> Result<&'a WordEntry> {
        let index = self.pick_index(words.len())?;
        Ok(&words[index])
    }
}

#[must_use]
pub fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn bank() -> Vec<WordEntry> {
        ["GATO", "CASA", "BOLO", "PATO", "MESA"]
            .iter()
            .map(|w| WordEntry::new(w).unwrap())
            .collect()
    }

    #[test]
    fn test_pick_empty_bank() {
        let mut selector = WordSelector::from_seed(7);
        assert!(matches!(selector.pick(&[]), Err(HangmanError::EmptyBank)));
        assert!(matches!(selector.pick_index(0), Err(HangmanError::EmptyBank)));
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut selector = WordSelector::from_seed(42);
        for count in 1..50 {
            for _ in 0..20 {
                let index = selector.pick_index(count).unwrap();
                assert!(index < count);
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let words = bank();
        let mut first = WordSelector::from_seed(2024);
        let mut second = WordSelector::from_seed(2024);
        for _ in 0..10 {
            assert_eq!(first.pick(&words).unwrap(), second.pick(&words).unwrap());
        }
    }

    #[test]
    fn test_single_word_bank() {
        let words = vec![WordEntry::new("GATO").unwrap()];
        let mut selector = WordSelector::from_clock();
        assert_eq!(selector.pick(&words).unwrap().as_str(), "GATO");
    }

    #[test]
    fn test_injected_rng() {
        let words = bank();
        let mut selector = WordSelector::with_rng(StepRng::new(0, 0));
        assert_eq!(selector.pick(&words).unwrap().as_str(), "GATO");
    }

    #[test]
    fn test_every_word_reachable() {
        let words = bank();
        let mut selector = WordSelector::from_seed(1);
        let mut seen = vec![false; words.len()];
        for _ in 0..500 {
            seen[selector.pick_index(words.len()).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
