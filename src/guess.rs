use crate::error::{HangmanError, Result};
use crate::wordbank::WordEntry;

/// One slot per letter of the alphabet.
pub const MAX_HISTORY: usize = 26;

/// Letters guessed during a round, in order. Repeats are kept as separate
/// entries, so a repeated wrong letter counts against the player each time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessHistory {
    letters: Vec<char>,
}

fn normalize(letter: char) -> Result<char> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_uppercase())
    } else {
        Err(HangmanError::InvalidLetter(letter))
    }
}

impl GuessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(MAX_HISTORY),
        }
    }

    /// Appends `letter` upper-cased. Returns the stored letter.
    pub fn record_guess(&mut self, letter: char) -> Result<char> {
        let letter = normalize(letter)?;
        if self.letters.len() >= MAX_HISTORY {
            return Err(HangmanError::HistoryFull);
        }
        self.letters.push(letter);
        Ok(letter)
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.letters.contains(&letter)
    }

    /// Entries absent from `secret`, repeats included. Recomputed from the
    /// whole history on every call.
    #[must_use]
    pub fn count_wrong_guesses(&self, secret: &WordEntry) -> usize {
        self.letters
            .iter()
            .filter(|&&letter| !secret.contains(letter))
            .count()
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= MAX_HISTORY
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(letters: &str) -> GuessHistory {
        let mut history = GuessHistory::new();
        for c in letters.chars() {
            history.record_guess(c).unwrap();
        }
        history
    }

    fn word(w: &str) -> WordEntry {
        WordEntry::new(w).unwrap()
    }

    #[test]
    fn test_record_guess_uppercases() {
        let mut h = GuessHistory::new();
        assert_eq!(h.record_guess('a').unwrap(), 'A');
        assert_eq!(h.letters(), &['A']);
    }

    #[test]
    fn test_record_guess_keeps_duplicates_in_order() {
        let h = history("bAbx");
        assert_eq!(h.letters(), &['B', 'A', 'B', 'X']);
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn test_record_guess_rejects_non_letters() {
        let mut h = GuessHistory::new();
        assert!(matches!(h.record_guess('1'), Err(HangmanError::InvalidLetter('1'))));
        assert!(matches!(h.record_guess(' '), Err(HangmanError::InvalidLetter(' '))));
        assert!(matches!(h.record_guess('ç'), Err(HangmanError::InvalidLetter('ç'))));
        assert!(h.is_empty());
    }

    #[test]
    fn test_history_full() {
        let mut h = history(&"Z".repeat(MAX_HISTORY));
        assert!(h.is_full());
        assert!(matches!(h.record_guess('a'), Err(HangmanError::HistoryFull)));
        assert_eq!(h.len(), MAX_HISTORY);
    }

    #[test]
    fn test_has_guessed_case_insensitive() {
        let h = history("gA");
        assert!(h.has_guessed('G'));
        assert!(h.has_guessed('g'));
        assert!(h.has_guessed('a'));
        assert!(!h.has_guessed('T'));
    }

    #[test]
    fn test_count_wrong_guesses_none_present() {
        let h = history("XYZWQ");
        assert_eq!(h.count_wrong_guesses(&word("GATO")), 5);
    }

    #[test]
    fn test_count_wrong_guesses_mixed() {
        let h = history("GXAY");
        assert_eq!(h.count_wrong_guesses(&word("GATO")), 2);
    }

    #[test]
    fn test_count_wrong_guesses_counts_repeats() {
        let h = history("XXXXX");
        assert_eq!(h.count_wrong_guesses(&word("CASA")), 5);
    }

    #[test]
    fn test_count_wrong_guesses_is_idempotent() {
        let h = history("XAQ");
        let secret = word("CASA");
        assert_eq!(h.count_wrong_guesses(&secret), 2);
        assert_eq!(h.count_wrong_guesses(&secret), 2);
    }

    #[test]
    fn test_clear() {
        let mut h = history("ABC");
        h.clear();
        assert!(h.is_empty());
        assert!(!h.has_guessed('A'));
    }
}
