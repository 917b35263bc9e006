use crate::error::{HangmanError, Result};
use crate::guess::GuessHistory;
use crate::selector::WordSelector;
use crate::wordbank::{WordBankStore, WordEntry};
use crate::{debug_log, info_log};
use rand::Rng;

/// Wrong guesses that end the round.
pub const MAX_WRONG_GUESSES: usize = 5;
pub const PLACEHOLDER: char = '_';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Selecting,
    Guessing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The secret word and the guesses made against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub secret: WordEntry,
    pub guesses: GuessHistory,
}

impl RoundState {
    #[must_use]
    pub fn new(secret: WordEntry) -> Self {
        Self {
            secret,
            guesses: GuessHistory::new(),
        }
    }

    /// The secret with every letter not yet guessed replaced by `_`.
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.secret
            .letters()
            .map(|c| if self.guesses.has_guessed(c) { c } else { PLACEHOLDER })
            .collect()
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.guesses.count_wrong_guesses(&self.secret)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.secret.letters().all(|c| self.guesses.has_guessed(c))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong_guesses() >= MAX_WRONG_GUESSES
    }

    /// Won is checked first, so a guess that completes the word wins even
    /// if it also reaches the mistake limit.
    #[must_use]
    pub fn evaluate(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.is_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::Guessing
        }
    }
}

/// Drives one round at a time through `Selecting -> Guessing -> Won | Lost`.
#[derive(Debug)]
pub struct GameEngine {
    round: Option<RoundState>,
    status: RoundStatus,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: None,
            status: RoundStatus::Selecting,
        }
    }

    /// Picks a secret from `words` and starts a fresh round, discarding any
    /// previous one.
    pub fn start_round<R: Rng>(
        &mut self,
        words: &[WordEntry],
        selector: &mut WordSelector<R>,
    ) -> Result<&RoundState> {
        self.round = None;
        self.status = RoundStatus::Selecting;
        let secret = selector.pick(words)?.clone();
        Ok(self.start_with(secret))
    }

    /// Starts a round with a known secret.
    pub fn start_with(&mut self, secret: WordEntry) -> &RoundState {
        debug_log!("Starting round with a {}-letter word", secret.len());
        self.status = RoundStatus::Guessing;
        self.round.insert(RoundState::new(secret))
    }

    /// Records `letter` and re-evaluates the round.
    ///
    /// Fails with [`HangmanError::RoundOver`] when no round is being played,
    /// and passes through `InvalidLetter` / `HistoryFull` leaving the round
    /// unchanged.
    pub fn guess(&mut self, letter: char) -> Result<RoundStatus> {
        if self.status != RoundStatus::Guessing {
            return Err(HangmanError::RoundOver);
        }
        let round = self.round.as_mut().ok_or(HangmanError::RoundOver)?;
        let letter = round.guesses.record_guess(letter)?;
        self.status = round.evaluate();
        debug_log!(
            "Guess {} -> {:?} ({} wrong)",
            letter,
            self.status,
            round.wrong_guesses()
        );
        if self.status.is_over() {
            info_log!("Round finished: {:?}", self.status);
        }
        Ok(self.status)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn masked_word(&self) -> Option<String> {
        self.round.as_ref().map(RoundState::masked_word)
    }

    /// The secret, once the round has ended.
    #[must_use]
    pub fn reveal(&self) -> Option<&WordEntry> {
        if self.status.is_over() {
            self.round.as_ref().map(|round| &round.secret)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    Exit,
}

/// Console side of a session. `None` from a read means the input was
/// invalid and the caller should prompt again.
pub trait GameInterface {
    fn display_round_start(&mut self, word_count: usize);
    fn display_progress(&mut self, masked: &str, wrong_guesses: usize);
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_rejected_guess(&mut self, error: &HangmanError);
    fn display_round_result(&mut self, status: RoundStatus, secret: &WordEntry);
    fn ask_play_again(&mut self) -> bool;
    /// `first` is false when asking about another word after an add.
    fn ask_add_word(&mut self, first: bool) -> bool;
    fn read_new_word(&mut self) -> Option<String>;
    fn display_word_added(&mut self, word: &WordEntry);
    fn display_rejected_word(&mut self, error: &HangmanError);
    fn display_exit_message(&mut self);
}

/// Plays one round against a freshly loaded word bank.
///
/// Returns the terminal status, or `None` if the player quit mid-round.
pub fn play_round<R: Rng, I: GameInterface + ?Sized>(
    engine: &mut GameEngine,
    store: &WordBankStore,
    selector: &mut WordSelector<R>,
    interface: &mut I,
) -> Result<Option<RoundStatus>> {
    let bank = store.load_all()?;
    engine.start_round(&bank.words, selector)?;
    interface.display_round_start(bank.count());

    loop {
        if let Some(round) = engine.round() {
            interface.display_progress(&round.masked_word(), round.wrong_guesses());
        }

        let letter = match interface.read_guess() {
            Some(UserAction::Guess(letter)) => letter,
            Some(UserAction::Exit) => return Ok(None),
            None => continue,
        };

        match engine.guess(letter) {
            Ok(status) if status.is_over() => {
                if let Some(secret) = engine.reveal() {
                    interface.display_round_result(status, secret);
                }
                return Ok(Some(status));
            }
            Ok(_) => {}
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => interface.display_rejected_guess(&e),
        }
    }
}

/// Prompts for new words until the player declines.
pub fn add_words<I: GameInterface + ?Sized>(
    store: &WordBankStore,
    interface: &mut I,
) -> Result<usize> {
    let mut added = 0;
    let mut adding = interface.ask_add_word(true);
    while adding {
        let Some(word) = interface.read_new_word() else {
            break;
        };
        match store.append_word(&word) {
            Ok(entry) => {
                added += 1;
                interface.display_word_added(&entry);
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => interface.display_rejected_word(&e),
        }
        adding = interface.ask_add_word(false);
    }
    Ok(added)
}

/// Rounds until the player stops, then the add-word prompt.
pub fn session_loop<R: Rng, I: GameInterface + ?Sized>(
    store: &WordBankStore,
    selector: &mut WordSelector<R>,
    interface: &mut I,
) -> Result<()> {
    let mut engine = GameEngine::new();

    loop {
        if play_round(&mut engine, store, selector, interface)?.is_none() {
            interface.display_exit_message();
            return Ok(());
        }
        if !interface.ask_play_again() {
            break;
        }
    }

    let added = add_words(store, interface)?;
    info_log!("Session finished, {} words added", added);
    interface.display_exit_message();
    Ok(())
}
