// Library interface for hangman
// Integration tests and the binary both go through these modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod selector;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{HangmanError, Result};
pub use game_state::{
    GameEngine, GameInterface, MAX_WRONG_GUESSES, RoundState, RoundStatus, UserAction, add_words,
    play_round, session_loop,
};
pub use guess::{GuessHistory, MAX_HISTORY};
pub use selector::WordSelector;
pub use wordbank::{WordBank, WordBankStore, WordEntry, parse_wordbank};
