use crate::debug_log;
use crate::error::HangmanError;
use crate::game_state::{GameInterface, MAX_WRONG_GUESSES, RoundStatus, UserAction};
use crate::wordbank::WordEntry;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman with a persistent word bank
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the word-bank file (count header followed by one word per line)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Seed for word selection; defaults to the current time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Create the word bank from the built-in word list if it does not exist
    #[arg(long)]
    pub init: bool,

    /// Log store and round events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn is_yes(input: &str) -> bool {
    matches!(
        input.chars().next().map(|c| c.to_ascii_uppercase()),
        Some('Y' | 'S')
    )
}

pub fn display_masked_word(masked: &str, wrong_guesses: usize) {
    let spaced: Vec<String> = masked.chars().map(String::from).collect();
    println!("\n{}", spaced.join(" "));
    println!("Wrong guesses: {wrong_guesses}/{MAX_WRONG_GUESSES}");
}

pub fn display_round_result(status: RoundStatus, secret: &WordEntry) {
    match status {
        RoundStatus::Won => println!("You won! The word was {secret}."),
        RoundStatus::Lost => println!("You were hanged! The word was {secret}."),
        RoundStatus::Selecting | RoundStatus::Guessing => {}
    }
}

/// [`GameInterface`] over any line reader, writing prompts to stdout.
/// End of input ends the session.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                debug_log!("read_line failed: {}", e);
                None
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        println!("{prompt} (Y/N)");
        self.read_line().is_some_and(|answer| is_yes(&answer))
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round_start(&mut self, word_count: usize) {
        println!("New round. Word bank holds {word_count} words.");
    }

    fn display_progress(&mut self, masked: &str, wrong_guesses: usize) {
        display_masked_word(masked, wrong_guesses);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        println!("Guess a letter (or 'exit' to quit):");
        let Some(input) = self.read_line() else {
            return Some(UserAction::Exit);
        };
        if input.eq_ignore_ascii_case("exit") {
            return Some(UserAction::Exit);
        }
        match parse_letter(&input) {
            Some(letter) => Some(UserAction::Guess(letter)),
            None => {
                println!("Invalid guess. Please enter a single letter A-Z.");
                None
            }
        }
    }

    fn display_rejected_guess(&mut self, error: &HangmanError) {
        println!("Guess rejected: {error}");
    }

    fn display_round_result(&mut self, status: RoundStatus, secret: &WordEntry) {
        display_round_result(status, secret);
    }

    fn ask_play_again(&mut self) -> bool {
        self.ask_yes_no("Play again?")
    }

    fn ask_add_word(&mut self, first: bool) -> bool {
        if first {
            self.ask_yes_no("Do you want to add a new word to the game?")
        } else {
            self.ask_yes_no("Add another word?")
        }
    }

    fn read_new_word(&mut self) -> Option<String> {
        println!("New word:");
        self.read_line()
    }

    fn display_word_added(&mut self, word: &WordEntry) {
        println!("Added {word} to the word bank.");
    }

    fn display_rejected_word(&mut self, error: &HangmanError) {
        println!("Word not added: {error}");
    }

    fn display_exit_message(&mut self) {
        println!("Thanks for playing!");
    }
}
