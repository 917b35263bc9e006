use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::init_logging;
use hangman::wordbank::{WordBankStore, default_wordbank_path, load_embedded_words};
use hangman::{Result, WordSelector, info_log, session_loop};
use std::io;
use std::process::ExitCode;

fn run() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let path = cli.wordbank_path.unwrap_or_else(default_wordbank_path);
    let store = WordBankStore::new(&path);
    info_log!("Using word bank {}", path.display());

    if cli.init && !path.exists() {
        store.create(&load_embedded_words()?)?;
        println!("Created word bank at {}.", path.display());
    }

    let mut selector = match cli.seed {
        Some(seed) => WordSelector::from_seed(seed),
        None => WordSelector::from_clock(),
    };

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    session_loop(&store, &mut selector, &mut interface)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Sorry, {e}");
            ExitCode::from(1)
        }
    }
}
