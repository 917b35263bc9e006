//! Flat-file word bank.
//!
//! The file holds a decimal record-count header followed by one uppercase
//! word per line:
//!
//! ```text
//! 3
//! GATO
//! CASA
//! BOLO
//! ```
//!
//! Writes go through a sibling temporary file that is renamed over the
//! original, so an interrupted append never leaves the header out of step
//! with the records.

use crate::error::{HangmanError, Result};
use crate::{debug_log, info_log};
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Longest word the bank accepts.
pub const MAX_WORD_LEN: usize = 19;
pub const DEFAULT_WORDBANK_FILE: &str = "palavras.txt";
pub const EMBEDDED_WORDBANK: &str = include_str!("resources/palavras.txt");

/// A single word-bank record: 1 to [`MAX_WORD_LEN`] letters A-Z.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordEntry(String);

impl WordEntry {
    /// Validates `word` and normalizes it to uppercase.
    pub fn new(word: &str) -> Result<Self> {
        let word = word.trim();
        let upper = word.to_ascii_uppercase();
        if upper.is_empty()
            || upper.len() > MAX_WORD_LEN
            || !upper.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(HangmanError::InvalidWord(word.to_string()));
        }
        Ok(Self(upper))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter.to_ascii_uppercase())
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WordEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for WordEntry {
    type Err = HangmanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Contents of a word-bank file after validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    pub words: Vec<WordEntry>,
}

impl WordBank {
    /// Record count, as written to the header.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parses word-bank text: the header, then exactly that many
/// whitespace-delimited records. Anything after the declared records is
/// ignored.
pub fn parse_wordbank(data: &str) -> Result<WordBank> {
    let mut tokens = data.split_whitespace();
    let header = tokens
        .next()
        .ok_or_else(|| HangmanError::CorruptStore("missing record-count header".to_string()))?;
    let count: usize = header.parse().map_err(|_| {
        HangmanError::CorruptStore(format!("header '{header}' is not a record count"))
    })?;

    let words = tokens
        .take(count)
        .map(|token| {
            WordEntry::new(token).map_err(|_| {
                HangmanError::CorruptStore(format!("record '{token}' is not a valid word"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if words.len() < count {
        return Err(HangmanError::CorruptStore(format!(
            "header declares {count} records but only {} are present",
            words.len()
        )));
    }
    Ok(WordBank { words })
}

/// Renders `words` in the on-disk format, header included.
#[must_use]
pub fn render_wordbank(words: &[WordEntry]) -> String {
    let mut out = format!("{}\n", words.len());
    for word in words {
        out.push_str(word.as_str());
        out.push('\n');
    }
    out
}

/// Parses the embedded default list (one word per line, no header).
pub fn load_embedded_words() -> Result<Vec<WordEntry>> {
    EMBEDDED_WORDBANK
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(WordEntry::new)
        .collect()
}

/// `palavras.txt` in the working directory when present, otherwise the
/// per-user data directory.
#[must_use]
pub fn default_wordbank_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_WORDBANK_FILE);
    if local.exists() {
        return local;
    }
    dirs::data_dir()
        .map(|dir| dir.join("hangman").join(DEFAULT_WORDBANK_FILE))
        .unwrap_or(local)
}

/// Single-writer store over one word-bank file. No locking is done.
#[derive(Clone, Debug)]
pub struct WordBankStore {
    path: PathBuf,
}

impl WordBankStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_all(&self) -> Result<WordBank> {
        debug_log!("Loading word bank from {}", self.path.display());
        let bytes = fs::read(&self.path).map_err(|e| HangmanError::unavailable(&self.path, e))?;
        let data = String::from_utf8(bytes)
            .map_err(|_| HangmanError::CorruptStore("file is not valid UTF-8".to_string()))?;
        let bank = parse_wordbank(&data)?;
        info_log!("Loaded {} words from {}", bank.count(), self.path.display());
        Ok(bank)
    }

    /// Adds `word` (upper-cased) as the last record and bumps the header.
    /// Returns the stored entry.
    pub fn append_word(&self, word: &str) -> Result<WordEntry> {
        let entry = WordEntry::new(word)?;
        let mut bank = self.load_all()?;
        bank.words.push(entry.clone());
        self.write_atomic(&render_wordbank(&bank.words))?;
        info_log!(
            "Appended {} to {} ({} records)",
            entry,
            self.path.display(),
            bank.count()
        );
        Ok(entry)
    }

    /// Writes a new bank holding `words`. Fails if the file already exists.
    pub fn create(&self, words: &[WordEntry]) -> Result<()> {
        if self.path.exists() {
            return Err(HangmanError::unavailable(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::AlreadyExists, "word bank already exists"),
            ));
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| HangmanError::unavailable(parent, e))?;
        }
        self.write_atomic(&render_wordbank(words))?;
        info_log!("Created word bank {} with {} words", self.path.display(), words.len());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_atomic(&self, contents: &str) -> Result<()> {
        let tmp = self.temp_path();
        debug_log!("Writing {} bytes via {}", contents.len(), tmp.display());

        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(HangmanError::unavailable(&tmp, e));
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            HangmanError::unavailable(&self.path, e)
        })
    }
}
