use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::guess::MAX_HISTORY;
use crate::wordbank::MAX_WORD_LEN;

#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("word bank unavailable at '{}': {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word bank is empty")]
    EmptyBank,
    #[error("guess history is full ({} guesses)", MAX_HISTORY)]
    HistoryFull,
    #[error("word bank is corrupt: {0}")]
    CorruptStore(String),
    #[error("'{0}' is not a valid word (1 to {} letters A-Z)", MAX_WORD_LEN)]
    InvalidWord(String),
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("the round is already over")]
    RoundOver,
}

impl HangmanError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Whether the session cannot continue after this error.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. } | Self::EmptyBank | Self::CorruptStore(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HangmanError>;
