use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const EMBEDDED_WORDS: &str = include_str!("../../../assets/words.txt");

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word list is empty (no entries made only of letters a-z)")]
    Empty,
    #[error("couldn't read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can hand out secret words, one per round
pub trait WordSource {
    fn next_word(&mut self) -> Result<String, WordSourceError>;
}

/// Either a bare array of words or an object with a `words` array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordFile {
    List(Vec<String>),
    Object { words: Vec<String> },
}

impl From<WordFile> for Vec<String> {
    fn from(file: WordFile) -> Self {
        match file {
            WordFile::List(words) | WordFile::Object { words } => words,
        }
    }
}

/// Fixed list of lowercase words picked from at random
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    rng: StdRng,
}

impl WordList {
    /// Normalizes every entry to lowercase and drops anything that isn't made
    /// of ASCII letters only.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if words.is_empty() {
            return Err(WordSourceError::Empty);
        }

        Ok(Self {
            words,
            rng: StdRng::from_os_rng(),
        })
    }

    pub fn embedded() -> Result<Self, WordSourceError> {
        Self::from_words(EMBEDDED_WORDS.lines())
    }

    /// `.json` files hold an array of strings, anything else one word per line
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let list = if is_json {
            let file: WordFile =
                serde_json::from_str(&text).map_err(|source| WordSourceError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            Self::from_words(Vec::<String>::from(file))?
        } else {
            Self::from_words(text.lines())?
        };

        info!(path = %path.display(), words = list.words().len(), "loaded word list");
        Ok(list)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sorted, deduplicated entries
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> Result<String, WordSourceError> {
        let word = self
            .words
            .choose(&mut self.rng)
            .ok_or(WordSourceError::Empty)?
            .clone();
        debug!(len = word.len(), "picked secret word");
        Ok(word)
    }
}
