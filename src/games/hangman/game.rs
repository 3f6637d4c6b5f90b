use std::collections::BTreeSet;

/// Wrong guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 6;

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// What a single call to [`HangmanGame::guess_letter`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// Letter was already guessed this round; nothing changed
    Repeated,
    /// Not a lowercase a-z letter; nothing changed
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Pure round state - no UI or input concerns
#[derive(Debug, Clone)]
pub struct HangmanGame {
    word: String,
    guessed: BTreeSet<char>,
    correct: BTreeSet<char>,
    remaining_attempts: u8,
}

impl HangmanGame {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_lowercase(),
            guessed: BTreeSet::new(),
            correct: BTreeSet::new(),
            remaining_attempts: MAX_ATTEMPTS,
        }
    }

    /// Start a new round with `word`, forgetting everything about the last one
    pub fn reset(&mut self, word: impl Into<String>) {
        *self = Self::new(word);
    }

    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if !letter.is_ascii_lowercase() {
            return GuessOutcome::Rejected;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        if self.word.contains(letter) {
            self.correct.insert(letter);
            GuessOutcome::Correct
        } else {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Wrong
        }
    }

    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.correct.contains(&c))
    }

    pub fn is_over(&self) -> bool {
        self.remaining_attempts == 0 || self.is_won()
    }

    /// `None` while the round is still running. A completed word wins even
    /// when no attempts remain.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_won() {
            Some(Outcome::Won)
        } else if self.remaining_attempts == 0 {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn correct(&self) -> &BTreeSet<char> {
        &self.correct
    }

    pub fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    pub fn wrong_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.difference(&self.correct).copied()
    }

    /// Word with unguessed letters replaced by `_`, space separated
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.correct.contains(&c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
