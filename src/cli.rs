use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::engine::DEFAULT_FPS;
use crate::games::hangman::WordList;

#[derive(Debug, Parser)]
#[command(name = "hangterm")]
#[command(about = "Guess the word before the stick figure is complete")]
#[command(version)]
pub struct Cli {
    /// Word list to draw secret words from (one per line, or a JSON array
    /// when the file ends in .json). Defaults to the built-in list.
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Seed for word selection, for reproducible games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(short, long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Build the word source this invocation asked for
    pub fn word_list(&self) -> Result<WordList> {
        let list = match &self.words {
            Some(path) => WordList::from_file(path),
            None => WordList::embedded(),
        }
        .context("no words to play with")?;

        Ok(match self.seed {
            Some(seed) => list.with_seed(seed),
            None => list,
        })
    }
}
