use anyhow::{Context as _, Result};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use tracing::{debug, info, warn};

use super::game::{GuessOutcome, HangmanGame, Outcome};
use super::layout::EndScreenLayout;
use super::renderer::HangmanRenderer;
use super::words::WordSource;
use crate::core::game::{Control, Game, Notice};
use crate::core::input::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    RoundOver,
}

/// One player's sitting: the current round plus everything the frame loop
/// needs to decide what to do with input and what to draw.
pub struct Session<W> {
    game: HangmanGame,
    words: W,
    phase: Phase,
    solution_shown: bool,
    pointer: Option<Position>,
    area: Rect,
    rounds: u32,
}

impl<W: WordSource> Session<W> {
    pub fn new(mut words: W) -> Result<Self> {
        let word = words.next_word().context("couldn't pick the first word")?;
        info!(round = 1, "round started");

        Ok(Self {
            game: HangmanGame::new(word),
            words,
            phase: Phase::Playing,
            solution_shown: false,
            pointer: None,
            area: Rect::default(),
            rounds: 1,
        })
    }

    pub fn game(&self) -> &HangmanGame {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pointer(&self) -> Option<Position> {
        self.pointer
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Button geometry for the last known screen size
    pub fn end_screen(&self) -> EndScreenLayout {
        EndScreenLayout::new(self.area)
    }

    fn start_round(&mut self) -> Result<()> {
        let word = self.words.next_word().context("couldn't pick a new word")?;
        self.game.reset(word);
        self.phase = Phase::Playing;
        self.solution_shown = false;
        self.rounds += 1;
        info!(round = self.rounds, "round started");
        Ok(())
    }
}

impl<W: WordSource> Game for Session<W> {
    fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    fn handle(&mut self, event: InputEvent) -> Result<Control> {
        match (self.phase, event) {
            (_, InputEvent::Close) => return Ok(Control::Quit),
            (_, InputEvent::PointerMoved(pos)) => self.pointer = Some(pos),
            (_, InputEvent::Resize(w, h)) => self.area = Rect::new(0, 0, w, h),

            (Phase::Playing, InputEvent::Key(c)) => {
                let outcome = self.game.guess_letter(c);
                match outcome {
                    GuessOutcome::Rejected => warn!(key = ?c, "ignored non-letter key"),
                    _ => debug!(letter = %c, ?outcome, remaining = self.game.remaining_attempts(), "guess"),
                }
            }
            (Phase::Playing, InputEvent::Click(_)) => {}

            (Phase::RoundOver, InputEvent::Key(c)) => match c.to_ascii_lowercase() {
                'r' => self.start_round()?,
                'q' => return Ok(Control::Quit),
                _ => {}
            },
            (Phase::RoundOver, InputEvent::Click(pos)) => {
                self.pointer = Some(pos);
                let buttons = self.end_screen();
                if buttons.play_again.contains(pos) {
                    self.start_round()?;
                } else if buttons.exit.contains(pos) {
                    return Ok(Control::Quit);
                }
            }
        }
        Ok(Control::Continue)
    }

    /// Moves a finished round to the end screen and hands back the solution
    /// notice the first time a round is lost.
    fn end_frame(&mut self) -> Option<Notice> {
        if self.phase != Phase::Playing {
            return None;
        }
        let outcome = self.game.outcome()?;

        self.phase = Phase::RoundOver;
        info!(round = self.rounds, ?outcome, word = self.game.word(), "round over");

        if outcome == Outcome::Lost && !self.solution_shown {
            self.solution_shown = true;
            return Some(Notice {
                title: "Game Over",
                message: format!("Correct answer: {}", self.game.word()),
            });
        }
        None
    }

    fn render(&self, frame: &mut Frame) {
        HangmanRenderer::render(frame, self);
    }
}
