use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::core::game::{Control, Game};
use crate::core::input::InputEvent;
use crate::core::notice;

pub const DEFAULT_FPS: u32 = 30;

pub struct Engine<G: Game> {
    game: G,
    frame_time: Duration,
}

impl<G: Game> Engine<G> {
    pub fn with_fps(game: G, fps: u32) -> Self {
        Self {
            game,
            frame_time: Duration::from_secs(1) / fps.max(1),
        }
    }

    /// Runs frames until the game asks to quit, then hands the game back
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        let mut frames = tokio::time::interval(self.frame_time);
        // A long popup shouldn't be followed by a burst of catch-up frames
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(frame_time = ?self.frame_time, "engine started");

        loop {
            let size = terminal.size()?;
            self.game.set_area(Rect::new(0, 0, size.width, size.height));

            // INPUT (non-blocking): drain everything queued since last frame
            while event::poll(Duration::ZERO)? {
                let Some(input) = InputEvent::from_crossterm(event::read()?) else {
                    continue;
                };
                if self.game.handle(input)? == Control::Quit {
                    info!("quit requested");
                    return Ok(self.game);
                }
            }

            terminal.draw(|f| self.game.render(f))?;

            if let Some(notice) = self.game.end_frame() {
                debug!(title = notice.title, "showing notice");
                notice::show(terminal, &notice, |f| self.game.render(f))?;
            }

            frames.tick().await;
        }
    }
}
