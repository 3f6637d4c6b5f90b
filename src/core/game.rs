/// Core game interface driven by the frame loop
use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::core::input::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Message to show in a blocking popup before the next frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

/// Main game trait. The engine calls, once per frame and in this order:
/// `set_area`, `handle` for every pending event, `render`, `end_frame`.
pub trait Game {
    /// Current terminal size, for hit-testing clicks against drawn widgets
    fn set_area(&mut self, area: Rect);

    fn handle(&mut self, event: InputEvent) -> Result<Control>;

    fn render(&self, frame: &mut Frame);

    /// State transitions that happen after the frame is presented. A returned
    /// notice blocks the loop until the player dismisses it.
    fn end_frame(&mut self) -> Option<Notice>;
}
