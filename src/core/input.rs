/// Terminal events reduced to the handful the games care about
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The terminal equivalent of closing the window (Esc or Ctrl-C)
    Close,
    Key(char),
    Click(Position),
    PointerMoved(Position),
    Resize(u16, u16),
}

impl InputEvent {
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                match key.code {
                    KeyCode::Esc => Some(Self::Close),
                    KeyCode::Char('c') | KeyCode::Char('C')
                        if key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        Some(Self::Close)
                    }
                    KeyCode::Char(c) => Some(Self::Key(c)),
                    _ => None,
                }
            }
            Event::Mouse(mouse) => {
                let pos = Position::new(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(Self::Click(pos)),
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Self::PointerMoved(pos)),
                    _ => None,
                }
            }
            Event::Resize(w, h) => Some(Self::Resize(w, h)),
            _ => None,
        }
    }
}
