/// Blocking popup drawn on top of the current frame
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use crate::core::game::Notice;

const HINT: &str = "press any key";

/// Shows `notice` over whatever `background` draws and waits for a key press
/// or mouse click.
pub fn show<F>(terminal: &mut DefaultTerminal, notice: &Notice, background: F) -> Result<()>
where
    F: Fn(&mut Frame),
{
    loop {
        terminal.draw(|f| {
            background(f);
            render(f, notice);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => return Ok(()),
            _ => {}
        }
    }
}

pub fn render(frame: &mut Frame, notice: &Notice) {
    let area = popup_area(frame.area(), notice);

    let body = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::styled(HINT, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", notice.title))
                    .title_style(Style::default().add_modifier(Modifier::BOLD)),
            ),
        area,
    );
}

fn popup_area(area: Rect, notice: &Notice) -> Rect {
    let text_width = notice.message.chars().count().max(HINT.len());
    let width = u16::try_from(text_width)
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .min(area.width);
    let height = 5.min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
