/// Hangman-specific renderer - pure drawing, no game logic
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph, Widget,
    },
    Frame,
};

use super::gallows::{visible_parts, Stroke};
use super::game::{HangmanGame, Outcome, ALPHABET};
use super::layout::{BoardLayout, EndScreenLayout};
use super::session::{Phase, Session};
use super::words::WordSource;

/// The gallows occupies this window of the 800x600 drawing space
const GALLOWS_X: [f64; 2] = [100.0, 600.0];
const GALLOWS_Y: [f64; 2] = [20.0, 380.0];

const BUTTON_COLOR: Color = Color::Gray;
const BUTTON_HOVER_COLOR: Color = Color::DarkGray;

#[derive(Debug)]
pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render<W: WordSource>(frame: &mut Frame, session: &Session<W>) {
        match session.phase() {
            Phase::Playing => Self::render_board(frame, session.game()),
            Phase::RoundOver => Self::render_end_screen(frame, session),
        }
    }

    fn render_board(frame: &mut Frame, game: &HangmanGame) {
        let layout = BoardLayout::new(frame.area());

        let header = Paragraph::new("HANGMAN")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, layout.header);

        frame.render_widget(Self::gallows(game.remaining_attempts()), layout.gallows);

        let word = Paragraph::new(game.masked_word())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Word"));
        frame.render_widget(word, layout.word);

        let alphabet = Paragraph::new(Self::alphabet_strip(game))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Letters"));
        frame.render_widget(alphabet, layout.alphabet);

        let remaining = game.remaining_attempts() as usize;
        let misses: String = game.wrong_letters().map(|c| format!("{c} ")).collect();
        let footer = Paragraph::new(format!(
            "Tries left: {} {}   Misses: {}  [a-z] guess  [Esc] quit",
            remaining,
            "❤".repeat(remaining),
            misses
        ))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));
        frame.render_widget(footer, layout.footer);
    }

    fn gallows(remaining_attempts: u8) -> impl Widget {
        Canvas::default()
            .block(Block::default().borders(Borders::ALL))
            .marker(Marker::Braille)
            .x_bounds(GALLOWS_X)
            .y_bounds(GALLOWS_Y)
            .paint(move |ctx| {
                for part in visible_parts(remaining_attempts) {
                    match part.stroke {
                        Stroke::Line { from, to } => ctx.draw(&CanvasLine {
                            x1: from.0,
                            y1: flip_y(from.1),
                            x2: to.0,
                            y2: flip_y(to.1),
                            color: Color::White,
                        }),
                        Stroke::Circle { center, radius } => ctx.draw(&Circle {
                            x: center.0,
                            y: flip_y(center.1),
                            radius,
                            color: Color::White,
                        }),
                    }
                }
            })
    }

    /// Every letter a-z, guessed ones highlighted
    fn alphabet_strip(game: &HangmanGame) -> Line<'static> {
        let spans = ALPHABET.chars().map(|c| {
            let style = if game.correct().contains(&c) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if game.guessed().contains(&c) {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{c} "), style)
        });
        Line::from(spans.collect::<Vec<_>>())
    }

    fn render_end_screen<W: WordSource>(frame: &mut Frame, session: &Session<W>) {
        let layout = EndScreenLayout::new(frame.area());

        let (text, color) = match session.game().outcome() {
            Some(Outcome::Won) => ("You won!", Color::Green),
            _ => ("You lost!", Color::Red),
        };
        let banner = Paragraph::new(vec![
            Line::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Line::from(format!("The word was '{}'", session.game().word())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(banner, layout.banner);

        let pointer = session.pointer();
        Self::button(frame, "PLAY AGAIN (R)", layout.play_again, pointer);
        Self::button(frame, "EXIT (Q)", layout.exit, pointer);
    }

    fn button(frame: &mut Frame, label: &str, area: Rect, pointer: Option<Position>) {
        let hovered = pointer.is_some_and(|pos| area.contains(pos));
        let bg = if hovered { BUTTON_HOVER_COLOR } else { BUTTON_COLOR };

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(bg))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
    }
}

/// Drawing space grows downwards, the canvas upwards
fn flip_y(y: f64) -> f64 {
    GALLOWS_Y[1] + GALLOWS_Y[0] - y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Game;
    use crate::core::input::InputEvent;
    use crate::games::hangman::words::WordList;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    const W: u16 = 80;
    const H: u16 = 24;

    fn session(word: &str) -> Session<WordList> {
        let mut session = Session::new(WordList::from_words([word]).unwrap()).unwrap();
        session.set_area(Rect::new(0, 0, W, H));
        session
    }

    fn draw(session: &Session<WordList>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(W, H)).unwrap();
        terminal.draw(|f| session.render(f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..H)
            .map(|y| (0..W).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn type_keys(session: &mut Session<WordList>, keys: &str) {
        for c in keys.chars() {
            session.handle(InputEvent::Key(c)).unwrap();
        }
    }

    #[test]
    fn board_shows_word_strip_and_alphabet() {
        let mut s = session("walrus");
        type_keys(&mut s, "lz");

        let rows = rows(&draw(&s));
        assert!(rows.iter().any(|r| r.contains("_ _ l _ _ _")));
        assert!(rows.iter().any(|r| r.contains("a b c d e f g h i j k l m n o p q r s t u v w x y z")));
        assert!(rows.iter().any(|r| r.contains("Tries left: 5")));
        assert!(rows.iter().any(|r| r.contains("Misses: z ")));
    }

    #[test]
    fn guessed_letters_are_highlighted() {
        let mut s = session("walrus");
        type_keys(&mut s, "lz");
        let buffer = draw(&s);

        let alphabet = BoardLayout::new(Rect::new(0, 0, W, H)).alphabet;
        let row = alphabet.y + 1;
        let color_of = |letter: &str| {
            (alphabet.x..alphabet.right())
                .map(|x| &buffer[(x, row)])
                .find(|cell| cell.symbol() == letter)
                .map(|cell| cell.fg)
        };

        assert_eq!(color_of("l"), Some(Color::Green));
        assert_eq!(color_of("z"), Some(Color::Red));
        assert_eq!(color_of("q"), Some(Color::DarkGray));
    }

    #[test]
    fn gallows_is_blank_at_start_and_drawn_after_misses() {
        let gallows = BoardLayout::new(Rect::new(0, 0, W, H)).gallows;
        let inked = |buffer: &Buffer| {
            (gallows.y + 1..gallows.bottom() - 1)
                .flat_map(|y| (gallows.x + 1..gallows.right() - 1).map(move |x| (x, y)))
                .filter(|&pos| buffer[pos].symbol() != " ")
                .count()
        };

        let mut s = session("walrus");
        assert_eq!(inked(&draw(&s)), 0);

        type_keys(&mut s, "z");
        let with_base = inked(&draw(&s));
        assert!(with_base > 0);

        type_keys(&mut s, "xq");
        assert!(inked(&draw(&s)) > with_base);
    }

    #[test]
    fn end_screen_banner_and_buttons() {
        let mut s = session("ox");
        type_keys(&mut s, "ox");
        s.end_frame();

        let won_rows = rows(&draw(&s));
        assert!(won_rows.iter().any(|r| r.contains("You won!")));
        assert!(won_rows.iter().any(|r| r.contains("PLAY AGAIN (R)")));
        assert!(won_rows.iter().any(|r| r.contains("EXIT (Q)")));

        let mut s = session("ox");
        type_keys(&mut s, "abcdef");
        s.end_frame();
        let lost_rows = rows(&draw(&s));
        assert!(lost_rows.iter().any(|r| r.contains("You lost!")));
        assert!(lost_rows.iter().any(|r| r.contains("The word was 'ox'")));
    }

    /// Foreground colour of the first cell of the banner text
    fn banner_color(buffer: &Buffer) -> Option<Color> {
        let banner = EndScreenLayout::new(Rect::new(0, 0, W, H)).banner;
        (banner.x..banner.right())
            .map(|x| &buffer[(x, banner.y)])
            .find(|cell| cell.symbol() == "Y")
            .map(|cell| cell.fg)
    }

    #[test]
    fn banner_color_depends_on_outcome() {
        let mut won = session("ox");
        type_keys(&mut won, "xo");
        won.end_frame();

        let mut lost = session("ox");
        type_keys(&mut lost, "abcdef");
        lost.end_frame();

        assert_eq!(banner_color(&draw(&won)), Some(Color::Green));
        assert_eq!(banner_color(&draw(&lost)), Some(Color::Red));
    }

    #[test]
    fn hovered_button_changes_color() {
        let mut s = session("ox");
        type_keys(&mut s, "ox");
        s.end_frame();
        let buttons = s.end_screen();
        let exit_cell = (buttons.exit.x + 1, buttons.exit.y + 1);

        assert_eq!(draw(&s)[exit_cell].bg, BUTTON_COLOR);

        s.handle(InputEvent::PointerMoved(Position::new(exit_cell.0, exit_cell.1))).unwrap();
        let buffer = draw(&s);
        assert_eq!(buffer[exit_cell].bg, BUTTON_HOVER_COLOR);
        let play_again = (buttons.play_again.x + 1, buttons.play_again.y + 1);
        assert_eq!(buffer[play_again].bg, BUTTON_COLOR);
    }
}
