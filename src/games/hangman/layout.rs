use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const BUTTON_WIDTH: u16 = 20;
pub const BUTTON_HEIGHT: u16 = 3;
const BUTTON_MARGIN: u16 = 1;
const BANNER_HEIGHT: u16 = 3;

/// Regions of the in-progress board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub gallows: Rect,
    pub word: Rect,
    pub alphabet: Rect,
    pub footer: Rect,
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Gallows
                Constraint::Length(3), // Word
                Constraint::Length(3), // Alphabet
                Constraint::Length(3), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            gallows: chunks[1],
            word: chunks[2],
            alphabet: chunks[3],
            footer: chunks[4],
        }
    }
}

/// Banner and buttons of the win/lose screen, stacked around the centre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndScreenLayout {
    pub banner: Rect,
    pub play_again: Rect,
    pub exit: Rect,
}

impl EndScreenLayout {
    pub fn new(area: Rect) -> Self {
        let mid_y = area.y + area.height / 2;

        let banner = centered_row(area, area.width, mid_y.saturating_sub(BANNER_HEIGHT + BUTTON_MARGIN), BANNER_HEIGHT);
        let play_again = centered_row(area, BUTTON_WIDTH, mid_y, BUTTON_HEIGHT);
        let exit = centered_row(area, BUTTON_WIDTH, play_again.bottom() + BUTTON_MARGIN, BUTTON_HEIGHT);

        Self { banner, play_again, exit }
    }
}

/// A `width` x `height` rect horizontally centred in `area` at row `y`,
/// clipped to `area`
fn centered_row(area: Rect, width: u16, y: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y.max(area.y), width, height).intersection(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn buttons_are_stacked_and_disjoint() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = EndScreenLayout::new(area);

        assert_eq!(layout.play_again.width, BUTTON_WIDTH);
        assert_eq!(layout.exit.width, BUTTON_WIDTH);
        assert_eq!(layout.play_again.x, 30);
        assert!(layout.play_again.bottom() < layout.exit.y);
        assert!(!layout.play_again.intersects(layout.exit));
        assert!(!layout.banner.intersects(layout.play_again));
        assert!(area.contains(Position::new(layout.exit.x, layout.exit.bottom() - 1)));
    }

    #[test]
    fn tiny_terminal_keeps_regions_inside() {
        let area = Rect::new(0, 0, 10, 6);
        let layout = EndScreenLayout::new(area);

        for rect in [layout.banner, layout.play_again, layout.exit] {
            assert_eq!(rect.intersection(area), rect);
        }
    }

    #[test]
    fn board_fills_the_area_top_to_bottom() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = BoardLayout::new(area);

        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.footer.bottom(), 30);
        assert_eq!(layout.gallows.height, 30 - 12);
    }
}
