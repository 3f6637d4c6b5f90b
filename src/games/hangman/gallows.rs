//! Gallows drawing as data. Coordinates live in an 800x600 space with the
//! origin at the top-left; the renderer maps them onto its canvas.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line { from: (f64, f64), to: (f64, f64) },
    Circle { center: (f64, f64), radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallowsPart {
    pub name: &'static str,
    pub stroke: Stroke,
    /// Drawn once remaining attempts drop to this value or below
    pub shown_at: u8,
}

const fn line(name: &'static str, from: (f64, f64), to: (f64, f64), shown_at: u8) -> GallowsPart {
    GallowsPart {
        name,
        stroke: Stroke::Line { from, to },
        shown_at,
    }
}

pub const GALLOWS: [GallowsPart; 9] = [
    line("base", (150.0, 350.0), (350.0, 350.0), 5),
    line("pole", (250.0, 350.0), (250.0, 50.0), 4),
    line("beam", (250.0, 70.0), (450.0, 70.0), 3),
    GallowsPart {
        name: "head",
        stroke: Stroke::Circle {
            center: (450.0, 95.0),
            radius: 30.0,
        },
        shown_at: 2,
    },
    line("torso", (450.0, 125.0), (450.0, 230.0), 1),
    line("left arm", (450.0, 170.0), (420.0, 240.0), 0),
    line("right arm", (450.0, 170.0), (480.0, 240.0), 0),
    line("left leg", (450.0, 230.0), (420.0, 300.0), 0),
    line("right leg", (450.0, 230.0), (480.0, 300.0), 0),
];

/// Parts to draw for the given number of remaining attempts
pub fn visible_parts(remaining_attempts: u8) -> impl Iterator<Item = &'static GallowsPart> {
    GALLOWS
        .iter()
        .filter(move |part| remaining_attempts <= part.shown_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_count_follows_attempts_lost() {
        let counts: Vec<usize> = (0..=6)
            .rev()
            .map(|remaining| visible_parts(remaining).count())
            .collect();
        assert_eq!(counts, [0, 1, 2, 3, 4, 5, 9]);
    }

    #[test]
    fn stages_appear_in_order_and_stay_drawn() {
        let names = |remaining| visible_parts(remaining).map(|p| p.name).collect::<Vec<_>>();

        assert_eq!(names(5), ["base"]);
        assert_eq!(names(2), ["base", "pole", "beam", "head"]);
        for remaining in 0..6 {
            let before = names(remaining + 1);
            let after = names(remaining);
            assert!(before.iter().all(|name| after.contains(name)));
        }
    }

    #[test]
    fn only_the_head_is_a_circle() {
        let circles: Vec<_> = GALLOWS
            .iter()
            .filter(|p| matches!(p.stroke, Stroke::Circle { .. }))
            .map(|p| p.name)
            .collect();
        assert_eq!(circles, ["head"]);
    }
}
