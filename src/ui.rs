//! Menu widgets and screen layout
//!
//! Buttons and avatars are plain rectangles in playfield pixels; hit tests
//! include both edges.

use glam::Vec2;

use crate::sim::Species;

/// RGB colour
pub type Rgb = (u8, u8, u8);

pub const BACKGROUND: Rgb = (43, 117, 237);
pub const BUTTON: Rgb = (217, 28, 22);
pub const TEXT: Rgb = (255, 255, 255);
pub const GOLD: Rgb = (232, 176, 23);
pub const SILVER: Rgb = (184, 179, 174);
pub const BRONZE: Rgb = (125, 86, 47);

/// A labelled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
}

impl Button {
    pub const fn new(label: &'static str, x: f32, y: f32, w: f32, h: f32, color: Rgb) -> Self {
        Self {
            label,
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            color,
        }
    }

    /// Check whether a pointer position lies on the button
    pub fn contains(&self, point: Vec2) -> bool {
        rect_contains(self.pos, self.size, point)
    }
}

/// Top-left corner for `text` centred on a box, as the menus lay it out
pub fn centered_label(pos: Vec2, size: Vec2, text: &str) -> Vec2 {
    Vec2::new(
        (pos.x + size.x / 2.0 - text.chars().count() as f32 * 7.0).round(),
        (pos.y + size.y / 2.0 - 16.0).round(),
    )
}

fn rect_contains(pos: Vec2, size: Vec2, point: Vec2) -> bool {
    (pos.x..=pos.x + size.x).contains(&point.x) && (pos.y..=pos.y + size.y).contains(&point.y)
}

// === Menu ===
pub const NEW_GAME: Button = Button::new("NEW GAME", 400.0, 150.0, 200.0, 80.0, BUTTON);
pub const RANKING: Button = Button::new("RANKING", 400.0, 250.0, 200.0, 80.0, BUTTON);
pub const QUIT: Button = Button::new("QUIT", 400.0, 350.0, 200.0, 80.0, BUTTON);

// === Ranking ===
pub const BACK: Button = Button::new("BACK", 400.0, 450.0, 200.0, 80.0, BUTTON);

// === Naming ===
pub const TYPE_NAME: Button = Button::new("TYPE YOUR NAME:", 420.0, 180.0, 200.0, 60.0, BACKGROUND);
pub const OK: Button = Button::new("OK", 400.0, 350.0, 200.0, 80.0, BUTTON);
/// Box the live name is drawn in
pub const NAME_BOX_POS: Vec2 = Vec2::new(400.0, 250.0);
pub const NAME_BOX_SIZE: Vec2 = Vec2::new(200.0, 80.0);

// === Game over ===
pub const PLAY_AGAIN: Button = Button::new("PLAY AGAIN", 425.0, 350.0, 200.0, 80.0, BUTTON);
pub const QUIT_OVER: Button = Button::new("QUIT", 425.0, 450.0, 200.0, 80.0, BUTTON);

/// HUD score position
pub const SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);

/// Character select panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    pub species: Species,
    pub pos: Vec2,
}

impl Avatar {
    pub const SIZE: Vec2 = Vec2::new(220.0, 220.0);
    pub const COLOR: Rgb = BUTTON;

    pub fn contains(&self, point: Vec2) -> bool {
        rect_contains(self.pos, Self::SIZE, point)
    }
}

pub const AVATARS: [Avatar; 3] = [
    Avatar {
        species: Species::Pig,
        pos: Vec2::new(100.0, 100.0),
    },
    Avatar {
        species: Species::Elephant,
        pos: Vec2::new(400.0, 100.0),
    },
    Avatar {
        species: Species::Cow,
        pos: Vec2::new(700.0, 100.0),
    },
];

/// Avatar under the pointer, first match in panel order
pub fn avatar_at(point: Vec2) -> Option<Species> {
    AVATARS.iter().find(|a| a.contains(point)).map(|a| a.species)
}

/// Ranking row colour by 0-based place
pub fn place_color(place: usize) -> Rgb {
    match place {
        0 => GOLD,
        1 => SILVER,
        2 => BRONZE,
        _ => TEXT,
    }
}

/// Player name being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    text: String,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Remove the last character; nothing happens on an empty buffer
    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn reset(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges_are_inclusive() {
        assert!(NEW_GAME.contains(Vec2::new(400.0, 150.0)));
        assert!(NEW_GAME.contains(Vec2::new(600.0, 230.0)));
        assert!(!NEW_GAME.contains(Vec2::new(600.5, 200.0)));
        assert!(!NEW_GAME.contains(Vec2::new(399.0, 200.0)));
    }

    #[test]
    fn test_avatar_lookup() {
        assert_eq!(avatar_at(Vec2::new(150.0, 150.0)), Some(Species::Pig));
        assert_eq!(avatar_at(Vec2::new(500.0, 300.0)), Some(Species::Elephant));
        assert_eq!(avatar_at(Vec2::new(920.0, 320.0)), Some(Species::Cow));
        assert_eq!(avatar_at(Vec2::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_name_input_editing() {
        let mut name = NameInput::new();
        name.pop();
        assert_eq!(name.as_str(), "");
        for c in "abc".chars() {
            name.push(c);
        }
        name.pop();
        assert_eq!(name.as_str(), "ab");
        name.reset();
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn test_centered_label() {
        let at = centered_label(NEW_GAME.pos, NEW_GAME.size, NEW_GAME.label);
        assert_eq!(at, Vec2::new(444.0, 174.0));
    }
}
