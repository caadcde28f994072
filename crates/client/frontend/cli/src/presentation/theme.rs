//! Colors for map cells and entities.
use delve_core::{Rgb, TileStatus};
use ratatui::style::Color;

/// Background palette for the four lit/remembered terrain looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub dark_wall: Color,
    pub light_wall: Color,
    pub dark_ground: Color,
    pub light_ground: Color,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            dark_wall: Color::Rgb(0, 0, 100),
            light_wall: Color::Rgb(130, 110, 50),
            dark_ground: Color::Rgb(20, 20, 60),
            light_ground: Color::Rgb(50, 40, 20),
        }
    }

    /// Background for a cell, or `None` for cells that stay black.
    pub fn terrain(&self, status: TileStatus, is_wall: bool) -> Option<Color> {
        match (status, is_wall) {
            (TileStatus::Unseen, _) => None,
            (TileStatus::Explored, true) => Some(self.dark_wall),
            (TileStatus::Explored, false) => Some(self.dark_ground),
            (TileStatus::Visible, true) => Some(self.light_wall),
            (TileStatus::Visible, false) => Some(self.light_ground),
        }
    }

    pub fn entity(&self, color: Rgb) -> Color {
        let Rgb(r, g, b) = color;
        Color::Rgb(r, g, b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
