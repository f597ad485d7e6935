//! Scene rendering. Every scene is a pure function of the frame and
//! read-only state references; nothing in this module mutates the session.

mod common;
pub mod end_scene;
pub mod menu_scene;
pub mod play_scene;

use crate::game::types::{GameMode, GameSession};
use crate::levels::LevelCatalog;
use ratatui::style::Color;
use ratatui::Frame;

// Neon palette
pub(crate) const PLAYER_COLOR: Color = Color::Cyan;
pub(crate) const HAZARD_COLOR: Color = Color::Red;
pub(crate) const MENU_COLOR: Color = Color::Magenta;
pub(crate) const GOLD_COLOR: Color = Color::Yellow;
pub(crate) const GROUND_COLOR: Color = Color::Blue;

/// Terminal color for a level's palette id.
pub(crate) fn level_color(color_id: u8) -> Color {
    match color_id {
        5 => Color::Blue,
        6 => Color::Green,
        7 => Color::White,
        _ => Color::White,
    }
}

/// Draw the scene for the session's current mode.
pub fn draw(frame: &mut Frame, session: &GameSession, catalog: &LevelCatalog) {
    match session.mode {
        GameMode::Menu => menu_scene::render(frame, session, catalog),
        GameMode::Playing => {
            play_scene::render(frame, &session.player, catalog.get(session.level_idx))
        }
        GameMode::GameOver => end_scene::render(frame, "GAME OVER - ATTEMPT FAILED"),
        GameMode::Win => end_scene::render(frame, "LEVEL COMPLETE! YOU ARE A GOD"),
    }
}
