//! Level-select menu.

use super::common::{draw_centered, draw_text};
use super::{level_color, MENU_COLOR};
use crate::build_info;
use crate::game::types::GameSession;
use crate::levels::LevelCatalog;
use ratatui::style::{Color, Modifier, Style};
use ratatui::Frame;

pub fn render(frame: &mut Frame, session: &GameSession, catalog: &LevelCatalog) {
    let size = frame.size();
    let mid = size.height as i32 / 2;

    draw_centered(
        frame,
        mid - 6,
        "N E O N D A S H",
        Style::default().fg(MENU_COLOR).add_modifier(Modifier::BOLD),
    );

    let level = catalog.get(session.level_idx);
    let color = Style::default().fg(level_color(level.color_id));
    draw_centered(
        frame,
        mid - 2,
        &format!(
            "[<]  LEVEL {}: {}  [>]",
            session.level_idx + 1,
            level.name
        ),
        color,
    );
    draw_centered(frame, mid, &format!("DIFFICULTY: {}", level.difficulty), color);
    draw_centered(
        frame,
        mid + 2,
        &format!("BEST: {}%", level.best_progress),
        color,
    );

    draw_centered(frame, mid + 6, "PRESS [SPACE] TO START", Style::default());

    draw_text(
        frame,
        1,
        size.height as i32 - 2,
        &format!("build {} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT),
        Style::default().fg(Color::DarkGray),
    );
}
