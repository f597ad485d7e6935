//! The scrolling course: ground line, obstacles, player, progress bar.

use super::common::{draw_centered, draw_text};
use super::{GOLD_COLOR, GROUND_COLOR, HAZARD_COLOR, PLAYER_COLOR};
use crate::constants::{GROUND_ROW, OBSTACLE_SPACING, PLAYER_COLUMN, PROGRESS_SEGMENTS};
use crate::game::types::Player;
use crate::levels::{Level, ObstacleType};
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

pub fn render(frame: &mut Frame, player: &Player, level: &Level) {
    let size = frame.size();
    let width = size.width as i32;
    let ground_row = size.height as i32 - 5;

    draw_text(
        frame,
        0,
        ground_row,
        &"=".repeat(size.width as usize),
        Style::default().fg(GROUND_COLOR),
    );

    // Obstacles whose screen column falls inside the viewport
    let hazard = Style::default().fg(HAZARD_COLOR);
    for (i, cell) in level.map.iter().enumerate() {
        let sx =
            ((i * OBSTACLE_SPACING) as f32 - player.scroll_x + PLAYER_COLUMN as f32) as i32;
        if sx <= 0 || sx >= width {
            continue;
        }
        match cell {
            ObstacleType::Empty => {}
            ObstacleType::Spike => draw_text(frame, sx, ground_row - 1, "^", hazard),
            ObstacleType::Block => draw_text(frame, sx, ground_row - 1, "[X]", hazard),
            ObstacleType::Wall => {
                draw_text(frame, sx, ground_row - 1, "|+|", hazard);
                draw_text(frame, sx, ground_row - 2, "|+|", hazard);
            }
        }
    }

    // Player: 2x2 block at its fixed column, inverted while dashing
    let altitude = GROUND_ROW as f32 - player.y;
    let feet_row = ((ground_row - 1) as f32 - altitude) as i32;
    let mut style = Style::default().fg(PLAYER_COLOR).add_modifier(Modifier::BOLD);
    if player.dashing {
        style = style.add_modifier(Modifier::REVERSED);
    }
    draw_text(frame, PLAYER_COLUMN as i32, feet_row - 1, "@@", style);
    draw_text(frame, PLAYER_COLUMN as i32, feet_row, "@@", style);

    // 20-segment progress bar
    let progress = (player.scroll_x / level.length() * 100.0) as i32;
    let filled = (progress / 5).clamp(0, PROGRESS_SEGMENTS) as usize;
    let bar = format!(
        "PROGRESS: [{}{}] {}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_SEGMENTS as usize - filled),
        progress
    );
    draw_centered(frame, 2, &bar, Style::default().fg(GOLD_COLOR));
}
