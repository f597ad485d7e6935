//! Game-over and level-complete screens.

use super::common::draw_centered;
use super::HAZARD_COLOR;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

pub fn render(frame: &mut Frame, message: &str) {
    let mid = frame.size().height as i32 / 2;

    draw_centered(
        frame,
        mid,
        message,
        Style::default().fg(HAZARD_COLOR).add_modifier(Modifier::BOLD),
    );
    draw_centered(frame, mid + 2, "PRESS [SPACE] TO MENU", Style::default());
}
