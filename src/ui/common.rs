//! Small drawing helpers shared by the scenes.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Stamp one line of styled text at (col, row). Off-screen coordinates are
/// a no-op; text running past the right edge is clipped.
pub fn draw_text(frame: &mut Frame, col: i32, row: i32, text: &str, style: Style) {
    let size = frame.size();
    if row < 0 || row >= size.height as i32 || col < 0 || col >= size.width as i32 {
        return;
    }
    let width = (text.len() as u16).min(size.width - col as u16);
    if width == 0 {
        return;
    }
    let area = Rect::new(col as u16, row as u16, width, 1);
    frame.render_widget(Paragraph::new(text.to_string()).style(style), area);
}

/// Stamp a horizontally centered line.
pub fn draw_centered(frame: &mut Frame, row: i32, text: &str, style: Style) {
    let col = (frame.size().width as i32 - text.len() as i32) / 2;
    draw_text(frame, col.max(0), row, text, style);
}
