//! Session data structures.

use crate::constants::GROUND_ROW;

/// Top-level mode of the session. `Player` is meaningful only in `Playing`;
/// in every other mode it is stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    GameOver,
    Win,
}

/// Player kinematics for a single attempt.
#[derive(Debug, Clone)]
pub struct Player {
    /// Row of the player's feet (float for smooth physics).
    /// GROUND_ROW = standing, lower values = higher in the air.
    pub y: f32,
    /// Vertical velocity in rows/tick (positive = downward).
    pub vy: f32,
    /// Cumulative horizontal distance scrolled this attempt, in world units.
    pub scroll_x: f32,
    /// True while the dash speed boost is active.
    pub dashing: bool,
    /// Dash cooldown counter; a new dash is allowed only at <= 0.
    pub dash_timer: i32,
}

impl Player {
    /// Fresh player standing at the start of the course.
    pub fn spawn() -> Self {
        Self {
            y: GROUND_ROW as f32,
            vy: 0.0,
            scroll_x: 0.0,
            dashing: false,
            dash_timer: 0,
        }
    }

    /// Jumps are only legal from the ground.
    pub fn is_grounded(&self) -> bool {
        self.y >= GROUND_ROW as f32
    }
}

/// Everything the main loop owns about the running session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub mode: GameMode,
    /// Index into the level catalog, cycled from the menu.
    pub level_idx: usize,
    pub player: Player,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            level_idx: 0,
            player: Player::spawn(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
