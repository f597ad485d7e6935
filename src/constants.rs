// Frame timing constants
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS

// Physics constants (per 16ms tick)
pub const GRAVITY: f32 = 0.12;
pub const JUMP_VELOCITY: f32 = -1.6;

// Dash constants
pub const DASH_COOLDOWN_TICKS: i32 = 30;
pub const DASH_ACTIVE_FLOOR: i32 = 20; // boost ends once the timer drops below this
pub const DASH_SPEED: f32 = 1.2;
pub const RUN_SPEED: f32 = 0.5;

// Course geometry (world units map 1:1 to screen columns)
pub const OBSTACLE_SPACING: usize = 12;
pub const PLAYER_COLUMN: u16 = 15;
pub const GROUND_ROW: u16 = 15;

// HUD constants
pub const PROGRESS_SEGMENTS: i32 = 20;
