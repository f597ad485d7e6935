//! Session logic: input-driven mode transitions and the fixed physics tick.
//!
//! All mutation of player kinematics and level best-progress happens here,
//! synchronously, once per 16ms tick. The UI layer only reads.

use super::types::{GameMode, GameSession, Player};
use crate::constants::{
    DASH_ACTIVE_FLOOR, DASH_COOLDOWN_TICKS, DASH_SPEED, GRAVITY, GROUND_ROW, JUMP_VELOCITY,
    OBSTACLE_SPACING, PLAYER_COLUMN, RUN_SPEED,
};
use crate::input::GameInput;
use crate::levels::{Level, LevelCatalog};

/// Apply one input event to the session.
///
/// Unrecognized input for the current mode is a no-op. `GameInput::Quit`
/// never reaches this function; the main loop handles it directly.
pub fn process_input(session: &mut GameSession, catalog: &LevelCatalog, input: GameInput) {
    match session.mode {
        GameMode::Menu => match input {
            GameInput::Right => {
                session.level_idx = (session.level_idx + 1) % catalog.len();
            }
            GameInput::Left => {
                session.level_idx = (session.level_idx + catalog.len() - 1) % catalog.len();
            }
            GameInput::Confirm => start_attempt(session),
            _ => {}
        },
        GameMode::Playing => match input {
            GameInput::Confirm => {
                // Jump, from the ground only. Airborne requests change nothing.
                if session.player.is_grounded() {
                    session.player.vy = JUMP_VELOCITY;
                }
            }
            GameInput::Dash => {
                if session.player.dash_timer <= 0 {
                    session.player.dashing = true;
                    session.player.dash_timer = DASH_COOLDOWN_TICKS;
                }
            }
            _ => {}
        },
        GameMode::GameOver | GameMode::Win => {
            if input == GameInput::Confirm {
                session.mode = GameMode::Menu;
            }
        }
    }
}

fn start_attempt(session: &mut GameSession) {
    session.player = Player::spawn();
    session.mode = GameMode::Playing;
}

/// Advance the session by one fixed tick. No-op outside of `Playing`.
pub fn tick(session: &mut GameSession, catalog: &mut LevelCatalog) {
    if session.mode != GameMode::Playing {
        return;
    }

    let player = &mut session.player;

    // 1. Integrate gravity and clamp to the ground.
    player.vy += GRAVITY;
    player.y += player.vy;
    if player.y >= GROUND_ROW as f32 {
        player.y = GROUND_ROW as f32;
        player.vy = 0.0;
    }

    // 2. Dash bookkeeping. The boost holds for the first 10 ticks of the
    //    30-tick cooldown window; the rest is lockout.
    if player.dash_timer > 0 {
        player.dash_timer -= 1;
        if player.dash_timer < DASH_ACTIVE_FLOOR {
            player.dashing = false;
        }
    }

    // 3. Scroll the world.
    let speed = if player.dashing { DASH_SPEED } else { RUN_SPEED };
    player.scroll_x += speed;

    // 4. Collision against the full course.
    let level = catalog.get(session.level_idx);
    if hits_obstacle(player, level) {
        session.mode = GameMode::GameOver;
    }

    // 5. Progress. Truncated before the best-progress and win comparisons;
    //    recorded even on a tick that detected a collision.
    let progress = (player.scroll_x / level.length() * 100.0) as i32;
    catalog.get_mut(session.level_idx).record_progress(progress);
    if progress >= 100 {
        session.mode = GameMode::Win;
    }
}

/// Linear scan of the course for an obstacle in the player's column whose
/// clearance the player fails. Obstacle i sits at screen position
/// `i * spacing - scroll_x + PLAYER_COLUMN`; the hit window is the open
/// interval one column left to two columns right of the player.
fn hits_obstacle(player: &Player, level: &Level) -> bool {
    let player_col = PLAYER_COLUMN as f32;
    for (i, cell) in level.map.iter().enumerate() {
        if !cell.is_hazard() {
            continue;
        }
        let obj_x = (i * OBSTACLE_SPACING) as f32 - player.scroll_x + player_col;
        if obj_x > player_col - 1.0
            && obj_x < player_col + 2.0
            && player.y > GROUND_ROW as f32 - cell.clearance()
        {
            return true;
        }
    }
    false
}
