//! Game session: the mode state machine and fixed-tick physics.

pub mod logic;
pub mod types;

pub use types::{GameMode, GameSession, Player};
