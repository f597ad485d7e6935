//! neondash - a neon side-scrolling reflex game for the terminal.
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod levels;
pub mod ui;
