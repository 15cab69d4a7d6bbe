//! Gridbreak - a paddle-and-bricks simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, round state)
//! - `config`: Data-driven geometry and rules
//! - `maps`: Built-in block layouts
//! - `highscores`: Top-score table with JSON persistence
//!
//! The crate never renders, never sleeps, and never reads input devices.
//! Callers drive it one tick at a time with a normalized paddle sample and
//! consume per-tick snapshots plus round events.

pub mod config;
pub mod highscores;
pub mod maps;
pub mod sim;

pub use config::{GridGeometry, SimConfig};
pub use highscores::HighScores;
pub use sim::{Frame, RoundEvent, SimState, TickInput, tick};

/// Default geometry and rules, matching the 128x64 OLED layout the engine
/// was tuned for. `SimConfig::default()` is built from these.
pub mod consts {
    /// Screen width in pixels
    pub const SCREEN_WIDTH: i32 = 128;
    /// Screen height in pixels
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 5;
    /// Gap between the paddle underside and the bottom edge
    pub const PADDLE_BOTTOM_GAP: i32 = 5;

    /// Ball is a square of this side length
    pub const BALL_SIZE: i32 = 2;

    /// Block dimensions
    pub const BLOCK_WIDTH: i32 = 12;
    pub const BLOCK_HEIGHT: i32 = 6;
    /// Gap between adjacent blocks, both axes
    pub const BLOCK_SPACING: i32 = 1;
    /// First block row starts this far below the top edge; the ball also
    /// reflects off this line rather than the true edge (HUD margin)
    pub const TOP_MARGIN: i32 = 10;

    /// Lives at round start
    pub const MAX_LIVES: u8 = 3;
    /// Ticks a freshly parked ball waits before launching
    pub const RESTART_DELAY_TICKS: u64 = 50;
}
