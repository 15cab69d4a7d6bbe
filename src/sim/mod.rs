//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! step-driven:
//! - One discrete tick per external invocation
//! - No rendering, input, or timing dependencies
//! - No blocking: the ball-restart delay is counted in ticks

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use grid::BlockGrid;
pub use state::{
    Ball, BallState, Block, BlockKind, Frame, GamePhase, Paddle, RoundEvent, SimState,
};
pub use tick::{TickInput, tick};
