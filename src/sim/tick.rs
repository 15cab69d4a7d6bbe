//! One simulation tick
//!
//! Advances the round by exactly one step, in a fixed order: sample input,
//! move (or hold) the ball, wall and paddle reflections, the block scan,
//! then the map-complete and ball-lost checks. Map completion is checked
//! before the fall-through check, so a ball that destroys the last block
//! and drops off-screen in the same tick resolves as the map being cleared.

use super::collision;
use super::state::{BallState, GamePhase, RoundEvent, SimState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Paddle position sample, 0..=100. Zero means "no touch": the paddle
    /// holds its position.
    pub paddle_sample: u8,
}

/// Advance the simulation by one tick. Never blocks; the parked-ball delay
/// is counted in ticks. Ticking a finished round is a no-op.
pub fn tick(state: &mut SimState, input: &TickInput) -> RoundEvent {
    if state.phase == GamePhase::RoundOver {
        return RoundEvent::None;
    }
    state.time_ticks += 1;

    if input.paddle_sample != 0 {
        state.paddle.track_sample(input.paddle_sample, &state.config);
    }

    // A parked ball follows the paddle and launches once its delay expires;
    // it cannot collide or fall while parked.
    if let BallState::Parked { until_tick } = state.ball.state {
        state.ball.pin_to(&state.paddle, &state.config);
        if state.time_ticks >= until_tick {
            state.ball.launch();
            log::debug!("Ball launched at tick {}", state.time_ticks);
        }
        return RoundEvent::None;
    }

    state.ball.pos += state.ball.vel;

    collision::reflect_walls(&mut state.ball, &state.config);
    collision::reflect_paddle(&mut state.ball, &state.paddle, &state.config);

    // Linear scan in grid order. The scan does not stop at the first hit:
    // every overlapped block is deactivated and scored, and the last
    // resolved overlap decides the reflection.
    for block in state.grid.iter_mut() {
        if block.active && collision::resolve_block_hit(&mut state.ball, block, &state.config) {
            block.active = false;
            state.score += block.kind.score();
            log::debug!("Block {:?} destroyed, score {}", block.kind, state.score);
        }
    }

    if state.grid.all_inactive() {
        state.advance_map();
        let until = state.time_ticks + state.config.restart_delay_ticks;
        state.ball.park(&state.paddle, &state.config, until);
        log::info!("Map cleared, score {}", state.score);
        return RoundEvent::MapCleared;
    }

    if state.ball.pos.y > state.config.screen_height {
        state.lives -= 1;
        if state.lives == 0 {
            state.phase = GamePhase::RoundOver;
            log::info!("Round over, final score {}", state.score);
            return RoundEvent::RoundOver;
        }
        let until = state.time_ticks + state.config.restart_delay_ticks;
        state.ball.park(&state.paddle, &state.config, until);
        log::info!("Ball lost, {} lives left", state.lives);
        return RoundEvent::BallLost;
    }

    RoundEvent::None
}
