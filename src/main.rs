//! Gridbreak headless demo
//!
//! Drives a full round with a naive ball-tracking paddle and no real-time
//! pacing, standing in for the render/input/timing collaborators. The
//! round-over score is handed to the high score table, the way a real
//! front end would.

use std::path::Path;

use gridbreak::sim::{BallState, RoundEvent, SimState, TickInput, tick};
use gridbreak::{HighScores, SimConfig, maps};

const CONFIG_PATH: &str = "gridbreak_config.json";
const SCORES_PATH: &str = "gridbreak_scores.json";

/// Safety valve for the demo loop; a round normally ends long before this
const MAX_TICKS: u64 = 1_000_000;

/// Track the ball: aim the paddle center at the ball's X and express that
/// as the 0..=100 input sample. 0 means "no touch", so the tracker never
/// emits it.
fn auto_paddle_sample(state: &SimState) -> u8 {
    let config = &state.config;
    let max_x = config.paddle_max_x();
    if max_x == 0 {
        return 1;
    }
    let target_x = (state.ball.pos.x - config.paddle_width / 2).clamp(0, max_x);
    let sample = target_x * 100 / max_x;
    sample.clamp(1, 100) as u8
}

fn main() {
    env_logger::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "AAA".to_string());
    let config = SimConfig::load(Path::new(CONFIG_PATH));
    let mut scores = HighScores::load(Path::new(SCORES_PATH));

    let mut state = SimState::new(config, maps::builtin());
    log::info!(
        "Starting round: {} maps, {} lives",
        state.map_count(),
        state.lives()
    );

    let final_score = loop {
        let input = TickInput {
            paddle_sample: match state.ball.state {
                // Hold still while parked so the serve is repeatable
                BallState::Parked { .. } => 0,
                BallState::Free => auto_paddle_sample(&state),
            },
        };

        match tick(&mut state, &input) {
            RoundEvent::MapCleared => {
                log::info!("Map cleared, now on map {}", state.map_index);
            }
            RoundEvent::BallLost => {
                log::info!("Ball lost, {} lives left", state.lives());
            }
            RoundEvent::RoundOver => break state.score(),
            RoundEvent::None => {}
        }

        if state.time_ticks >= MAX_TICKS {
            log::warn!("Demo hit the tick cap, stopping early");
            break state.score();
        }
    };

    println!("Round over: {name} scored {final_score}");
    if let Some(rank) = scores.record_result(&name, final_score) {
        println!("New high score, rank {rank}");
        scores.save(Path::new(SCORES_PATH));
    }
    for (i, entry) in scores.entries.iter().enumerate() {
        println!("{:>2}. {:<10} {:>6}", i + 1, entry.name, entry.score);
    }
}
