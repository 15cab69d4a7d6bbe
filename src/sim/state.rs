//! Round state and core simulation types
//!
//! Everything that changes over a round lives in `SimState`, owned by one
//! instance so multiple simulations can run side by side (no globals).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::BlockGrid;
use crate::config::SimConfig;
use crate::maps::MapLayout;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay (includes the parked-ball wait)
    InRound,
    /// Lives exhausted; terminal until a new round is started
    RoundOver,
}

/// Event surfaced by a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundEvent {
    #[default]
    None,
    /// Every block destroyed; the next map was loaded and the ball parked
    MapCleared,
    /// Ball fell off-screen with lives remaining; ball parked
    BallLost,
    /// Ball fell off-screen with no lives remaining; terminal
    RoundOver,
}

/// Ball state - parked on the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Pinned above the paddle center until the given tick, velocity zero
    Parked { until_tick: u64 },
    /// Free-moving
    Free,
}

/// The ball: a square of `config.ball_size` pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    /// Per-tick displacement; components stay within [-2, 2]
    pub vel: IVec2,
    pub state: BallState,
}

/// Velocity a released ball starts with (up-right)
pub const RESTART_VELOCITY: IVec2 = IVec2::new(1, -1);

impl Ball {
    /// Park on the paddle: zero velocity, launch at `until_tick`
    pub fn park(&mut self, paddle: &Paddle, config: &SimConfig, until_tick: u64) {
        self.vel = IVec2::ZERO;
        self.state = BallState::Parked { until_tick };
        self.pin_to(paddle, config);
    }

    /// Pin position above the paddle center (called every parked tick so
    /// the ball follows the paddle)
    pub fn pin_to(&mut self, paddle: &Paddle, config: &SimConfig) {
        self.pos = IVec2::new(
            paddle.pos.x + config.paddle_width / 2 - config.ball_size / 2,
            paddle.pos.y - config.ball_size - 1,
        );
    }

    /// Release a parked ball with the fixed restart vector
    pub fn launch(&mut self) {
        self.vel = RESTART_VELOCITY;
        self.state = BallState::Free;
    }
}

/// The player's paddle; `y` is fixed for the round
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
}

impl Paddle {
    /// Centered paddle at the fixed row for this config
    pub fn centered(config: &SimConfig) -> Self {
        Self {
            pos: IVec2::new(config.paddle_max_x() / 2, config.paddle_y()),
        }
    }

    /// Map a 0..=100 input sample onto the legal X range. Sample 0 means
    /// "no touch" and is filtered out by the tick, not here.
    pub fn track_sample(&mut self, sample: u8, config: &SimConfig) {
        debug_assert!(sample <= 100, "paddle sample out of range: {sample}");
        let sample = i32::from(sample.min(100));
        self.pos.x = sample * config.paddle_max_x() / 100;
    }
}

/// Block type codes as they appear in raw map data. Code 0 is reserved
/// for an empty cell and never produces an active block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Empty,
    Clay,
    Brick,
    Stone,
    Steel,
    Wood,
    Glass,
    Slate,
    Copper,
    Shaded,
}

impl BlockKind {
    /// Decode a raw map cell. Out-of-range codes are a caller contract
    /// violation; release builds fold them into the highest kind.
    pub fn from_code(code: u8) -> Self {
        debug_assert!(code <= 9, "block type code out of range: {code}");
        match code {
            0 => Self::Empty,
            1 => Self::Clay,
            2 => Self::Brick,
            3 => Self::Stone,
            4 => Self::Steel,
            5 => Self::Wood,
            6 => Self::Glass,
            7 => Self::Slate,
            8 => Self::Copper,
            _ => Self::Shaded,
        }
    }

    /// Points awarded when a block of this kind is destroyed
    pub fn score(self) -> u32 {
        match self {
            Self::Empty => 0,
            Self::Clay => 10,
            Self::Brick => 20,
            Self::Stone => 30,
            Self::Steel => 40,
            _ => 10,
        }
    }
}

/// One destructible cell of the current map
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Block {
    pub pos: IVec2,
    pub kind: BlockKind,
    /// Cleared exactly once, on the destroying collision; never set again
    /// within the same map
    pub active: bool,
}

/// Per-tick snapshot for the render sink. Positions only; the sink never
/// mutates simulation state.
#[derive(Debug, Clone)]
pub struct Frame {
    pub ball: IVec2,
    pub paddle: IVec2,
    /// Active blocks only
    pub blocks: Vec<(IVec2, BlockKind)>,
    pub score: u32,
    pub lives: u8,
}

/// Complete simulation state for one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub config: SimConfig,
    /// Tick counter, drives the parked-ball release
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// Index of the map currently loaded; wraps modulo the map count
    pub map_index: usize,
    pub paddle: Paddle,
    pub ball: Ball,
    pub grid: BlockGrid,
    /// The map set this round cycles through
    maps: Vec<MapLayout>,
}

impl SimState {
    /// Start a fresh round: score 0, full lives, map 0 loaded, ball parked.
    ///
    /// `maps` must be non-empty; the built-in set comes from
    /// [`crate::maps::builtin`].
    pub fn new(config: SimConfig, maps: Vec<MapLayout>) -> Self {
        assert!(!maps.is_empty(), "a round needs at least one map");
        let paddle = Paddle::centered(&config);
        let mut ball = Ball {
            pos: IVec2::ZERO,
            vel: IVec2::ZERO,
            state: BallState::Free,
        };
        ball.park(&paddle, &config, config.restart_delay_ticks);
        let grid = BlockGrid::load(&maps[0], &config.grid);

        Self {
            config,
            time_ticks: 0,
            phase: GamePhase::InRound,
            score: 0,
            // Guard against unsanitized configs: lives must start positive
            // or the ball-lost decrement has no legal state to reach
            lives: config.max_lives.max(1),
            map_index: 0,
            paddle,
            ball,
            grid,
            maps,
        }
    }

    /// Load the map at `index`, wrapping modulo the map count. Loading
    /// index `maps.len()` is identical to loading index 0.
    pub fn load_map(&mut self, index: usize) {
        self.map_index = index % self.maps.len();
        self.grid = BlockGrid::load(&self.maps[self.map_index], &self.config.grid);
        log::info!("Loaded map {}", self.map_index);
    }

    /// Advance to the next map in the cycle
    pub fn advance_map(&mut self) {
        self.load_map(self.map_index + 1);
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    /// Read-only score snapshot
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Read-only lives snapshot
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Snapshot of everything the render sink needs this tick
    pub fn frame(&self) -> Frame {
        Frame {
            ball: self.ball.pos,
            paddle: self.paddle.pos,
            blocks: self
                .grid
                .iter_active()
                .map(|b| (b.pos, b.kind))
                .collect(),
            score: self.score,
            lives: self.lives,
        }
    }
}
