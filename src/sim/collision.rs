//! Collision detection and response
//!
//! Pure functions over ball, paddle, and block rectangles. The rebound
//! model is deliberately quantized: paddle hits pick the new horizontal
//! velocity from three zones across the paddle width, and block hits
//! reflect exactly one axis, chosen by the larger center-to-center offset.

use super::state::{Ball, Block, Paddle};
use crate::config::SimConfig;

/// Reflect off the screen edges. Left/right flip `dx`; the top reflection
/// line sits `top_margin` below the true edge, leaving room for HUD icons.
/// The bottom edge is not reflected - falling past it is the ball-lost
/// signal, detected by the tick orchestration.
pub fn reflect_walls(ball: &mut Ball, config: &SimConfig) {
    if ball.pos.x <= 0 || ball.pos.x + config.ball_size >= config.screen_width {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y <= config.top_margin {
        ball.vel.y = -ball.vel.y;
    }
}

/// Paddle rebound. Triggers when the ball's bottom edge reaches 1px above
/// the paddle top while the horizontal spans overlap. Inverts `dy`, then
/// sets `dx` from the hit zone: left third -2, right third +2, middle +1.
/// The middle push is rightward on purpose; the model is not symmetric.
pub fn reflect_paddle(ball: &mut Ball, paddle: &Paddle, config: &SimConfig) -> bool {
    let hit = ball.pos.y + config.ball_size >= paddle.pos.y - 1
        && ball.pos.x + config.ball_size >= paddle.pos.x
        && ball.pos.x <= paddle.pos.x + config.paddle_width;
    if !hit {
        return false;
    }

    ball.vel.y = -ball.vel.y;

    let relative_x = ball.pos.x + config.ball_size / 2 - paddle.pos.x;
    if relative_x < config.paddle_width / 3 {
        ball.vel.x = -2;
    } else if relative_x > 2 * config.paddle_width / 3 {
        ball.vel.x = 2;
    } else {
        ball.vel.x = 1;
    }
    true
}

/// Block rebound. AABB overlap test; on overlap the axis with the larger
/// center-to-center offset is reflected and the other left alone:
/// `dx = sign(x offset)` if it dominates, else `dy = sign(y offset)`.
/// Returns whether the ball overlapped the block; the caller deactivates
/// the block and awards score.
pub fn resolve_block_hit(ball: &mut Ball, block: &Block, config: &SimConfig) -> bool {
    let bw = config.grid.block_width;
    let bh = config.grid.block_height;

    let overlap = ball.pos.x < block.pos.x + bw
        && ball.pos.x + config.ball_size > block.pos.x
        && ball.pos.y < block.pos.y + bh
        && ball.pos.y + config.ball_size > block.pos.y;
    if !overlap {
        return false;
    }

    let dx = ball.pos.x + config.ball_size / 2 - (block.pos.x + bw / 2);
    let dy = ball.pos.y + config.ball_size / 2 - (block.pos.y + bh / 2);

    if dx.abs() > dy.abs() {
        ball.vel.x = if dx > 0 { 1 } else { -1 };
    } else {
        ball.vel.y = if dy > 0 { 1 } else { -1 };
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BallState, BlockKind};
    use glam::IVec2;

    fn free_ball(x: i32, y: i32, dx: i32, dy: i32) -> Ball {
        Ball {
            pos: IVec2::new(x, y),
            vel: IVec2::new(dx, dy),
            state: BallState::Free,
        }
    }

    fn paddle_at(x: i32, config: &SimConfig) -> Paddle {
        Paddle {
            pos: IVec2::new(x, config.paddle_y()),
        }
    }

    fn block_at(x: i32, y: i32) -> Block {
        Block {
            pos: IVec2::new(x, y),
            kind: BlockKind::Clay,
            active: true,
        }
    }

    #[test]
    fn test_wall_reflection_left_right() {
        let config = SimConfig::default();

        let mut ball = free_ball(0, 30, -1, 1);
        reflect_walls(&mut ball, &config);
        assert_eq!(ball.vel.x, 1);

        let mut ball = free_ball(config.screen_width - config.ball_size, 30, 2, 1);
        reflect_walls(&mut ball, &config);
        assert_eq!(ball.vel.x, -2);
    }

    #[test]
    fn test_top_reflection_uses_margin_not_edge() {
        let config = SimConfig::default();

        // At the margin line: reflect
        let mut ball = free_ball(50, config.top_margin, 1, -1);
        reflect_walls(&mut ball, &config);
        assert_eq!(ball.vel.y, 1);

        // Just below the margin: untouched
        let mut ball = free_ball(50, config.top_margin + 1, 1, -1);
        reflect_walls(&mut ball, &config);
        assert_eq!(ball.vel.y, -1);
    }

    #[test]
    fn test_bottom_edge_is_not_reflected() {
        let config = SimConfig::default();
        let mut ball = free_ball(50, config.screen_height + 5, 1, 1);
        reflect_walls(&mut ball, &config);
        assert_eq!(ball.vel.y, 1);
    }

    // Zone boundaries with the default 20px paddle at x=30:
    // relative_x = ball.x + 1 - 30; left zone is < 6, right zone is > 13.
    #[test]
    fn test_paddle_left_zone_boundary() {
        let config = SimConfig::default();
        let paddle = paddle_at(30, &config);

        // relative_x = 5: last pixel of the left zone
        let mut ball = free_ball(34, paddle.pos.y - config.ball_size - 1, 1, 1);
        assert!(reflect_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(-2, -1));

        // relative_x = 6: first pixel of the middle zone
        let mut ball = free_ball(35, paddle.pos.y - config.ball_size - 1, 1, 1);
        assert!(reflect_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(1, -1));
    }

    #[test]
    fn test_paddle_right_zone_boundary() {
        let config = SimConfig::default();
        let paddle = paddle_at(30, &config);

        // relative_x = 13: still middle
        let mut ball = free_ball(42, paddle.pos.y - config.ball_size - 1, -1, 1);
        assert!(reflect_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(1, -1));

        // relative_x = 14: right zone
        let mut ball = free_ball(43, paddle.pos.y - config.ball_size - 1, -1, 1);
        assert!(reflect_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(2, -1));
    }

    #[test]
    fn test_paddle_miss_when_spans_disjoint() {
        let config = SimConfig::default();
        let paddle = paddle_at(30, &config);

        // Right height, but wide of the paddle
        let mut ball = free_ball(60, paddle.pos.y - 1, 1, 1);
        assert!(!reflect_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(1, 1));

        // Over the paddle, but still too high
        let mut ball = free_ball(35, paddle.pos.y - config.ball_size - 2, 1, 1);
        assert!(!reflect_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(1, 1));
    }

    #[test]
    fn test_block_hit_reflects_dominant_axis_only() {
        let config = SimConfig::default();
        let block = block_at(39, 24); // 12x6 block, center (45, 27)

        // Ball left of center, vertically centered: horizontal reflection
        let mut ball = free_ball(38, 26, 2, 1);
        assert!(resolve_block_hit(&mut ball, &block, &config));
        assert_eq!(ball.vel, IVec2::new(-1, 1));

        // Ball below center, horizontally centered: vertical reflection
        let mut ball = free_ball(44, 29, 2, -1);
        assert!(resolve_block_hit(&mut ball, &block, &config));
        assert_eq!(ball.vel, IVec2::new(2, 1));
    }

    #[test]
    fn test_block_hit_tie_prefers_vertical() {
        let config = SimConfig::default();
        let block = block_at(39, 24);

        // Ball center (47, 29) vs block center (45, 27): both offsets +2,
        // so the vertical branch wins, like the original rule
        let mut ball = free_ball(46, 28, 1, -1);
        assert!(resolve_block_hit(&mut ball, &block, &config));
        assert_eq!(ball.vel.x, 1);
        assert_eq!(ball.vel.y, 1);
    }

    #[test]
    fn test_block_miss_outside_aabb() {
        let config = SimConfig::default();
        let block = block_at(39, 24);

        let mut ball = free_ball(39 - config.ball_size, 24, 1, 1);
        assert!(!resolve_block_hit(&mut ball, &block, &config));
        assert_eq!(ball.vel, IVec2::new(1, 1));
    }
}
