//! Collision detection and response for the rectangular court
//!
//! The ball is an axis-aligned square; paddles are fixed-x vertical bars.
//! Paddle hits only count when the ball is moving toward the paddle, so a
//! ball escaping a deep overlap cannot be captured.

use super::state::{Ball, Paddle};
use super::*;

/// Reflect the ball off the top/bottom walls, clamping it back inside.
/// Returns true if a wall was hit.
pub fn ball_wall_collision(ball: &mut Ball) -> bool {
    if ball.pos.y < 0.0 || ball.pos.y > COURT_HEIGHT - BALL_SIZE {
        ball.vel.y = -ball.vel.y;
        // Clamp to prevent sticking
        ball.pos.y = ball.pos.y.clamp(0.0, COURT_HEIGHT - BALL_SIZE);
        true
    } else {
        false
    }
}

fn vertical_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + BALL_SIZE > paddle.y && ball.pos.y < paddle.y + PADDLE_HEIGHT
}

/// Ball is striking the player paddle's face (left side, inbound only)
pub fn ball_hits_player(ball: &Ball, paddle: &Paddle) -> bool {
    ball.vel.x < 0.0 && ball.pos.x <= PLAYER_X + PADDLE_WIDTH && vertical_overlap(ball, paddle)
}

/// Ball is striking the warden paddle's face (right side, inbound only)
pub fn ball_hits_warden(ball: &Ball, paddle: &Paddle) -> bool {
    ball.vel.x > 0.0 && ball.pos.x + BALL_SIZE >= WARDEN_X && vertical_overlap(ball, paddle)
}

/// Shared paddle response: flip and boost the horizontal velocity, add
/// vertical deflection proportional to the contact offset, cap both axes.
pub fn deflect(ball: &mut Ball, paddle: &Paddle) {
    let offset = ball.center().y - paddle.center_y();
    ball.vel.x = (-ball.vel.x * PADDLE_BOOST).clamp(-BALL_MAX_SPEED, BALL_MAX_SPEED);
    ball.vel.y = (ball.vel.y + offset * SPIN_FACTOR).clamp(-BALL_MAX_SPEED, BALL_MAX_SPEED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        }
    }

    #[test]
    fn wall_bounce_flips_vy_and_clamps() {
        let mut ball = ball_at(100.0, -4.0, 120.0, -200.0);
        assert!(ball_wall_collision(&mut ball));
        assert_eq!(ball.vel.y, 200.0);
        assert_eq!(ball.pos.y, 0.0);

        let mut ball = ball_at(100.0, COURT_HEIGHT, 120.0, 200.0);
        assert!(ball_wall_collision(&mut ball));
        assert_eq!(ball.vel.y, -200.0);
        assert_eq!(ball.pos.y, COURT_HEIGHT - BALL_SIZE);
    }

    #[test]
    fn no_wall_bounce_inside_court() {
        let mut ball = ball_at(100.0, 300.0, 120.0, 200.0);
        assert!(!ball_wall_collision(&mut ball));
        assert_eq!(ball.vel.y, 200.0);
    }

    #[test]
    fn player_hit_requires_inbound_ball() {
        let paddle = Paddle { y: 250.0 };
        let inbound = ball_at(PLAYER_X + 5.0, 290.0, -300.0, 0.0);
        assert!(ball_hits_player(&inbound, &paddle));

        // Same position, moving away: no capture
        let outbound = ball_at(PLAYER_X + 5.0, 290.0, 300.0, 0.0);
        assert!(!ball_hits_player(&outbound, &paddle));
    }

    #[test]
    fn player_miss_outside_paddle_span() {
        let paddle = Paddle { y: 250.0 };
        let above = ball_at(PLAYER_X + 5.0, 100.0, -300.0, 0.0);
        assert!(!ball_hits_player(&above, &paddle));
    }

    #[test]
    fn warden_hit_mirrors_player() {
        let paddle = Paddle { y: 250.0 };
        let inbound = ball_at(WARDEN_X - 5.0, 290.0, 300.0, 0.0);
        assert!(ball_hits_warden(&inbound, &paddle));
        let outbound = ball_at(WARDEN_X - 5.0, 290.0, -300.0, 0.0);
        assert!(!ball_hits_warden(&outbound, &paddle));
    }

    #[test]
    fn deflect_flips_sign_and_boosts() {
        let paddle = Paddle { y: 250.0 };
        let mut ball = ball_at(PLAYER_X + 5.0, 292.5, -400.0, 0.0);
        deflect(&mut ball, &paddle);
        assert!(ball.vel.x > 0.0, "horizontal sign must flip");
        assert!((ball.vel.x - 420.0).abs() < 0.01, "5% boost expected");
    }

    #[test]
    fn deflect_adds_offset_spin() {
        let paddle = Paddle { y: 250.0 };
        // Contact above the paddle centre deflects upward
        let mut high = ball_at(PLAYER_X + 5.0, paddle.y, -400.0, 0.0);
        deflect(&mut high, &paddle);
        assert!(high.vel.y < 0.0);

        // Contact below deflects downward
        let mut low = ball_at(PLAYER_X + 5.0, paddle.y + PADDLE_HEIGHT - BALL_SIZE, -400.0, 0.0);
        deflect(&mut low, &paddle);
        assert!(low.vel.y > 0.0);
    }

    #[test]
    fn deflect_caps_speed() {
        let paddle = Paddle { y: 250.0 };
        let mut ball = ball_at(PLAYER_X + 5.0, 292.5, -BALL_MAX_SPEED, 0.0);
        deflect(&mut ball, &paddle);
        assert!(ball.vel.x <= BALL_MAX_SPEED);
        assert!(ball.vel.y.abs() <= BALL_MAX_SPEED);
    }
}
