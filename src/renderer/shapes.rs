//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::games::pong::{
    BALL_SIZE, COURT_HEIGHT, COURT_WIDTH, PADDLE_HEIGHT, PADDLE_WIDTH, PLAYER_X, PongState,
    WARDEN_X,
};

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Dashed vertical line down the middle of the court
pub fn center_line() -> Vec<Vertex> {
    let dash_height: f32 = 20.0;
    let gap = 15.0;
    let width = 4.0;
    let x = (COURT_WIDTH - width) / 2.0;

    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y < COURT_HEIGHT {
        let height = dash_height.min(COURT_HEIGHT - y);
        vertices.extend(rect(
            Vec2::new(x, y),
            Vec2::new(width, height),
            colors::CENTER_LINE,
        ));
        y += dash_height + gap;
    }
    vertices
}

/// Assemble the full court frame for the current pong state
pub fn court(state: &PongState) -> Vec<Vertex> {
    let mut vertices = center_line();

    vertices.extend(rect(
        Vec2::new(PLAYER_X, state.player.y),
        Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        colors::PLAYER_PADDLE,
    ));
    vertices.extend(rect(
        Vec2::new(WARDEN_X, state.warden.y),
        Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        colors::WARDEN_PADDLE,
    ));
    vertices.extend(circle(
        state.ball.center(),
        BALL_SIZE / 2.0,
        colors::BALL,
        24,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_two_triangles() {
        let verts = rect(Vec2::ZERO, Vec2::new(10.0, 20.0), colors::BALL);
        assert_eq!(verts.len(), 6);
        // Corners cover the full extent
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 10.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 20.0);
    }

    #[test]
    fn circle_triangle_count_matches_segments() {
        let verts = circle(Vec2::ZERO, 5.0, colors::BALL, 16);
        assert_eq!(verts.len(), 16 * 3);
    }

    #[test]
    fn court_includes_both_paddles_and_ball() {
        let state = PongState::new(1);
        let verts = court(&state);
        assert!(verts.iter().any(|v| v.color == colors::PLAYER_PADDLE));
        assert!(verts.iter().any(|v| v.color == colors::WARDEN_PADDLE));
        assert!(verts.iter().any(|v| v.color == colors::BALL));
    }
}
