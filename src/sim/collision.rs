//! Collision detection and response
//!
//! Walls are axis-aligned: the ball is clamped back onto the bound and the
//! matching velocity component is sent back into the arena. The bottom edge
//! is open. Paddle contact is a "save": the ball always leaves upward and the
//! horizontal speed depends only on where it touched the paddle.

use glam::Vec2;

use super::arena::Arena;
use super::state::{Ball, Paddle};
use crate::consts::{HIT_OFFSET_LIMIT, REBOUND_SPREAD};

/// Which walls a ball touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// Clamp a ball against the left, right and top walls, each axis independently
///
/// The velocity component is pointed back into the arena rather than flipped,
/// which equals negation for any ball moving outward and keeps a ball left
/// outside by a shrinking arena from bouncing back out.
pub fn resolve_walls(ball: &mut Ball, arena: &Arena) -> WallContacts {
    let mut contacts = WallContacts::default();
    let r = ball.radius;

    let left = arena.min.x + r;
    let right = arena.max.x - r;
    if ball.pos.x <= left {
        ball.pos.x = left;
        ball.vel.x = ball.vel.x.abs();
        contacts.left = true;
    } else if ball.pos.x >= right {
        ball.pos.x = right;
        ball.vel.x = -ball.vel.x.abs();
        contacts.right = true;
    }

    let top = arena.min.y + r;
    if ball.pos.y <= top {
        ball.pos.y = top;
        ball.vel.y = ball.vel.y.abs();
        contacts.top = true;
    }

    contacts
}

/// Whether the ball is touching the paddle top while falling
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, arena: &Arena) -> bool {
    let r = ball.radius;
    let within_y = (ball.pos.y - paddle.top(arena)).abs() <= r;
    let within_x = (ball.pos.x - paddle.center_x).abs() <= paddle.half_width + r;
    within_y && within_x && ball.vel.y > 0.0
}

/// Normalized contact position along the paddle, clamped to ±`HIT_OFFSET_LIMIT`
pub fn hit_offset(ball_x: f32, paddle: &Paddle) -> f32 {
    if paddle.half_width <= 0.0 {
        return 0.0;
    }
    ((ball_x - paddle.center_x) / paddle.half_width).clamp(-HIT_OFFSET_LIMIT, HIT_OFFSET_LIMIT)
}

/// Outgoing velocity after a paddle save
#[inline]
pub fn paddle_rebound(vel: Vec2, hit_pos: f32, ball_speed: f32) -> Vec2 {
    Vec2::new(ball_speed * hit_pos * REBOUND_SPREAD, -vel.y.abs())
}
