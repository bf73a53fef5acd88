//! Read-only view of the engine for drawing and HUD text

use glam::Vec2;
use serde::Serialize;

use super::arena::Arena;
use super::state::{GameState, RoundState};

/// Position and size of one live ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub round: RoundState,
    pub score: u64,
    pub elapsed: f32,
    pub paddle_center_x: f32,
    pub paddle_half_width: f32,
    pub paddle_top: f32,
    /// Live balls in simulation order
    pub balls: Vec<BallView>,
}

impl Snapshot {
    pub fn capture(state: &GameState, arena: &Arena) -> Self {
        Self {
            round: state.round,
            score: state.score,
            elapsed: state.elapsed,
            paddle_center_x: state.paddle.center_x,
            paddle_half_width: state.paddle.half_width,
            paddle_top: state.paddle.top(arena),
            balls: state
                .balls
                .iter()
                .map(|b| BallView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
        }
    }
}
