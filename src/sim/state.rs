//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::clamp_or_center;
use crate::consts::*;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Idle, settings editable, waiting for a start command
    #[default]
    Waiting,
    /// Active simulation
    Playing,
    /// Every ball has fallen out; only a restart leaves this state
    GameOver,
}

impl RoundState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Waiting => "Waiting",
            RoundState::Playing => "Playing",
            RoundState::GameOver => "GameOver",
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    /// Ball launched from above the paddle, up and to the right
    pub fn launched(id: u32, paddle: &Paddle, arena: &Arena, speed: f32) -> Self {
        let pos = Vec2::new(paddle.center_x, paddle.top(arena) - SPAWN_HEIGHT);
        let vel = Vec2::new(speed * LAUNCH_RATIO, -speed * LAUNCH_RATIO);
        Self::new(id, pos, vel)
    }

    /// Advance position by one explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// True once the ball has reached the open bottom edge
    #[inline]
    pub fn is_out(&self, arena: &Arena) -> bool {
        self.pos.y >= arena.max.y - self.radius
    }
}

/// The player's paddle, a horizontal bar resting on the arena bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub center_x: f32,
    pub half_width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(center_x: f32, half_width: f32) -> Self {
        Self {
            center_x,
            half_width,
            height: PADDLE_HEIGHT,
        }
    }

    /// Y of the paddle's upper surface
    #[inline]
    pub fn top(&self, arena: &Arena) -> f32 {
        arena.max.y - self.height
    }

    /// Keep the whole segment inside the arena's horizontal extent
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.center_x = clamp_or_center(
            self.center_x,
            arena.min.x + self.half_width,
            arena.max.x - self.half_width,
        );
    }

    pub fn recenter(&mut self, arena: &Arena) {
        self.center_x = arena.center_x();
    }
}

/// Complete round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub round: RoundState,
    /// Paddle hits this round
    pub score: u64,
    /// Seconds spent in Playing this round
    pub elapsed: f32,
    /// Player paddle
    pub paddle: Paddle,
    /// Live balls (ascending id)
    pub balls: Vec<Ball>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state in Waiting with the paddle centered
    pub fn new(arena: &Arena, paddle_half_width: f32) -> Self {
        Self {
            round: RoundState::Waiting,
            score: 0,
            elapsed: 0.0,
            paddle: Paddle::new(arena.center_x(), paddle_half_width),
            balls: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Append one ball above the paddle
    pub fn spawn_ball(&mut self, arena: &Arena, speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.balls.push(Ball::launched(id, &self.paddle, arena, speed));
        id
    }

    /// Zero score and time and drop every ball
    pub fn clear_round(&mut self) {
        self.score = 0;
        self.elapsed = 0.0;
        self.balls.clear();
    }

    /// Set up a new round: cleared counters, centered paddle, one ball
    pub fn reset_round(&mut self, arena: &Arena, speed: f32) {
        self.clear_round();
        self.paddle.recenter(arena);
        self.paddle.clamp_to(arena);
        self.spawn_ball(arena, speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waiting() {
        let arena = Arena::from_size(900.0, 600.0);
        let state = GameState::new(&arena, 90.0);
        assert_eq!(state.round, RoundState::Waiting);
        assert_eq!(state.score, 0);
        assert!(state.balls.is_empty());
        assert_eq!(state.paddle.center_x, 450.0);
        assert_eq!(state.paddle.top(&arena), 588.0);
    }

    #[test]
    fn test_launched_ball() {
        let arena = Arena::from_size(900.0, 600.0);
        let paddle = Paddle::new(300.0, 90.0);
        let ball = Ball::launched(7, &paddle, &arena, 200.0);
        assert_eq!(ball.pos, Vec2::new(300.0, 548.0));
        assert!((ball.vel.x - 140.0).abs() < 1e-4);
        assert!((ball.vel.y + 140.0).abs() < 1e-4);
        assert_eq!(ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_paddle_clamp() {
        let arena = Arena::from_size(900.0, 600.0);
        let mut paddle = Paddle::new(-50.0, 90.0);
        paddle.clamp_to(&arena);
        assert_eq!(paddle.center_x, 90.0);

        paddle.center_x = 2000.0;
        paddle.clamp_to(&arena);
        assert_eq!(paddle.center_x, 810.0);
    }

    #[test]
    fn test_paddle_wider_than_arena_centers() {
        let arena = Arena::from_size(100.0, 600.0);
        let mut paddle = Paddle::new(10.0, 90.0);
        paddle.clamp_to(&arena);
        assert_eq!(paddle.center_x, 50.0);
    }

    #[test]
    fn test_ball_out_at_bottom_edge() {
        let arena = Arena::from_size(900.0, 600.0);
        let mut ball = Ball::new(1, Vec2::new(450.0, 591.0), Vec2::ZERO);
        assert!(!ball.is_out(&arena));
        ball.pos.y = 592.0;
        assert!(ball.is_out(&arena));
    }

    #[test]
    fn test_reset_round() {
        let arena = Arena::from_size(900.0, 600.0);
        let mut state = GameState::new(&arena, 90.0);
        state.score = 12;
        state.elapsed = 3.5;
        state.paddle.center_x = 100.0;
        state.spawn_ball(&arena, 300.0);
        state.spawn_ball(&arena, 300.0);

        state.reset_round(&arena, 300.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.paddle.center_x, 450.0);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].pos, Vec2::new(450.0, 548.0));
    }

    #[test]
    fn test_entity_ids_increase() {
        let arena = Arena::default();
        let mut state = GameState::new(&arena, 90.0);
        let a = state.spawn_ball(&arena, 300.0);
        let b = state.spawn_ball(&arena, 300.0);
        assert!(b > a);
    }
}
