//! Per-frame simulation update
//!
//! One call advances the round by the frame's wall-clock delta. Order within
//! a frame is fixed: commands, paddle, integration, walls, paddle hits,
//! death sweep, termination check.

use super::arena::Arena;
use super::collision::{hit_offset, paddle_contact, paddle_rebound, resolve_walls};
use super::state::{GameState, RoundState};
use crate::consts::PADDLE_SPEED;
use crate::settings::Settings;

/// Discrete commands from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a round from Waiting, or restart from GameOver
    Start,
    /// Stop simulating but keep score, time and balls
    Pause,
    /// Stop simulating and discard score, time and balls
    Quit,
    /// Launch one extra ball
    AddBall,
}

/// Pointer drag over the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerDrag {
    /// Paddle center follows the pointer
    Absolute(f32),
    /// Paddle moves by the drag distance since last frame
    Delta(f32),
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Current arena bounds (may change on resize)
    pub arena: Arena,
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Active drag gesture, if any
    pub drag: Option<PointerDrag>,
    /// Commands issued since the last frame, applied in order
    pub commands: Vec<Command>,
}

impl FrameInput {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            ..Default::default()
        }
    }
}

/// Apply a single command. Returns false when it does nothing in the current state.
pub fn apply_command(
    state: &mut GameState,
    command: Command,
    arena: &Arena,
    settings: &Settings,
) -> bool {
    match (command, state.round) {
        (Command::Start, RoundState::Waiting | RoundState::GameOver) => {
            state.reset_round(arena, settings.ball_speed());
            state.round = RoundState::Playing;
            log::info!("Round started");
            true
        }
        (Command::Pause, RoundState::Playing) => {
            state.round = RoundState::Waiting;
            log::info!("Round paused at score {}", state.score);
            true
        }
        (Command::Quit, RoundState::Playing) => {
            state.clear_round();
            state.round = RoundState::Waiting;
            log::info!("Round quit");
            true
        }
        (Command::AddBall, RoundState::Playing) => {
            let id = state.spawn_ball(arena, settings.ball_speed());
            log::debug!("Ball {} added ({} live)", id, state.balls.len());
            true
        }
        (command, round) => {
            log::debug!("Ignoring {:?} while {}", command, round.as_str());
            false
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, settings: &Settings, dt: f32) {
    let arena = &input.arena;

    for &command in &input.commands {
        apply_command(state, command, arena, settings);
    }

    if !dt.is_finite() || dt <= 0.0 {
        if dt != 0.0 {
            log::warn!("Treating invalid frame delta {} as zero", dt);
        }
        return;
    }

    if state.round != RoundState::Playing {
        return;
    }

    state.elapsed += dt;

    move_paddle(state, input, dt);
    step_balls(state, arena, settings, dt);
    sweep_dead_balls(state, arena);

    if state.balls.is_empty() {
        state.round = RoundState::GameOver;
        log::info!(
            "Game over: score {} after {:.1}s",
            state.score,
            state.elapsed
        );
    }
}

fn move_paddle(state: &mut GameState, input: &FrameInput, dt: f32) {
    let paddle = &mut state.paddle;

    let mut dir = 0.0;
    if input.left {
        dir -= 1.0;
    }
    if input.right {
        dir += 1.0;
    }
    paddle.center_x += dir * PADDLE_SPEED * dt;

    match input.drag {
        Some(PointerDrag::Absolute(x)) if x.is_finite() => paddle.center_x = x,
        Some(PointerDrag::Delta(dx)) if dx.is_finite() => paddle.center_x += dx,
        Some(drag) => log::warn!("Ignoring non-finite pointer drag {:?}", drag),
        None => {}
    }

    paddle.clamp_to(&input.arena);
}

/// Integrate, bounce off walls, then check paddle saves
fn step_balls(state: &mut GameState, arena: &Arena, settings: &Settings, dt: f32) {
    for ball in &mut state.balls {
        ball.integrate(dt);
        resolve_walls(ball, arena);

        if paddle_contact(ball, &state.paddle, arena) {
            let hit_pos = hit_offset(ball.pos.x, &state.paddle);
            ball.vel = paddle_rebound(ball.vel, hit_pos, settings.ball_speed());
            // Rest on the paddle so a save is never also swept as lost
            ball.pos.y = state.paddle.top(arena) - ball.radius;
            state.score += 1;
            log::debug!(
                "Ball {} saved at offset {:.2}, score {}",
                ball.id,
                hit_pos,
                state.score
            );
        }
    }
}

/// Drop every ball that reached the bottom edge
fn sweep_dead_balls(state: &mut GameState, arena: &Arena) {
    let before = state.balls.len();
    state.balls.retain(|ball| !ball.is_out(arena));
    let lost = before - state.balls.len();
    if lost > 0 {
        log::debug!("{} ball(s) lost, {} left", lost, state.balls.len());
    }
}
