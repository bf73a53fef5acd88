//! Simulation engine
//!
//! Owns the round state, the user settings and the most recent arena. The
//! host drives it with `update` once per frame, sends `command`s between
//! frames, and polls `snapshot` to draw.

use super::arena::Arena;
use super::snapshot::Snapshot;
use super::state::{GameState, RoundState};
use super::tick::{Command, FrameInput, apply_command, tick};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    settings: Settings,
    arena: Arena,
}

impl Engine {
    /// Create an engine in `Waiting` with the paddle centered
    pub fn new(arena: Arena, settings: Settings) -> Self {
        let settings = settings.clamped();
        Self {
            state: GameState::new(&arena, settings.paddle_half_width()),
            settings,
            arena,
        }
    }

    /// Advance by one frame
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        self.arena = input.arena;
        tick(&mut self.state, input, &self.settings, dt);
    }

    /// Apply a command against the last known arena
    pub fn command(&mut self, command: Command) -> bool {
        apply_command(&mut self.state, command, &self.arena, &self.settings)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.arena)
    }

    pub fn round(&self) -> RoundState {
        self.state.round
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Direct state access for hosts and tests that stage positions
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Staging hook for tests; hosts should go through `update` and `command`
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Affects balls spawned from now on and future rebounds only
    pub fn set_ball_speed(&mut self, speed: f32) {
        self.settings.set_ball_speed(speed);
    }

    /// Takes effect on the paddle immediately
    pub fn set_paddle_width(&mut self, width: f32) {
        self.settings.set_paddle_width(width);
        self.state.paddle.half_width = self.settings.paddle_half_width();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Arena::default(), Settings::default())
    }
}
