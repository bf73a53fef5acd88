//! Paddle Rally - a multi-ball paddle arcade simulation
//!
//! Core modules:
//! - `sim`: Per-frame simulation engine (round state, physics, scoring)
//! - `settings`: User-adjustable ball speed and paddle width

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Arena, Command, Engine, FrameInput, PointerDrag, RoundState, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Share of the configured speed given to each axis at launch
    pub const LAUNCH_RATIO: f32 = 0.7;
    /// Balls spawn this far above the paddle top
    pub const SPAWN_HEIGHT: f32 = 40.0;

    /// Paddle thickness; paddle top sits at arena bottom minus this
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Keyboard paddle speed (units/s)
    pub const PADDLE_SPEED: f32 = 500.0;

    /// Hit offset is clamped to ±this so rebounds never go flat or vertical-only
    pub const HIT_OFFSET_LIMIT: f32 = 0.95;
    /// Horizontal rebound multiplier applied on top of the hit offset
    pub const REBOUND_SPREAD: f32 = 1.2;

    /// Ball speed range (units/s)
    pub const BALL_SPEED_MIN: f32 = 100.0;
    pub const BALL_SPEED_MAX: f32 = 800.0;
    pub const BALL_SPEED_DEFAULT: f32 = 300.0;

    /// Full paddle width range; half-width is derived from it
    pub const PADDLE_WIDTH_MIN: f32 = 60.0;
    pub const PADDLE_WIDTH_MAX: f32 = 400.0;
    pub const PADDLE_WIDTH_DEFAULT: f32 = 180.0;

    /// Default arena used by the headless driver
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
}

/// Clamp `value` into `[min, max]`, collapsing to the midpoint when the range
/// is inverted or the value is NaN
#[inline]
pub fn clamp_or_center(value: f32, min: f32, max: f32) -> f32 {
    if min > max || value.is_nan() {
        (min + max) * 0.5
    } else {
        value.clamp(min, max)
    }
}
