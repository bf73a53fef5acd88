//! Simulation module
//!
//! All gameplay logic lives here. This module is pure and single-threaded:
//! - One `update` per frame, no suspension points
//! - Stable iteration order (balls kept in spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod engine;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{WallContacts, hit_offset, paddle_contact, paddle_rebound, resolve_walls};
pub use engine::Engine;
pub use snapshot::{BallView, Snapshot};
pub use state::{Ball, GameState, Paddle, RoundState};
pub use tick::{Command, FrameInput, PointerDrag, apply_command, tick};
