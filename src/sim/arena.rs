//! Arena bounds
//!
//! Axis-aligned play area in simulation units. Y grows downward: `min.y` is
//! the top wall, `max.y` is the open bottom edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular playfield, supplied by the host every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub min: Vec2,
    pub max: Vec2,
}

impl Arena {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Arena anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) * 0.5
    }
}

impl Default for Arena {
    fn default() -> Self {
        use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
        Self::from_size(ARENA_WIDTH, ARENA_HEIGHT)
    }
}
