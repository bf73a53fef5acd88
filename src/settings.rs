//! Game settings and preferences
//!
//! Ball speed and paddle width, adjustable at any time by the presentation
//! layer. Out-of-range values are clamped, never rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// User-adjustable gameplay settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Launch speed for newly spawned balls and rebound scale (units/s)
    ball_speed: f32,
    /// Full paddle width (units)
    paddle_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED_DEFAULT,
            paddle_width: PADDLE_WIDTH_DEFAULT,
        }
    }
}

fn clamp_setting(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

impl Settings {
    /// Create settings with both values clamped into range
    pub fn new(ball_speed: f32, paddle_width: f32) -> Self {
        Self {
            ball_speed,
            paddle_width,
        }
        .clamped()
    }

    pub fn ball_speed(&self) -> f32 {
        self.ball_speed
    }

    pub fn paddle_width(&self) -> f32 {
        self.paddle_width
    }

    /// Half of the paddle width, used for clamping and hit tests
    pub fn paddle_half_width(&self) -> f32 {
        self.paddle_width / 2.0
    }

    pub fn set_ball_speed(&mut self, speed: f32) {
        self.ball_speed = clamp_setting(speed, BALL_SPEED_MIN, BALL_SPEED_MAX, BALL_SPEED_DEFAULT);
    }

    pub fn set_paddle_width(&mut self, width: f32) {
        self.paddle_width = clamp_setting(
            width,
            PADDLE_WIDTH_MIN,
            PADDLE_WIDTH_MAX,
            PADDLE_WIDTH_DEFAULT,
        );
    }

    /// Re-apply range limits (deserialized values are unchecked)
    pub fn clamped(mut self) -> Self {
        self.set_ball_speed(self.ball_speed);
        self.set_paddle_width(self.paddle_width);
        self
    }

    /// Parse settings from JSON, clamping whatever was stored
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::clamped)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!(
                    "Loaded settings (speed {}, paddle width {})",
                    settings.ball_speed,
                    settings.paddle_width
                );
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_range() {
        let settings = Settings::default();
        assert_eq!(settings.ball_speed(), BALL_SPEED_DEFAULT);
        assert_eq!(settings.paddle_half_width(), 90.0);
    }

    #[test]
    fn test_setters_clamp() {
        let mut settings = Settings::default();
        settings.set_ball_speed(5000.0);
        assert_eq!(settings.ball_speed(), BALL_SPEED_MAX);
        settings.set_ball_speed(10.0);
        assert_eq!(settings.ball_speed(), BALL_SPEED_MIN);

        settings.set_paddle_width(1.0);
        assert_eq!(settings.paddle_width(), PADDLE_WIDTH_MIN);
        assert_eq!(settings.paddle_half_width(), 30.0);
        settings.set_paddle_width(1000.0);
        assert_eq!(settings.paddle_half_width(), 200.0);
    }

    #[test]
    fn test_nan_falls_back_to_default() {
        let mut settings = Settings::new(400.0, 100.0);
        settings.set_ball_speed(f32::NAN);
        assert_eq!(settings.ball_speed(), BALL_SPEED_DEFAULT);
    }

    #[test]
    fn test_json_clamps_stored_values() {
        let settings = Settings::from_json(r#"{"ball_speed": 9000.0, "paddle_width": 20.0}"#)
            .expect("valid json");
        assert_eq!(settings.ball_speed(), BALL_SPEED_MAX);
        assert_eq!(settings.paddle_width(), PADDLE_WIDTH_MIN);
    }

    #[test]
    fn test_json_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{"ball_speed": 250.0}"#).expect("valid json");
        assert_eq!(settings.ball_speed(), 250.0);
        assert_eq!(settings.paddle_width(), PADDLE_WIDTH_DEFAULT);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/paddle-rally/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "paddle_rally_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings::new(420.0, 240.0);
        settings.save(&path).expect("save settings");
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }
}
