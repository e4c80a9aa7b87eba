//! Per-demo parameter records written by the controls and read once per frame.
//!
//! Handlers receive the raw string the browser gives them. A value that does not
//! parse leaves the record untouched and the error is handed back so the caller
//! can log it.

use crate::color::{parse_hex_color, Rgba, WHITE};
use crate::error::InputError;

/// Parse a range slider value. Mirrors `parseFloat` closely enough for
/// `<input type="range">`, but refuses NaN and infinities.
pub fn parse_slider_value(raw: &str) -> Result<f32, InputError> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatParams {
    /// Radians per second about the vertical axis.
    pub rotation_speed: f32,
    pub camera_distance: f32,
    pub color: Rgba,
}

impl Default for CatParams {
    fn default() -> Self {
        Self {
            rotation_speed: 1.0,
            camera_distance: 6.0,
            color: [0.2, 0.2, 0.2, 1.0],
        }
    }
}

impl CatParams {
    pub fn set_rotation_speed(&mut self, raw: &str) -> Result<(), InputError> {
        self.rotation_speed = parse_slider_value(raw)?;
        Ok(())
    }

    pub fn set_camera_distance(&mut self, raw: &str) -> Result<(), InputError> {
        self.camera_distance = parse_slider_value(raw)?;
        Ok(())
    }

    pub fn set_color(&mut self, raw: &str) -> Result<(), InputError> {
        self.color = parse_hex_color(raw)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleParams {
    /// Uniform XY scale.
    pub scale: f32,
    pub rotation_speed: f32,
    pub background: Rgba,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_speed: 0.0,
            background: WHITE,
        }
    }
}

impl TriangleParams {
    pub fn set_scale(&mut self, raw: &str) -> Result<(), InputError> {
        self.scale = parse_slider_value(raw)?;
        Ok(())
    }

    pub fn set_rotation_speed(&mut self, raw: &str) -> Result<(), InputError> {
        self.rotation_speed = parse_slider_value(raw)?;
        Ok(())
    }

    pub fn set_background(&mut self, raw: &str) -> Result<(), InputError> {
        self.background = parse_hex_color(raw)?;
        Ok(())
    }
}
