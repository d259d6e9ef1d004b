//! Geometry and colour types
//!
//! Screen space is y-up: a window's `bottom` is numerically smaller than its
//! `top`.

use serde::{Deserialize, Serialize};

/// Linear interpolation from `a` to `b`, with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// RGBA color (linear space, 0..1 channels)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque colour from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Channel-wise interpolation towards `other`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color::rgba(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
            lerp(self.a, other.a, t),
        )
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp(200.0, 880.0, 0.5), 540.0);
    }

    #[test]
    fn color_lerp_moves_every_channel() {
        let from = Color::from_rgb8(90, 0, 0);
        let to = Color::from_rgb8(0, 90, 0);
        let mid = from.lerp(to, 0.5);
        assert!((mid.r - 45.0 / 255.0).abs() < 1e-6);
        assert!((mid.g - 45.0 / 255.0).abs() < 1e-6);
        assert_eq!(mid.b, 0.0);
        assert_eq!(mid.a, 1.0);
    }

    #[test]
    fn missing_alpha_deserializes_opaque() {
        let c: Color = serde_json::from_str(r#"{"r": 0.2, "g": 0.4, "b": 0.6}"#).unwrap();
        assert_eq!(c, Color::rgb(0.2, 0.4, 0.6));
    }
}
