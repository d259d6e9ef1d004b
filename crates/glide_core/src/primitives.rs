//! Render primitives
//!
//! One record type per kind of output, so emitting to a sink never needs a
//! runtime type test.

use serde::Serialize;

use crate::geometry::{Color, Point};

/// Filled axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SolidRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

impl SolidRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self { x, y, w, h, color }
    }
}

/// Screen-space line from `(x0, y0)` to `(x1, y1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Segment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Segment {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Shift both endpoints horizontally.
    pub fn shift_x(&mut self, dx: f32) {
        self.x0 += dx;
        self.x1 += dx;
    }

    pub fn is_horizontal(&self) -> bool {
        self.y0 == self.y1 && self.x0 != self.x1
    }

    pub fn is_vertical(&self) -> bool {
        self.x0 == self.x1 && self.y0 != self.y1
    }
}

/// A group of segments drawn with one colour.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LineSet {
    pub segments: Vec<Segment>,
    pub color: Color,
}

impl LineSet {
    pub fn new(segments: Vec<Segment>, color: Color) -> Self {
        Self { segments, color }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Text anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Color,
}

impl Label {
    pub fn new(x: f32, y: f32, text: impl Into<String>, color: Color) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
        }
    }
}
