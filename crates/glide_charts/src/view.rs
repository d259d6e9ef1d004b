use glide_core::{ensure_config, Point, Result};
use serde::{Deserialize, Serialize};

/// Screen-space rectangle a chart draws into (y-up).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Window {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Window of the given size whose bottom-left corner is `(left, bottom)`.
    pub fn from_origin(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self::new(left, left + width, bottom, bottom + height)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// `left < x <= right`, the test used for guide visibility.
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left && x <= self.right
    }

    /// `bottom < y <= top`, the test used for guide visibility.
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.bottom && y <= self.top
    }

    pub fn validate(&self) -> Result<()> {
        ensure_config!(
            [self.left, self.right, self.bottom, self.top]
                .iter()
                .all(|v| v.is_finite()),
            "window edges must be finite, got {:?}",
            self
        );
        ensure_config!(
            self.right > self.left && self.top > self.bottom,
            "window must have positive width and height, got {:?}",
            self
        );
        Ok(())
    }
}

/// Data-space extents mapped onto a [`Window`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x0: f32,
    pub x1: f32,
    pub y0: f32,
    pub y1: f32,
}

impl Axes {
    pub fn new(x0: f32, x1: f32, y0: f32, y1: f32) -> Self {
        Self { x0, x1, y0, y1 }
    }
}
