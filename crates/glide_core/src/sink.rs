//! Output sinks
//!
//! The host hands a sink to the per-frame update; everything the scene draws
//! for that frame is appended to it.

use serde::Serialize;

use crate::geometry::Color;
use crate::primitives::{Label, LineSet, Segment, SolidRect};

/// Append-only destination for render primitives.
///
/// Line and label payloads are lent for the duration of the call. A sink that
/// needs to keep them makes its own copy.
pub trait RenderSink {
    fn push_rect(&mut self, rect: SolidRect);
    fn push_lines(&mut self, segments: &[Segment], color: Color);
    fn push_label(&mut self, x: f32, y: f32, text: &str, color: Color);
}

/// In-memory sink holding one frame's worth of primitives.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameOutputs {
    pub rects: Vec<SolidRect>,
    pub lines: Vec<LineSet>,
    pub labels: Vec<Label>,
}

impl FrameOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all primitives, keeping allocations for the next frame.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.lines.clear();
        self.labels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.lines.is_empty() && self.labels.is_empty()
    }

    pub fn primitive_count(&self) -> usize {
        self.rects.len() + self.lines.len() + self.labels.len()
    }

    /// Total number of segments across all line sets.
    pub fn segment_count(&self) -> usize {
        self.lines.iter().map(LineSet::len).sum()
    }
}

impl RenderSink for FrameOutputs {
    fn push_rect(&mut self, rect: SolidRect) {
        self.rects.push(rect);
    }

    fn push_lines(&mut self, segments: &[Segment], color: Color) {
        self.lines.push(LineSet::new(segments.to_vec(), color));
    }

    fn push_label(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.labels.push(Label::new(x, y, text, color));
    }
}
