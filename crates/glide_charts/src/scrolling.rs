//! Fixed-capacity scrolling line chart.
//!
//! Each appended sample becomes one screen-space segment joining it to the
//! previous sample. Once the chart holds `capacity` segments, every append
//! evicts the oldest one and scrolls everything left so the new oldest point
//! sits on the window's left edge. Scrolling rebases the x scale and shifts
//! the retained x-coordinates in place; nothing is re-mapped from data space.

use std::collections::VecDeque;

use glide_core::{ensure_config, Color, Point, RenderSink, Result, Segment};
use serde::{Deserialize, Serialize};

use crate::scale::LinearScale;
use crate::view::{Axes, Window};

/// Visual styling for a scrolling chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub line: Color,
    pub guide: Color,
    pub text: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line: Color::WHITE,
            guide: Color::rgba(1.0, 1.0, 1.0, 0.35),
            text: Color::WHITE,
        }
    }
}

/// Zero-value guide lines currently inside the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisGuides {
    /// Across the window at data value 0
    pub horizontal: Option<Segment>,
    /// Top to bottom at data time 0
    pub vertical: Option<Segment>,
}

impl AxisGuides {
    pub fn count(&self) -> usize {
        self.horizontal.is_some() as usize + self.vertical.is_some() as usize
    }
}

#[derive(Clone, Debug)]
pub struct ScrollingChart {
    label: String,
    capacity: usize,
    window: Window,
    x_axis: LinearScale,
    y_axis: LinearScale,
    segments: VecDeque<Segment>,
    total_shift: f32,
    style: ChartStyle,
}

impl ScrollingChart {
    pub fn new(
        label: impl Into<String>,
        capacity: usize,
        window: Window,
        axes: Axes,
    ) -> Result<Self> {
        let label = label.into();
        ensure_config!(capacity > 0, "chart '{label}' capacity must be > 0");
        window.validate()?;
        let x_axis = LinearScale::new(axes.x0, axes.x1, window.left, window.right)?;
        let y_axis = LinearScale::new(axes.y0, axes.y1, window.bottom, window.top)?;

        tracing::debug!(label = %label, capacity, ?window, ?axes, "chart created");

        Ok(Self {
            label,
            capacity,
            window,
            x_axis,
            y_axis,
            segments: VecDeque::with_capacity(capacity),
            total_shift: 0.0,
            style: ChartStyle::default(),
        })
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn x_axis(&self) -> &LinearScale {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &LinearScale {
        &self.y_axis
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Oldest first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    /// Sum of every leftward scroll applied by evictions so far.
    pub fn total_shift(&self) -> f32 {
        self.total_shift
    }

    /// Record one sample, scrolling first if the chart is full.
    pub fn append(&mut self, x_value: f32, y_value: f32) -> &mut Self {
        if self.segments.len() >= self.capacity {
            self.evict_oldest();
        }

        let p1 = Point::new(self.x_axis.map(x_value), self.y_axis.map(y_value));
        let p0 = self.segments.back().map(Segment::end).unwrap_or(p1);
        self.segments.push_back(Segment::between(p0, p1));
        self
    }

    fn evict_oldest(&mut self) {
        let Some(evicted) = self.segments.pop_front() else {
            return;
        };
        let x_off = evicted.x1 - self.window.left;
        self.x_axis.rebase(x_off);
        for segment in self.segments.iter_mut() {
            segment.shift_x(-x_off);
        }
        self.total_shift += x_off;
        tracing::trace!(label = %self.label, x_off, "chart scrolled");
    }

    /// Guide lines for the data-space origin, if it is inside the window.
    pub fn guides(&self) -> AxisGuides {
        let w = &self.window;
        let y0 = self.y_axis.map(0.0);
        let x0 = self.x_axis.map(0.0);
        AxisGuides {
            horizontal: w
                .spans_y(y0)
                .then(|| Segment::new(w.left, y0, w.right, y0)),
            vertical: w
                .spans_x(x0)
                .then(|| Segment::new(x0, w.bottom, x0, w.top)),
        }
    }

    /// Emit guides, the series polyline and the label.
    ///
    /// Takes `&mut self` only to straighten the ring buffer so the series can
    /// be lent to the sink as one slice.
    pub fn draw(&mut self, sink: &mut dyn RenderSink) -> &mut Self {
        let guides = self.guides();
        for guide in [guides.horizontal, guides.vertical].into_iter().flatten() {
            sink.push_lines(std::slice::from_ref(&guide), self.style.guide);
        }
        sink.push_lines(self.segments.make_contiguous(), self.style.line);
        let corner = self.window.top_left();
        sink.push_label(corner.x, corner.y, &self.label, self.style.text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::FrameOutputs;

    fn chart(capacity: usize) -> ScrollingChart {
        ScrollingChart::new(
            "Displacement",
            capacity,
            Window::new(100.0, 400.0, 500.0, 600.0),
            Axes::new(-1.0, capacity as f32, -0.1, 1.1),
        )
        .unwrap()
    }

    #[test]
    fn first_sample_is_a_degenerate_segment() {
        let mut c = chart(10);
        c.append(0.0, 0.5);
        let s = *c.segments().next().unwrap();
        assert_eq!(s.start(), s.end());
        assert!((s.y0 - 550.0).abs() < 1e-3);
    }

    #[test]
    fn segments_chain_end_to_start() {
        let mut c = chart(10);
        for t in 0..5 {
            c.append(t as f32, t as f32 * 0.2);
        }
        let segs: Vec<_> = c.segments().copied().collect();
        assert_eq!(segs.len(), 5);
        for w in segs.windows(2) {
            assert_eq!(w[0].end(), w[1].start());
        }
    }

    #[test]
    fn eviction_keeps_capacity_and_left_anchor() {
        let mut c = chart(4);
        for t in 0..9 {
            c.append(t as f32, 0.5).append(t as f32 + 0.5, 0.5);
        }
        assert_eq!(c.len(), 4);
        let first = c.segments().next().unwrap();
        assert!((first.x0 - 100.0).abs() < 1e-3);
        assert!(c.total_shift() > 0.0);
    }

    #[test]
    fn eviction_leaves_y_untouched() {
        let mut c = chart(3);
        c.append(0.0, 0.0).append(1.0, 1.0).append(2.0, 0.0);
        let before: Vec<_> = c.segments().skip(1).map(|s| (s.y0, s.y1)).collect();
        c.append(3.0, 1.0);
        let after: Vec<_> = c.segments().take(2).map(|s| (s.y0, s.y1)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn rejects_zero_capacity_and_bad_geometry() {
        let w = Window::new(0.0, 1.0, 0.0, 1.0);
        let a = Axes::new(0.0, 1.0, 0.0, 1.0);
        assert!(ScrollingChart::new("x", 0, w, a).is_err());
        assert!(ScrollingChart::new("x", 1, Window::new(1.0, 0.0, 0.0, 1.0), a).is_err());
        assert!(ScrollingChart::new("x", 1, w, Axes::new(0.0, 0.0, 0.0, 1.0)).is_err());
        assert!(ScrollingChart::new("x", 1, w, Axes::new(0.0, 1.0, 2.0, 2.0)).is_err());
    }

    #[test]
    fn draw_emits_guides_series_and_label() {
        let mut c = ScrollingChart::new(
            "Velocity",
            100,
            Window::new(500.0, 800.0, 500.0, 600.0),
            Axes::new(-1.0, 100.0, -1.0, 1.0),
        )
        .unwrap();
        c.append(0.0, 0.0).append(1.0, 0.5);

        let mut out = FrameOutputs::new();
        c.draw(&mut out);

        // Both guides, then the series.
        assert_eq!(out.lines.len(), 3);
        assert!(out.lines[0].segments[0].is_horizontal());
        assert!(out.lines[1].segments[0].is_vertical());
        assert_eq!(out.lines[2].len(), 2);
        assert_eq!(out.labels.len(), 1);
        assert_eq!(out.labels[0].text, "Velocity");
        assert_eq!((out.labels[0].x, out.labels[0].y), (500.0, 600.0));
    }

    #[test]
    fn empty_chart_still_draws_an_empty_series() {
        let mut c = chart(5);
        let mut out = FrameOutputs::new();
        c.draw(&mut out);
        assert!(out.lines.last().unwrap().is_empty());
        assert_eq!(out.labels.len(), 1);
    }

    #[test]
    fn draw_after_wraparound_emits_series_oldest_first() {
        let mut c = chart(4);
        for t in 0..11 {
            c.append(t as f32, (t % 3) as f32 * 0.5);
        }
        let expected: Vec<Segment> = c.segments().copied().collect();

        let mut out = FrameOutputs::new();
        c.draw(&mut out);
        let series = &out.lines.last().unwrap().segments;
        assert_eq!(series, &expected);
        for w in series.windows(2) {
            assert_eq!(w[0].end(), w[1].start());
        }
    }

    #[test]
    fn style_colours_reach_the_sink() {
        let style = ChartStyle {
            line: Color::rgb(1.0, 0.0, 0.0),
            guide: Color::rgb(0.0, 1.0, 0.0),
            text: Color::rgb(0.0, 0.0, 1.0),
        };
        let mut c = chart(5).with_style(style);
        c.append(0.0, 0.5);

        let mut out = FrameOutputs::new();
        c.draw(&mut out);
        assert_eq!(out.lines[0].color, style.guide);
        assert_eq!(out.lines.last().unwrap().color, style.line);
        assert_eq!(out.labels[0].color, style.text);
    }

    #[test]
    fn vertical_guide_scrolls_out_of_view() {
        let mut c = chart(10);
        assert!(c.guides().vertical.is_some());
        for t in 0..20 {
            c.append(t as f32, 0.5);
        }
        assert!(c.guides().vertical.is_none());
    }
}
