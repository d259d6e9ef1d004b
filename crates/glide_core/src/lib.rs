//! Glide Core
//!
//! Foundational types shared by the Glide crates:
//!
//! - **Geometry**: points and linear-space colours
//! - **Primitives**: explicit records for every kind of render output
//!   (solid rectangles, line segments, labels)
//! - **Sinks**: the [`RenderSink`] trait the per-frame update emits into, and
//!   an in-memory [`FrameOutputs`] implementation
//! - **Errors**: construction-time validation failures
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Color, FrameOutputs, RenderSink};
//!
//! let mut outputs = FrameOutputs::new();
//! outputs.push_label(100.0, 600.0, "Displacement", Color::WHITE);
//! assert_eq!(outputs.labels[0].text, "Displacement");
//! ```

pub mod error;
pub mod geometry;
pub mod primitives;
pub mod sink;

pub use error::{GlideError, Result};
pub use geometry::{lerp, Color, Point};
pub use primitives::{Label, LineSet, Segment, SolidRect};
pub use sink::{FrameOutputs, RenderSink};
