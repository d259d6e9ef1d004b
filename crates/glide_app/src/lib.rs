//! Glide Application
//!
//! Assembles platforms and charts into a [`Scene`] and drives it.
//!
//! # Example
//!
//! ```rust
//! use glide_app::prelude::*;
//!
//! let mut scene = Scene::new(&SceneConfig::default())?;
//! let mut outputs = FrameOutputs::new();
//! for tick in 0..120 {
//!     outputs.clear();
//!     scene.tick(tick, &mut outputs);
//! }
//! assert_eq!(outputs.rects.len(), 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod headless;
pub mod scene;

pub use config::{ChartLayout, ChartSpec, ChartsConfig, PlatformSpec, SceneConfig};
pub use headless::{
    HeadlessContext, HeadlessReport, HeadlessRunConfig, HeadlessRuntime, PrimitiveTotals,
};
pub use scene::{ChartGroup, Scene};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::SceneConfig;
    pub use crate::headless::{HeadlessReport, HeadlessRunConfig, HeadlessRuntime};
    pub use crate::scene::{ChartGroup, Scene};

    pub use glide_animation::{Easing, Platform, PlatformConfig, Quantity};
    pub use glide_charts::{Axes, LinearScale, ScrollingChart, Window};
    pub use glide_core::{Color, FrameOutputs, RenderSink};
}
