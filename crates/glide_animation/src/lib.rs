//! Glide Animation System
//!
//! Easing curves and the tick-driven motion platforms that use them.
//!
//! # Features
//!
//! - **Easing**: identity, raised cubic (smoothstep) and raised quintic
//!   (smootherstep) curves on `[0, 1]`
//! - **Platforms**: back-and-forth oscillators with a pause between moves,
//!   deriving velocity and acceleration by backward finite differences
//! - **Deterministic**: driven only by the host frame counter, never a clock

pub mod easing;
pub mod platform;
pub mod quantity;

pub use easing::{Easing, EasingFn};
pub use platform::{Kinematics, Platform, PlatformConfig, DEFAULT_TICK_RATE};
pub use quantity::Quantity;
