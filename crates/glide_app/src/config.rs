//! Scene configuration file handling

use anyhow::{bail, Context, Result};
use glide_animation::{Easing, PlatformConfig, Quantity, DEFAULT_TICK_RATE};
use glide_charts::{Axes, ChartStyle, Window};
use glide_core::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level scene configuration (glide.toml)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    /// Frames per second used for velocity and acceleration scaling
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f32,
    /// Samples retained by every chart
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<PlatformSpec>,
    #[serde(default)]
    pub charts: ChartsConfig,
}

fn default_tick_rate() -> f32 {
    DEFAULT_TICK_RATE
}

fn default_points() -> usize {
    100
}

fn default_platforms() -> Vec<PlatformSpec> {
    [
        (600.0, Easing::Identity),
        (400.0, Easing::RaisedCubic),
        (200.0, Easing::RaisedQuintic),
    ]
    .into_iter()
    .map(|(y, easing)| PlatformSpec {
        easing,
        ..PlatformSpec::new([200.0, 880.0], [y, y])
    })
    .collect()
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            points: default_points(),
            platforms: default_platforms(),
            charts: ChartsConfig::default(),
        }
    }
}

/// One oscillating platform.
///
/// Durations can be given in ticks or in seconds, but not both.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformSpec {
    pub x: [f32; 2],
    pub y: [f32; 2],
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_ticks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_seconds: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_ticks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_seconds: Option<f32>,
    #[serde(default)]
    pub easing: Easing,
    /// Tick of the first move; half the pause when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_from: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_to: Option<Color>,
}

fn default_width() -> f32 {
    200.0
}

fn default_height() -> f32 {
    50.0
}

const DEFAULT_PAUSE_SECONDS: f32 = 1.0;
const DEFAULT_MOVE_SECONDS: f32 = 2.0;

impl PlatformSpec {
    pub fn new(x: [f32; 2], y: [f32; 2]) -> Self {
        Self {
            x,
            y,
            width: default_width(),
            height: default_height(),
            pause_ticks: None,
            pause_seconds: None,
            move_ticks: None,
            move_seconds: None,
            easing: Easing::Identity,
            phase_offset: None,
            color_from: None,
            color_to: None,
        }
    }

    /// Resolve durations against `tick_rate` and build the platform config.
    pub fn to_platform_config(&self, tick_rate: f32) -> Result<PlatformConfig> {
        let pause = resolve_ticks(
            "pause",
            self.pause_ticks,
            self.pause_seconds,
            DEFAULT_PAUSE_SECONDS,
            tick_rate,
        )?;
        let duration = resolve_ticks(
            "move",
            self.move_ticks,
            self.move_seconds,
            DEFAULT_MOVE_SECONDS,
            tick_rate,
        )?;

        let mut config = PlatformConfig::new(self.x, self.y, self.width, self.height)
            .with_timing(pause, duration)
            .with_easing(self.easing);
        if let Some(offset) = self.phase_offset {
            config = config.with_phase_offset(offset);
        }
        if let (Some(from), Some(to)) = (self.color_from, self.color_to) {
            config = config.with_colors(from, to);
        } else if self.color_from.is_some() || self.color_to.is_some() {
            bail!("color_from and color_to must be given together");
        }
        Ok(config)
    }
}

fn resolve_ticks(
    what: &str,
    ticks: Option<u32>,
    seconds: Option<f32>,
    default_seconds: f32,
    tick_rate: f32,
) -> Result<u32> {
    match (ticks, seconds) {
        (Some(_), Some(_)) => bail!("{what}_ticks and {what}_seconds are mutually exclusive"),
        (Some(t), None) => Ok(t),
        (None, seconds) => {
            let seconds = seconds.unwrap_or(default_seconds);
            if !seconds.is_finite() || seconds < 0.0 {
                bail!("{what}_seconds must be finite and >= 0, got {seconds}");
            }
            let ticks = (seconds * tick_rate).round();
            // u32::MAX rounds up to 2^32 as f32, so equality already overflows.
            if ticks >= u32::MAX as f32 {
                bail!("{what}_seconds of {seconds} overflows the tick counter");
            }
            Ok(ticks as u32)
        }
    }
}

/// Chart labels, y ranges and placement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartsConfig {
    #[serde(default = "default_displacement")]
    pub displacement: ChartSpec,
    #[serde(default = "default_velocity")]
    pub velocity: ChartSpec,
    #[serde(default = "default_acceleration")]
    pub acceleration: ChartSpec,
    #[serde(default)]
    pub layout: ChartLayout,
    /// Colours shared by every chart
    #[serde(default)]
    pub style: ChartStyle,
}

fn default_displacement() -> ChartSpec {
    ChartSpec::new(Quantity::Displacement, [-0.1, 1.1])
}

fn default_velocity() -> ChartSpec {
    ChartSpec::new(Quantity::Velocity, [-1.0, 1.0])
}

fn default_acceleration() -> ChartSpec {
    ChartSpec::new(Quantity::Acceleration, [-10.0, 10.0])
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            displacement: default_displacement(),
            velocity: default_velocity(),
            acceleration: default_acceleration(),
            layout: ChartLayout::default(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartsConfig {
    pub fn spec(&self, quantity: Quantity) -> &ChartSpec {
        match quantity {
            Quantity::Displacement => &self.displacement,
            Quantity::Velocity => &self.velocity,
            Quantity::Acceleration => &self.acceleration,
        }
    }
}

/// A single chart's data range.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartSpec {
    pub label: String,
    /// Data-time range; `[-1, points]` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<[f32; 2]>,
    pub y: [f32; 2],
}

impl ChartSpec {
    pub fn new(quantity: Quantity, y: [f32; 2]) -> Self {
        Self {
            label: quantity.label().to_string(),
            x: None,
            y,
        }
    }

    pub fn axes(&self, points: usize) -> Axes {
        let [x0, x1] = self.x.unwrap_or([-1.0, points as f32]);
        Axes::new(x0, x1, self.y[0], self.y[1])
    }
}

/// Grid placement of chart windows: one row per platform, one column per
/// quantity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartLayout {
    /// Bottom edge of the first row
    #[serde(default = "default_first_row_bottom")]
    pub first_row_bottom: f32,
    /// Vertical distance between rows (rows go downwards)
    #[serde(default = "default_row_spacing")]
    pub row_spacing: f32,
    #[serde(default = "default_chart_width")]
    pub width: f32,
    #[serde(default = "default_chart_height")]
    pub height: f32,
    #[serde(default = "default_displacement_left")]
    pub displacement_left: f32,
    #[serde(default = "default_velocity_left")]
    pub velocity_left: f32,
    #[serde(default = "default_acceleration_left")]
    pub acceleration_left: f32,
}

fn default_first_row_bottom() -> f32 {
    500.0
}

fn default_row_spacing() -> f32 {
    200.0
}

fn default_chart_width() -> f32 {
    300.0
}

fn default_chart_height() -> f32 {
    100.0
}

fn default_displacement_left() -> f32 {
    100.0
}

fn default_velocity_left() -> f32 {
    500.0
}

fn default_acceleration_left() -> f32 {
    900.0
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            first_row_bottom: default_first_row_bottom(),
            row_spacing: default_row_spacing(),
            width: default_chart_width(),
            height: default_chart_height(),
            displacement_left: default_displacement_left(),
            velocity_left: default_velocity_left(),
            acceleration_left: default_acceleration_left(),
        }
    }
}

impl ChartLayout {
    pub fn window(&self, group: usize, quantity: Quantity) -> Window {
        let left = match quantity {
            Quantity::Displacement => self.displacement_left,
            Quantity::Velocity => self.velocity_left,
            Quantity::Acceleration => self.acceleration_left,
        };
        let bottom = self.first_row_bottom - self.row_spacing * group as f32;
        Window::from_origin(left, bottom, self.width, self.height)
    }
}

impl SceneConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SceneConfig =
            toml::from_str(content).context("Failed to parse scene config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize scene config")
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Platform configs with durations resolved to ticks.
    pub fn platform_configs(&self) -> Result<Vec<PlatformConfig>> {
        self.platforms
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                spec.to_platform_config(self.tick_rate)
                    .with_context(|| format!("platform {i}"))
            })
            .collect()
    }

    /// Check everything that can be checked without building the scene.
    pub fn validate(&self) -> Result<()> {
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            bail!("tick_rate must be finite and > 0, got {}", self.tick_rate);
        }
        if self.points == 0 {
            bail!("points must be > 0");
        }
        let style = &self.charts.style;
        if ![style.line, style.guide, style.text]
            .iter()
            .all(Color::is_finite)
        {
            bail!("chart style colours must be finite");
        }
        for (i, config) in self.platform_configs()?.iter().enumerate() {
            config.validate().with_context(|| format!("platform {i}"))?;
        }
        Ok(())
    }
}
