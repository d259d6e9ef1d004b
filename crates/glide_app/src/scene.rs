//! Explicit per-frame scene state.
//!
//! The scene is built once from a [`SceneConfig`] and then advanced by the
//! host with one [`Scene::tick`] call per frame.

use anyhow::{Context, Result};
use glide_animation::{Platform, Quantity};
use glide_charts::ScrollingChart;
use glide_core::RenderSink;

use crate::config::SceneConfig;

/// The three charts tracking one platform.
#[derive(Clone, Debug)]
pub struct ChartGroup {
    displacement: ScrollingChart,
    velocity: ScrollingChart,
    acceleration: ScrollingChart,
}

impl ChartGroup {
    fn build(config: &SceneConfig, group: usize) -> Result<Self> {
        let chart = |quantity: Quantity| -> Result<ScrollingChart> {
            let spec = config.charts.spec(quantity);
            let window = config.charts.layout.window(group, quantity);
            ScrollingChart::new(
                spec.label.clone(),
                config.points,
                window,
                spec.axes(config.points),
            )
            .map(|chart| chart.with_style(config.charts.style))
            .with_context(|| format!("{} chart for platform {group}", quantity.label()))
        };
        Ok(Self {
            displacement: chart(Quantity::Displacement)?,
            velocity: chart(Quantity::Velocity)?,
            acceleration: chart(Quantity::Acceleration)?,
        })
    }

    pub fn get(&self, quantity: Quantity) -> &ScrollingChart {
        match quantity {
            Quantity::Displacement => &self.displacement,
            Quantity::Velocity => &self.velocity,
            Quantity::Acceleration => &self.acceleration,
        }
    }

    pub fn get_mut(&mut self, quantity: Quantity) -> &mut ScrollingChart {
        match quantity {
            Quantity::Displacement => &mut self.displacement,
            Quantity::Velocity => &mut self.velocity,
            Quantity::Acceleration => &mut self.acceleration,
        }
    }
}

/// Platforms plus one chart group per platform.
#[derive(Clone, Debug)]
pub struct Scene {
    platforms: Vec<Platform>,
    groups: Vec<ChartGroup>,
    frames: u64,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let platforms = config
            .platform_configs()?
            .into_iter()
            .enumerate()
            .map(|(i, pc)| {
                Platform::new(pc, config.tick_rate).with_context(|| format!("platform {i}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let groups = (0..platforms.len())
            .map(|group| ChartGroup::build(config, group))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            platforms = platforms.len(),
            charts = groups.len() * Quantity::DRAW_ORDER.len(),
            points = config.points,
            tick_rate = config.tick_rate,
            "scene built"
        );

        Ok(Self {
            platforms,
            groups,
            frames: 0,
        })
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn groups(&self) -> &[ChartGroup] {
        &self.groups
    }

    pub fn charts(&self, group: usize) -> Option<&ChartGroup> {
        self.groups.get(group)
    }

    /// Number of `tick` calls so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance every platform to `tick`, feed the charts and draw everything.
    ///
    /// `tick` is only compared with earlier ticks; charts plot against the
    /// number of frames seen so far.
    pub fn tick(&mut self, tick: u64, sink: &mut dyn RenderSink) {
        for platform in &mut self.platforms {
            platform.ease(tick, sink);
        }

        let t = self.frames as f32;
        for (platform, group) in self.platforms.iter().zip(self.groups.iter_mut()) {
            let Some(k) = platform.kinematics() else {
                continue;
            };
            for quantity in Quantity::DRAW_ORDER {
                group.get_mut(quantity).append(t, k.get(quantity)).draw(sink);
            }
        }

        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::FrameOutputs;

    #[test]
    fn default_scene_has_three_groups() {
        let scene = Scene::new(&SceneConfig::default()).unwrap();
        assert_eq!(scene.platforms().len(), 3);
        assert_eq!(scene.groups().len(), 3);
        assert!(scene.charts(3).is_none());
        let group = scene.charts(1).unwrap();
        assert_eq!(group.get(Quantity::Velocity).label(), "Velocity");
        assert_eq!(group.get(Quantity::Velocity).window().bottom, 300.0);
    }

    #[test]
    fn charts_draw_in_acceleration_velocity_displacement_order() {
        let mut scene = Scene::new(&SceneConfig::default()).unwrap();
        let mut out = FrameOutputs::new();
        scene.tick(0, &mut out);
        let labels: Vec<_> = out.labels.iter().take(3).map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["Acceleration", "Velocity", "Displacement"]);
        assert_eq!(scene.frames(), 1);
    }

    #[test]
    fn output_does_not_depend_on_the_first_tick_value() {
        let mut zero = Scene::new(&SceneConfig::default()).unwrap();
        let mut late = zero.clone();
        let (mut a, mut b) = (FrameOutputs::new(), FrameOutputs::new());
        for t in 0..240 {
            a.clear();
            b.clear();
            zero.tick(t, &mut a);
            late.tick(50_000 + t, &mut b);
            assert_eq!(a, b, "frame {t}");
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig {
            points: 0,
            ..SceneConfig::default()
        };
        assert!(Scene::new(&config).is_err());
    }
}
