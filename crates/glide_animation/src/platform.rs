//! Oscillating motion platforms
//!
//! A [`Platform`] alternates between a pause and an eased move, flipping
//! direction after every move:
//!
//! ```text
//! pause | ease 0 -> 1 | pause | ease 1 -> 0 | pause | ...
//! ```
//!
//! It is driven by the host frame counter, one call per frame. The counter is
//! opaque: the first tick seen becomes the platform's time zero. Velocity and
//! acceleration are backward finite differences of the progress value,
//! scaled by the tick rate into per-second rates.

use glide_core::{ensure_config, lerp, Color, RenderSink, Result, SolidRect};

use crate::easing::{Easing, EasingFn};
use crate::quantity::Quantity;

/// Frames per second used to turn per-tick deltas into per-second rates.
pub const DEFAULT_TICK_RATE: f32 = 60.0;

/// Construction-time settings for a [`Platform`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformConfig {
    /// Horizontal position at progress 0 and 1
    pub x: [f32; 2],
    /// Vertical position at progress 0 and 1
    pub y: [f32; 2],
    pub width: f32,
    pub height: f32,
    /// Ticks spent at rest between moves
    pub pause_ticks: u32,
    /// Ticks spent moving from one end to the other
    pub move_ticks: u32,
    pub easing: Easing,
    /// Tick at which the first move begins.
    ///
    /// Defaults to `pause_ticks / 2`, so platforms sharing the same durations
    /// but created with different offsets do not start moving in lockstep.
    pub phase_offset: Option<u32>,
    /// Colour at progress 0
    pub color_from: Color,
    /// Colour at progress 1
    pub color_to: Color,
}

impl PlatformConfig {
    pub fn new(x: [f32; 2], y: [f32; 2], width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            pause_ticks: 60,
            move_ticks: 120,
            easing: Easing::Identity,
            phase_offset: None,
            color_from: Color::from_rgb8(90, 0, 0),
            color_to: Color::from_rgb8(0, 90, 0),
        }
    }

    pub fn with_timing(mut self, pause_ticks: u32, move_ticks: u32) -> Self {
        self.pause_ticks = pause_ticks;
        self.move_ticks = move_ticks;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_phase_offset(mut self, phase_offset: u32) -> Self {
        self.phase_offset = Some(phase_offset);
        self
    }

    pub fn with_colors(mut self, from: Color, to: Color) -> Self {
        self.color_from = from;
        self.color_to = to;
        self
    }

    pub fn effective_phase_offset(&self) -> u32 {
        self.phase_offset.unwrap_or(self.pause_ticks / 2)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_config!(self.pause_ticks > 0, "pause duration must be > 0 ticks");
        ensure_config!(self.move_ticks > 0, "move duration must be > 0 ticks");
        ensure_config!(
            self.x.iter().chain(self.y.iter()).all(|v| v.is_finite()),
            "platform ranges must be finite, got x={:?} y={:?}",
            self.x,
            self.y
        );
        ensure_config!(
            self.width.is_finite() && self.width >= 0.0,
            "platform width must be finite and >= 0, got {}",
            self.width
        );
        ensure_config!(
            self.height.is_finite() && self.height >= 0.0,
            "platform height must be finite and >= 0, got {}",
            self.height
        );
        ensure_config!(
            self.color_from.is_finite() && self.color_to.is_finite(),
            "platform colours must be finite"
        );
        Ok(())
    }
}

/// Displacement, velocity and acceleration for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Kinematics {
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Kinematics {
    pub fn get(&self, quantity: Quantity) -> f32 {
        match quantity {
            Quantity::Displacement => self.s,
            Quantity::Velocity => self.v,
            Quantity::Acceleration => self.a,
        }
    }
}

/// Tick-driven back-and-forth motion state machine.
#[derive(Clone, Debug)]
pub struct Platform {
    config: PlatformConfig,
    easing_fn: EasingFn,
    tick_rate: f32,

    // First host tick seen; phase time is measured from here.
    origin: Option<u64>,
    // Phase time at which the current move window starts.
    clock_start: u64,
    invert: bool,
    progress: f32,
    kinematics: Option<Kinematics>,
}

impl Platform {
    pub fn new(config: PlatformConfig, tick_rate: f32) -> Result<Self> {
        config.validate()?;
        ensure_config!(
            tick_rate.is_finite() && tick_rate > 0.0,
            "tick rate must be finite and > 0, got {tick_rate}"
        );

        let clock_start = config.effective_phase_offset() as u64;
        tracing::debug!(
            easing = %config.easing,
            pause = config.pause_ticks,
            duration = config.move_ticks,
            clock_start,
            "platform created"
        );

        Ok(Self {
            easing_fn: config.easing.function(),
            config,
            tick_rate,
            origin: None,
            clock_start,
            invert: false,
            progress: 0.0,
            kinematics: None,
        })
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn easing(&self) -> Easing {
        self.config.easing
    }

    pub fn tick_rate(&self) -> f32 {
        self.tick_rate
    }

    /// Post-easing progress along the current half-cycle, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// `None` until the first [`advance`](Self::advance).
    pub fn kinematics(&self) -> Option<Kinematics> {
        self.kinematics
    }

    pub fn displacement(&self) -> Option<f32> {
        self.quantity(Quantity::Displacement)
    }

    pub fn velocity(&self) -> Option<f32> {
        self.quantity(Quantity::Velocity)
    }

    pub fn acceleration(&self) -> Option<f32> {
        self.quantity(Quantity::Acceleration)
    }

    pub fn quantity(&self, quantity: Quantity) -> Option<f32> {
        self.kinematics.map(|k| k.get(quantity))
    }

    /// Advance to `tick` (the host frame counter) and refresh the outputs.
    pub fn advance(&mut self, tick: u64) -> Kinematics {
        self.update_state(tick);
        self.update_outputs()
    }

    /// Advance to `tick`, then draw.
    pub fn ease(&mut self, tick: u64, sink: &mut dyn RenderSink) -> Kinematics {
        let k = self.advance(tick);
        self.draw(sink);
        k
    }

    fn update_state(&mut self, tick: u64) {
        let origin = *self.origin.get_or_insert(tick);
        let now = tick.saturating_sub(origin);
        // Before the window opens elapsed clamps to 0, which holds the
        // platform at rest for the pause.
        let elapsed = now.saturating_sub(self.clock_start) as f32;
        let linear = (elapsed / self.config.move_ticks as f32).clamp(0.0, 1.0);
        let eased = (self.easing_fn)(linear);
        self.progress = if self.invert { 1.0 - eased } else { eased };

        if eased >= 1.0 {
            self.clock_start +=
                u64::from(self.config.pause_ticks) + u64::from(self.config.move_ticks);
            self.invert = !self.invert;
            tracing::trace!(
                tick,
                next_start = self.clock_start,
                invert = self.invert,
                "platform arrived"
            );
        }
    }

    fn update_outputs(&mut self) -> Kinematics {
        let prev = self.kinematics.unwrap_or_default();
        let s = self.progress;
        let v = (s - prev.s) * self.tick_rate;
        let a = (v - prev.v) * self.tick_rate;
        let k = Kinematics { s, v, a };
        self.kinematics = Some(k);
        k
    }

    /// Rectangle for the current progress.
    pub fn rect(&self) -> SolidRect {
        let p = self.progress;
        let c = &self.config;
        SolidRect::new(
            lerp(c.x[0], c.x[1], p),
            lerp(c.y[0], c.y[1], p),
            c.width,
            c.height,
            c.color_from.lerp(c.color_to, p),
        )
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.push_rect(self.rect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::{FrameOutputs, GlideError};

    fn platform(easing: Easing, pause: u32, duration: u32, offset: u32) -> Platform {
        let config = PlatformConfig::new([200.0, 880.0], [600.0, 600.0], 200.0, 50.0)
            .with_timing(pause, duration)
            .with_easing(easing)
            .with_phase_offset(offset);
        Platform::new(config, DEFAULT_TICK_RATE).unwrap()
    }

    fn run(platform: &mut Platform, ticks: u64) -> Vec<f32> {
        (0..ticks)
            .map(|t| {
                platform.advance(t);
                platform.progress()
            })
            .collect()
    }

    #[test]
    fn oscillates_through_two_full_cycles() {
        let mut p = platform(Easing::Identity, 10, 20, 0);
        let progress = run(&mut p, 130);

        // Rise 0 -> 1 over ticks 0..=20.
        assert_eq!(progress[0], 0.0);
        assert_eq!(progress[20], 1.0);
        assert!(progress[0..=20].windows(2).all(|w| w[1] > w[0]));
        // Hold at 1 during the pause.
        assert!(progress[21..=30].iter().all(|&v| v == 1.0));
        // Fall 1 -> 0 over ticks 30..=50.
        assert_eq!(progress[50], 0.0);
        assert!(progress[30..=50].windows(2).all(|w| w[1] < w[0]));
        // Hold at 0, then the second cycle repeats the first.
        assert!(progress[51..=60].iter().all(|&v| v == 0.0));
        for t in 0..60 {
            assert_eq!(progress[t], progress[t + 60], "tick {t}");
        }
        assert_eq!(progress[80], 1.0);
        assert_eq!(progress[110], 0.0);
    }

    #[test]
    fn eased_platform_is_monotonic_within_each_move() {
        let mut p = platform(Easing::RaisedQuintic, 10, 20, 0);
        let progress = run(&mut p, 61);
        assert!(progress[0..=20].windows(2).all(|w| w[1] >= w[0]));
        assert!(progress[30..=50].windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn arrival_flips_direction_after_reporting() {
        let mut p = platform(Easing::Identity, 10, 20, 0);
        for t in 0..20 {
            p.advance(t);
        }
        assert!(!p.is_inverted());
        p.advance(20);
        // The arriving tick still reports the pre-flip value.
        assert_eq!(p.progress(), 1.0);
        assert!(p.is_inverted());
    }

    #[test]
    fn default_phase_offset_is_half_the_pause() {
        let config = PlatformConfig::new([0.0, 1.0], [0.0, 1.0], 1.0, 1.0).with_timing(10, 20);
        assert_eq!(config.effective_phase_offset(), 5);

        let mut p = Platform::new(config, DEFAULT_TICK_RATE).unwrap();
        let progress = run(&mut p, 8);
        assert!(progress[0..=5].iter().all(|&v| v == 0.0));
        assert!(progress[6] > 0.0);
    }

    #[test]
    fn late_first_tick_matches_a_zero_based_run() {
        let mut zero = Platform::new(
            PlatformConfig::new([0.0, 1.0], [0.0, 0.0], 1.0, 1.0),
            DEFAULT_TICK_RATE,
        )
        .unwrap();
        let mut late = zero.clone();

        for t in 0..400 {
            let expected = zero.advance(t);
            let actual = late.advance(10_000 + t);
            assert_eq!(actual, expected, "frame {t}");
        }
        assert_eq!(late.is_inverted(), zero.is_inverted());
    }

    #[test]
    fn late_first_tick_holds_still_during_the_initial_pause() {
        let mut p = platform(Easing::Identity, 60, 120, 30);
        for t in 10_000..10_010 {
            let k = p.advance(t);
            assert_eq!(k.s, 0.0, "tick {t}");
            assert_eq!(k.v, 0.0, "tick {t}");
        }
        assert!(!p.is_inverted());
    }

    #[test]
    fn kinematics_are_unset_before_first_update() {
        let mut p = platform(Easing::Identity, 10, 20, 0);
        assert_eq!(p.kinematics(), None);
        assert_eq!(p.velocity(), None);
        p.advance(0);
        assert_eq!(p.kinematics(), Some(Kinematics::default()));
    }

    #[test]
    fn identity_velocity_matches_ramp_rate() {
        let mut p = platform(Easing::Identity, 30, 60, 0);
        let mut samples = Vec::new();
        for t in 0..=60 {
            samples.push(p.advance(t));
        }
        // The first step from the zero-initialised state is a transient.
        assert!((samples[1].v - 1.0).abs() < 1e-3);
        assert!((samples[1].a - 60.0).abs() < 0.1);
        for (t, k) in samples.iter().enumerate().skip(2) {
            assert!((k.v - 1.0).abs() < 1e-3, "tick {t}: v = {}", k.v);
            assert!(k.a.abs() < 0.05, "tick {t}: a = {}", k.a);
        }
        // Arrival: the platform stops, so velocity drops back to zero.
        let rest = p.advance(61);
        assert_eq!(rest.s, 1.0);
        assert!(rest.v.abs() < 1e-3);
        assert!(rest.a < -50.0);
    }

    #[test]
    fn rect_interpolates_position_and_colour() {
        let mut p = platform(Easing::Identity, 10, 20, 0);
        let mut out = FrameOutputs::new();
        for t in 0..10 {
            p.advance(t);
        }
        p.ease(10, &mut out);
        assert_eq!(p.progress(), 0.5);

        let r = out.rects[0];
        assert_eq!(r.x, 540.0);
        assert_eq!(r.y, 600.0);
        assert_eq!((r.w, r.h), (200.0, 50.0));
        assert!((r.color.r - 45.0 / 255.0).abs() < 1e-6);
        assert!((r.color.g - 45.0 / 255.0).abs() < 1e-6);
        assert_eq!(r.color.b, 0.0);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let base = PlatformConfig::new([0.0, 1.0], [0.0, 1.0], 1.0, 1.0);
        assert!(matches!(
            Platform::new(base.clone().with_timing(10, 0), DEFAULT_TICK_RATE),
            Err(GlideError::InvalidConfiguration(_))
        ));
        assert!(Platform::new(base.clone().with_timing(0, 20), DEFAULT_TICK_RATE).is_err());
        assert!(Platform::new(base.clone(), 0.0).is_err());
        assert!(Platform::new(base.clone(), f32::NAN).is_err());

        let mut bad = base;
        bad.x = [0.0, f32::INFINITY];
        assert!(Platform::new(bad, DEFAULT_TICK_RATE).is_err());
    }
}
