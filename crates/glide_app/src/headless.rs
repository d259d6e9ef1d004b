//! Deterministic headless host loop.
//!
//! Stands in for a real render loop: it owns the frame counter, clears a
//! [`FrameOutputs`] sink each frame, ticks the [`Scene`] into it and hands the
//! result to a callback.

use anyhow::{bail, Result};
use glide_core::FrameOutputs;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::scene::Scene;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u64,
    /// Tick counter value of the first frame.
    pub first_tick: u64,
    /// Emit a debug summary every this many frames (0 disables).
    pub log_every_frames: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 600,
            first_tick: 0,
            log_every_frames: 60,
        }
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u64,
    pub tick: u64,
}

/// Primitive totals accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PrimitiveTotals {
    pub rects: u64,
    pub line_sets: u64,
    pub segments: u64,
    pub labels: u64,
}

impl PrimitiveTotals {
    fn add(&mut self, frame: &FrameOutputs) {
        self.rects += frame.rects.len() as u64;
        self.line_sets += frame.lines.len() as u64;
        self.segments += frame.segment_count() as u64;
        self.labels += frame.labels.len() as u64;
    }
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    pub frames: u64,
    pub first_tick: u64,
    pub last_tick: u64,
    pub totals: PrimitiveTotals,
    /// Everything drawn on the final frame.
    pub last_frame: FrameOutputs,
}

impl HeadlessReport {
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Deterministic headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget against `scene`.
    pub fn run<F>(
        cfg: HeadlessRunConfig,
        scene: &mut Scene,
        mut on_frame: F,
    ) -> Result<HeadlessReport>
    where
        F: FnMut(&HeadlessContext, &FrameOutputs),
    {
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        let Some(last_tick) = cfg.first_tick.checked_add(cfg.max_frames - 1) else {
            bail!("headless run would overflow the tick counter");
        };

        let mut outputs = FrameOutputs::new();
        let mut totals = PrimitiveTotals::default();

        for frame_index in 0..cfg.max_frames {
            let tick = cfg.first_tick + frame_index;
            outputs.clear();
            scene.tick(tick, &mut outputs);
            totals.add(&outputs);

            if cfg.log_every_frames > 0 && frame_index % cfg.log_every_frames == 0 {
                tracing::debug!(
                    tick,
                    rects = outputs.rects.len(),
                    line_sets = outputs.lines.len(),
                    segments = outputs.segment_count(),
                    "frame"
                );
            }
            on_frame(&HeadlessContext { frame_index, tick }, &outputs);
        }

        Ok(HeadlessReport {
            frames: cfg.max_frames,
            first_tick: cfg.first_tick,
            last_tick,
            totals,
            last_frame: outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    #[test]
    fn runs_the_requested_frames() {
        let mut scene = Scene::new(&SceneConfig::default()).unwrap();
        let mut seen = Vec::new();
        let cfg = HeadlessRunConfig {
            max_frames: 5,
            first_tick: 10,
            log_every_frames: 0,
        };
        let report =
            HeadlessRuntime::run(cfg, &mut scene, |ctx, _| seen.push(ctx.tick)).unwrap();
        assert_eq!(seen, vec![10, 11, 12, 13, 14]);
        assert_eq!(report.frames, 5);
        assert_eq!(report.last_tick, 14);
        assert_eq!(report.totals.rects, 15);
        assert_eq!(report.totals.labels, 45);
        assert_eq!(report.last_frame.rects.len(), 3);
        assert_eq!(scene.frames(), 5);
    }

    #[test]
    fn rejects_empty_run() {
        let mut scene = Scene::new(&SceneConfig::default()).unwrap();
        let cfg = HeadlessRunConfig {
            max_frames: 0,
            ..Default::default()
        };
        assert!(HeadlessRuntime::run(cfg, &mut scene, |_, _| {}).is_err());
    }

    #[test]
    fn report_serializes_last_frame() {
        let mut scene = Scene::new(&SceneConfig::default()).unwrap();
        let cfg = HeadlessRunConfig {
            max_frames: 2,
            ..Default::default()
        };
        let report = HeadlessRuntime::run(cfg, &mut scene, |_, _| {}).unwrap();
        let mut buf = Vec::new();
        report.write_to_writer(&mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["frames"], 2);
        assert_eq!(json["last_frame"]["rects"].as_array().unwrap().len(), 3);
    }
}
