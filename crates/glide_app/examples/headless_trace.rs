//! Headless Trace Demo
//!
//! Runs the default scene for a few cycles and prints each platform's
//! kinematics every half second.
//!
//! Run with: cargo run -p glide_app --example headless_trace

use anyhow::Result;
use glide_app::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = SceneConfig::default();
    let mut scene = Scene::new(&config)?;
    let cfg = HeadlessRunConfig {
        max_frames: 420,
        ..Default::default()
    };

    let report = HeadlessRuntime::run(cfg, &mut scene.clone(), |ctx, frame| {
        if ctx.tick % 30 != 0 {
            return;
        }
        let xs: Vec<String> = frame.rects.iter().map(|r| format!("{:7.1}", r.x)).collect();
        println!("tick {:4}  x = [{}]", ctx.tick, xs.join(", "));
    })?;

    // Step a copy by hand to show the raw kinematics.
    let mut out = FrameOutputs::new();
    for tick in 0..report.frames {
        out.clear();
        scene.tick(tick, &mut out);
    }
    for platform in scene.platforms() {
        if let Some(k) = platform.kinematics() {
            println!(
                "{:>14}: s = {:.3}  v = {:+.3}  a = {:+.3}",
                platform.easing(),
                k.s,
                k.v,
                k.a
            );
        }
    }

    Ok(())
}
