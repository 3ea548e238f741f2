//! # SPARKLE Headless Driver
//!
//! Runs the cursor effect without a window: a synthetic pointer traces a
//! figure-eight from a second thread while the main thread renders frames
//! into a command recorder at the target frame rate.
//!
//! ```bash
//! # Five seconds at 60 FPS with a fixed seed
//! sparkle_headless --frames 300 --seed 42
//!
//! # Use a config file, verbose logs
//! RUST_LOG=sparkle=debug sparkle_headless --config config/sparkle.toml
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sparkle::{CursorEffect, EffectConfig, FrameLoop, HostEvent, HostEventSender, PointerCapability};
use sparkle::trail::CommandRecorder;
use tracing_subscriber::EnvFilter;

/// Pointer kind reported to the effect.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pointer {
    Fine,
    Coarse,
    None,
}

impl From<Pointer> for PointerCapability {
    fn from(pointer: Pointer) -> Self {
        match pointer {
            Pointer::Fine => Self::Fine,
            Pointer::Coarse => Self::Coarse,
            Pointer::None => Self::None,
        }
    }
}

/// Headless cursor sparkle driver.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to render.
    #[arg(short, long, default_value_t = 300)]
    frames: u64,

    /// Fixed random seed (overrides the config).
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pointer capability to report.
    #[arg(long, value_enum, default_value_t = Pointer::Fine)]
    pointer: Pointer,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Pointer moves per second from the synthetic pointer.
    #[arg(long, default_value_t = 120)]
    move_rate: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EffectConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EffectConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let Some(mut effect) = CursorEffect::from_config(args.pointer.into(), &config)? else {
        tracing::info!("nothing to do without a fine pointer");
        return Ok(());
    };

    let sender = effect.sender();
    sender.resize(args.width, args.height)?;
    sender.send(HostEvent::PointerEnter)?;

    let pointer = spawn_pointer(sender, args.width, args.height, args.move_rate.max(1));

    let mut frames = FrameLoop::new(config.frame.clone());
    let mut surface = CommandRecorder::new();

    for _ in 0..args.frames {
        let ctx = frames.begin_frame();
        surface.begin_frame();

        let report = effect.frame(&mut surface);
        let stats = frames.end_frame(ctx, report.events, report.particles);

        if stats.frame % u64::from(config.frame.target_fps.max(1)) == 0 {
            tracing::info!(
                frame = stats.frame,
                particles = report.particles,
                commands = surface.command_count(),
                frame_us = stats.total_us,
                "frame"
            );
        }

        thread::sleep(frames.remaining(&ctx));
    }

    // Dropping the effect closes the queue and stops the pointer thread.
    let trail_stats = effect.stats();
    drop(effect);
    if pointer.join().is_err() {
        anyhow::bail!("pointer thread panicked");
    }

    let frame_stats = frames.stats();
    tracing::info!(
        frames = frame_stats.frames_recorded,
        avg_ms = frame_stats.avg_frame_ms(),
        max_us = frame_stats.max_frame_us,
        over_budget = frame_stats.frames_over_budget,
        events = frame_stats.events_processed,
        peak_particles = frame_stats.peak_particles,
        spawned = trail_stats.spawned,
        evicted = trail_stats.evicted,
        expired = trail_stats.expired,
        "run complete"
    );

    Ok(())
}

/// Moves a synthetic pointer along a figure-eight until the effect shuts down.
fn spawn_pointer(
    sender: HostEventSender,
    width: f64,
    height: f64,
    moves_per_second: u32,
) -> thread::JoinHandle<()> {
    let interval = Duration::from_secs(1) / moves_per_second;
    thread::spawn(move || {
        let (cx, cy) = (width / 2.0, height / 2.0);
        let mut t = 0.0_f64;
        loop {
            let x = cx + (width * 0.4) * t.sin();
            let y = cy + (height * 0.3) * (2.0 * t).sin();
            if sender.pointer_move(x, y).is_err() {
                break;
            }
            t += 0.02;
            thread::sleep(interval);
        }
    })
}
