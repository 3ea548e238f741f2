//! # Frame Loop
//!
//! Frame bookkeeping for whatever drives the effect. The host still decides
//! *when* a frame happens; this only measures it.
//!
//! ```text
//! begin_frame ──> (drain, advance, render) ──> end_frame ──> sleep(remaining)
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Largest delta reported to a frame, so a stalled host does not produce one
/// enormous step.
pub const MAX_DELTA_TIME: f32 = 0.1;

/// Configuration for the frame loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameLoopConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Warn about frames that take more than twice the budget.
    pub timing_logs: bool,
}

impl FrameLoopConfig {
    /// Time available to one frame.
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            timing_logs: true,
        }
    }
}

/// Handle for a single frame's work.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Frame number, starting at 0.
    pub frame: u64,
    /// Seconds since the previous frame began, clamped.
    pub delta_time: f32,
    /// When this frame began.
    pub started: Instant,
}

/// Timing statistics for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number.
    pub frame: u64,
    /// Total frame time in microseconds.
    pub total_us: u64,
    /// Host events processed.
    pub events: usize,
    /// Live particles after the frame.
    pub particles: usize,
}

/// Measures frames and keeps running statistics.
#[derive(Debug)]
pub struct FrameLoop {
    config: FrameLoopConfig,
    frame_count: u64,
    last_frame_time: Option<Instant>,
    stats: FrameStatsAccumulator,
}

impl FrameLoop {
    /// Creates a new frame loop.
    #[must_use]
    pub fn new(config: FrameLoopConfig) -> Self {
        Self {
            config,
            frame_count: 0,
            last_frame_time: None,
            stats: FrameStatsAccumulator::new(),
        }
    }

    /// Begins a new frame.
    ///
    /// The first frame reports a delta of one frame budget.
    #[must_use]
    pub fn begin_frame(&mut self) -> FrameContext {
        let now = Instant::now();
        let delta_time = match self.last_frame_time {
            Some(last) => now.duration_since(last).as_secs_f32().min(MAX_DELTA_TIME),
            None => self.config.frame_budget().as_secs_f32(),
        };
        self.last_frame_time = Some(now);

        FrameContext {
            frame: self.frame_count,
            delta_time,
            started: now,
        }
    }

    /// Ends a frame begun with [`begin_frame`](Self::begin_frame).
    ///
    /// Returns the recorded statistics.
    pub fn end_frame(&mut self, ctx: FrameContext, events: usize, particles: usize) -> FrameStats {
        let elapsed = ctx.started.elapsed();
        let stats = FrameStats {
            frame: ctx.frame,
            total_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            events,
            particles,
        };
        self.record(stats);
        stats
    }

    /// Records externally measured statistics.
    pub fn record(&mut self, stats: FrameStats) {
        self.frame_count += 1;
        let budget_us = duration_us(self.config.frame_budget());
        self.stats.record(stats, budget_us);

        if self.config.timing_logs && stats.total_us > budget_us * 2 {
            tracing::warn!(
                frame = stats.frame,
                total_ms = stats.total_us as f64 / 1000.0,
                budget_ms = budget_us as f64 / 1000.0,
                "frame exceeded budget"
            );
        }
    }

    /// Time left in this frame's budget; zero when already over.
    #[must_use]
    pub fn remaining(&self, ctx: &FrameContext) -> Duration {
        self.config
            .frame_budget()
            .saturating_sub(ctx.started.elapsed())
    }

    /// Returns the number of completed frames.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FrameLoopConfig {
        &self.config
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(FrameLoopConfig::default())
    }
}

fn duration_us(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of total frame times.
    pub total_us_sum: u64,
    /// Min frame time.
    pub min_frame_us: u64,
    /// Max frame time.
    pub max_frame_us: u64,
    /// Frames that exceeded budget.
    pub frames_over_budget: u64,
    /// Host events processed.
    pub events_processed: u64,
    /// Largest particle count seen.
    pub peak_particles: usize,
}

impl FrameStatsAccumulator {
    /// Creates a new accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
            events_processed: 0,
            peak_particles: 0,
        }
    }

    /// Records a frame's statistics against a budget in microseconds.
    pub fn record(&mut self, stats: FrameStats, budget_us: u64) {
        self.frames_recorded += 1;
        self.total_us_sum = self.total_us_sum.saturating_add(stats.total_us);
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);
        self.events_processed += stats.events as u64;
        self.peak_particles = self.peak_particles.max(stats.particles);

        if stats.total_us > budget_us {
            self.frames_over_budget += 1;
        }
    }

    /// Returns average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        let config = FrameLoopConfig::default();
        assert_eq!(config.frame_budget(), Duration::from_nanos(16_666_666));

        let zero = FrameLoopConfig {
            target_fps: 0,
            timing_logs: false,
        };
        assert_eq!(zero.frame_budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_frame_numbers_advance() {
        let mut frames = FrameLoop::default();

        let first = frames.begin_frame();
        assert_eq!(first.frame, 0);
        assert!(first.delta_time > 0.0);
        frames.end_frame(first, 3, 10);

        let second = frames.begin_frame();
        assert_eq!(second.frame, 1);
        assert!(second.delta_time <= MAX_DELTA_TIME);
        frames.end_frame(second, 0, 12);

        assert_eq!(frames.frame_count(), 2);
        assert_eq!(frames.stats().events_processed, 3);
        assert_eq!(frames.stats().peak_particles, 12);
    }

    #[test]
    fn test_accumulator() {
        let mut acc = FrameStatsAccumulator::new();
        acc.record(FrameStats { total_us: 1_000, ..FrameStats::default() }, 16_666);
        acc.record(FrameStats { total_us: 20_000, ..FrameStats::default() }, 16_666);

        assert_eq!(acc.frames_recorded, 2);
        assert_eq!(acc.min_frame_us, 1_000);
        assert_eq!(acc.max_frame_us, 20_000);
        assert_eq!(acc.frames_over_budget, 1);
        assert!((acc.avg_frame_ms() - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_accumulator_average() {
        assert!(FrameStatsAccumulator::new().avg_frame_ms().abs() < f64::EPSILON);
    }
}
