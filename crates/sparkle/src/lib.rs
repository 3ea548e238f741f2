//! # SPARKLE
//!
//! Wires a [`ParticleTrail`](sparkle_trail::ParticleTrail) to a host: pointer
//! events in, frames out.
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. BEGIN FRAME        FrameLoop::begin_frame (delta, frame number)  │
//! │ 2. DRAIN EVENTS       pointer moves spawn, enter/leave, resize      │
//! │ 3. ADVANCE            integrate + expire particles                  │
//! │ 4. RENDER             clear, glow + star per particle, cursor glow  │
//! │ 5. END FRAME          record timings, warn when over budget         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns the frame cadence (a display-refresh callback, a timer, or
//! the headless driver) and calls [`CursorEffect::frame`] once per refresh.
//! Events may be queued from any context through a [`HostEventSender`].
//!
//! ## Modules
//!
//! - `config`: TOML configuration for the whole effect
//! - `host`: host events and pointer capability
//! - `effect`: the cursor effect itself
//! - `glow`: the soft glow that follows the pointer
//! - `frame_loop`: frame timing and statistics
//! - `canvas`: HTML canvas surface (`web` feature)

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod effect;
pub mod frame_loop;
pub mod glow;
pub mod host;

#[cfg(feature = "web")]
pub mod canvas;

pub use config::EffectConfig;
pub use effect::{CursorEffect, FrameReport};
pub use frame_loop::{FrameContext, FrameLoop, FrameLoopConfig, FrameStats, FrameStatsAccumulator};
pub use glow::CursorGlow;
pub use host::{EffectClosed, HostEvent, HostEventSender, PointerCapability};

#[cfg(feature = "web")]
pub use canvas::CanvasSurface;

// Re-export the simulation
pub use sparkle_trail as trail;
