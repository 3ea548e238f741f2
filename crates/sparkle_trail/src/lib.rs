//! # SPARKLE Trail
//!
//! A bounded trail of decorative star particles that follows a pointer.
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ONE DISPLAY FRAME                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Pointer Moves → Spawn (70%) → Advance → Render → Surface    │
//! │       ↓              ↓            ↓         ↓                │
//! │  Record Pos     Cap/Evict    Integrate   Glow + Star         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The trail never touches a platform API. Randomness comes in through
//! [`RandomSource`], drawing goes out through [`Surface`], and the frame
//! cadence is owned by whoever calls [`ParticleTrail::advance`].
//!
//! ## Example
//!
//! ```rust
//! use sparkle_trail::{CommandRecorder, ParticleTrail, SeededRandom};
//!
//! let mut trail = ParticleTrail::with_defaults(SeededRandom::new(7));
//! trail.resize(800.0, 600.0);
//!
//! for i in 0..50 {
//!     trail.on_pointer_move(100.0 + f64::from(i), 200.0);
//! }
//! trail.advance();
//!
//! let mut surface = CommandRecorder::new();
//! trail.render(&mut surface);
//! assert_eq!(surface.command_count(), 1 + 2 * trail.len());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod math;
pub mod palette;
pub mod particle;
pub mod random;
pub mod render;
pub mod trail;

pub use config::{Span, TrailConfig};
pub use error::{TrailError, TrailResult};
pub use math::Vec2;
pub use palette::{Color, PaletteColor};
pub use particle::Particle;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use render::{
    CommandRecorder, GradientStop, ParticleInstance, RadialGlow, RenderCommand, Star, Surface,
    Viewport,
};
pub use trail::{ParticleTrail, TrailStats};
