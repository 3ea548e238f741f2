//! # Host Events
//!
//! Everything the host environment tells the effect.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │    Host     │─────>│   Event     │─────>│   Cursor    │
//! │  (pointer,  │      │   Channel   │      │   Effect    │
//! │   resize)   │      │  (bounded)  │      │  (frame)    │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! Events can be queued at any time; the effect drains them synchronously at
//! the start of each frame, so the trail only ever sees one caller.

use crossbeam_channel::{Sender, TrySendError};
use thiserror::Error;

/// What kind of pointing device the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerCapability {
    /// Mouse, trackpad or stylus: precise hover positions.
    Fine,
    /// Touch: positions only while pressed, and imprecise.
    Coarse,
    /// No pointing device.
    #[default]
    None,
}

impl PointerCapability {
    /// The sparkle trail only makes sense with a hovering, precise pointer.
    #[must_use]
    pub const fn supports_trail(self) -> bool {
        matches!(self, Self::Fine)
    }
}

/// An input from the host environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to viewport coordinates.
    PointerMove {
        /// X in pixels.
        x: f64,
        /// Y in pixels.
        y: f64,
    },
    /// Pointer entered the viewport.
    PointerEnter,
    /// Pointer left the viewport.
    PointerLeave,
    /// Viewport changed size.
    Resize {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
    },
}

/// The receiving effect was dropped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cursor effect has shut down")]
pub struct EffectClosed;

/// Cloneable handle for queuing host events.
#[derive(Debug, Clone)]
pub struct HostEventSender {
    inner: Sender<HostEvent>,
}

impl HostEventSender {
    pub(crate) fn new(inner: Sender<HostEvent>) -> Self {
        Self { inner }
    }

    /// Queues an event for the next frame.
    ///
    /// Drops the event if the queue is full. Errors only once the effect is
    /// gone.
    pub fn send(&self, event: HostEvent) -> Result<(), EffectClosed> {
        match self.inner.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(event)) => {
                tracing::trace!(?event, "host event queue full, dropping event");
                Ok(())
            }
            Err(TrySendError::Disconnected(_)) => Err(EffectClosed),
        }
    }

    /// Shorthand for [`HostEvent::PointerMove`].
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<(), EffectClosed> {
        self.send(HostEvent::PointerMove { x, y })
    }

    /// Shorthand for [`HostEvent::Resize`].
    pub fn resize(&self, width: f64, height: f64) -> Result<(), EffectClosed> {
        self.send(HostEvent::Resize { width, height })
    }

    /// Events waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn test_only_fine_pointer_supports_trail() {
        assert!(PointerCapability::Fine.supports_trail());
        assert!(!PointerCapability::Coarse.supports_trail());
        assert!(!PointerCapability::None.supports_trail());
    }

    #[test]
    fn test_full_queue_drops_silently() {
        let (tx, rx) = bounded(1);
        let sender = HostEventSender::new(tx);

        assert!(sender.pointer_move(1.0, 1.0).is_ok());
        assert!(sender.pointer_move(2.0, 2.0).is_ok());
        assert_eq!(sender.pending(), 1);
        assert_eq!(rx.try_recv().ok(), Some(HostEvent::PointerMove { x: 1.0, y: 1.0 }));
    }

    #[test]
    fn test_disconnected_reports_closed() {
        let (tx, rx) = bounded(4);
        let sender = HostEventSender::new(tx);
        drop(rx);
        assert_eq!(sender.send(HostEvent::PointerEnter), Err(EffectClosed));
    }
}
