//! Serial transport trait for the display link

use tychelink_protocol::UpdateFrame;

/// Trait for the half-duplex serial transport feeding the display
///
/// The link is unidirectional and fire-and-forget: there is no
/// acknowledgement and no retry, so none of these operations can report
/// failure. A display that misses a frame simply shows stale state until
/// the next update.
pub trait LinkTransport {
    /// Bring the transport up (clock the peripheral, claim the pins)
    fn start(&mut self);

    /// Halt the transport to save power
    ///
    /// Frames written while stopped are dropped.
    fn stop(&mut self);

    /// Queue a frame for transmission
    fn write_frame(&mut self, frame: &UpdateFrame);
}
