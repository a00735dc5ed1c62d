//! Post-power-on handshake phases
//!
//! The display resets when its power comes up, so the three initial
//! announcements are staggered instead of flooding the link immediately:
//! layer after the first 50 ms window, then indicators and battery 10 ms
//! apart. The sequence runs once per power-on; [`super::controller`] resets
//! it on every power-on cycle.

/// Wait before the first (layer) announcement, in milliseconds
pub const FIRST_WINDOW_MS: u32 = 50;

/// Gap between the remaining announcements, in milliseconds
pub const STAGGER_MS: u32 = 10;

/// Handshake stage, ordered
///
/// Each phase names the announcement it is waiting to send; `Done` is
/// terminal until the next power-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupPhase {
    /// Waiting out the display's own reset before sending the layer
    #[default]
    AwaitFirstWindow,
    /// Layer sent, waiting to send the Num Lock indicator
    SendIndicators,
    /// Indicators sent, waiting to send the battery level
    SendBattery,
    /// Handshake complete
    Done,
}

impl StartupPhase {
    /// Elapsed time that must pass before this phase fires, or `None` for
    /// the terminal phase
    pub fn window_ms(&self) -> Option<u32> {
        match self {
            StartupPhase::AwaitFirstWindow => Some(FIRST_WINDOW_MS),
            StartupPhase::SendIndicators | StartupPhase::SendBattery => Some(STAGGER_MS),
            StartupPhase::Done => None,
        }
    }

    /// Next phase after this one fires
    pub fn advance(self) -> Self {
        match self {
            StartupPhase::AwaitFirstWindow => StartupPhase::SendIndicators,
            StartupPhase::SendIndicators => StartupPhase::SendBattery,
            StartupPhase::SendBattery | StartupPhase::Done => StartupPhase::Done,
        }
    }

    /// Check if the handshake has completed
    pub fn is_done(&self) -> bool {
        matches!(self, StartupPhase::Done)
    }
}
