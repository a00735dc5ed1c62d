//! Typed update commands for the companion display
//!
//! One command per piece of keypad state the display shows. The command
//! byte values come from the display firmware and are not contiguous:
//! indicators claimed 0x02 before battery reporting existed.

use crate::frame::{FrameError, UpdateFrame};

/// Command byte: Num Lock indicator state
pub const CMD_INDICATORS: u8 = 0x02;
/// Command byte: highest active layer
pub const CMD_LAYER: u8 = 0x03;
/// Command byte: battery percentage
pub const CMD_BATTERY: u8 = 0x04;

/// A status update destined for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Update {
    /// Highest active layer index
    Layer(u8),
    /// Num Lock indicator on/off
    Indicators(bool),
    /// Battery percentage, -1 when unknown
    Battery(i8),
}

impl Update {
    /// Command byte for this update kind
    pub fn command(&self) -> u8 {
        match self {
            Update::Layer(_) => CMD_LAYER,
            Update::Indicators(_) => CMD_INDICATORS,
            Update::Battery(_) => CMD_BATTERY,
        }
    }

    /// Payload byte for this update
    ///
    /// Indicators encode as 0/1; battery as the raw two's-complement byte
    /// (-1 becomes 0xFF, which the display renders as "unknown").
    pub fn value(&self) -> u8 {
        match self {
            Update::Layer(layer) => *layer,
            Update::Indicators(on) => *on as u8,
            Update::Battery(percent) => *percent as u8,
        }
    }

    /// Encode this update into a wire frame
    pub fn to_frame(&self) -> UpdateFrame {
        UpdateFrame::build(self.command(), self.value())
    }

    /// Decode an update from a validated frame
    pub fn from_frame(frame: &UpdateFrame) -> Result<Self, FrameError> {
        match frame.command() {
            CMD_LAYER => Ok(Update::Layer(frame.value())),
            CMD_INDICATORS => Ok(Update::Indicators(frame.value() != 0)),
            CMD_BATTERY => Ok(Update::Battery(frame.value() as i8)),
            _ => Err(FrameError::UnknownCommand),
        }
    }

    /// Decode an update from raw wire bytes (for testing or simulation)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FrameError> {
        Self::from_frame(&UpdateFrame::parse(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layer_frame_bytes() {
        let frame = Update::Layer(0).to_frame();
        assert_eq!(frame.as_bytes(), &[0xFE, 0x02, 0x03, 0, 0x01, 0, 0]);
    }

    #[test]
    fn test_indicators_frame_bytes() {
        let on = Update::Indicators(true).to_frame();
        assert_eq!(on.as_bytes(), &[0xFE, 0x02, 0x02, 1, 0x01, 1, 1]);

        let off = Update::Indicators(false).to_frame();
        assert_eq!(off.value(), 0);
    }

    #[test]
    fn test_battery_frame_bytes() {
        let frame = Update::Battery(100).to_frame();
        assert_eq!(frame.as_bytes(), &[0xFE, 0x02, 0x04, 100, 0x01, 100, 100]);
    }

    #[test]
    fn test_battery_unknown_encodes_as_ff() {
        let frame = Update::Battery(-1).to_frame();
        assert_eq!(frame.value(), 0xFF);
        assert_eq!(Update::from_frame(&frame), Ok(Update::Battery(-1)));
    }

    #[test]
    fn test_unknown_command_rejected() {
        let bytes = [0xFE, 0x02, 0x7F, 3, 0x01, 3, 3];
        assert_eq!(Update::from_bytes(&bytes), Err(FrameError::UnknownCommand));
    }

    fn update_strategy() -> impl Strategy<Value = Update> {
        prop_oneof![
            any::<u8>().prop_map(Update::Layer),
            any::<bool>().prop_map(Update::Indicators),
            any::<i8>().prop_map(Update::Battery),
        ]
    }

    proptest! {
        #[test]
        fn encoding_is_deterministic(update in update_strategy()) {
            let first = update.to_frame();
            let second = update.to_frame();
            prop_assert_eq!(first, second);

            // Structural invariants hold for every update
            let bytes = first.as_bytes();
            prop_assert_eq!(bytes[0], 0xFE);
            prop_assert_eq!(bytes[1], 0x02);
            prop_assert_eq!(bytes[3], bytes[5]);
            prop_assert_eq!(bytes[6], bytes[5]);
        }
    }
}
