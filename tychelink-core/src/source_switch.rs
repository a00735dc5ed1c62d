//! USB source switch for the display input
//!
//! The display's panel can be fed either by the keypad MCU or straight
//! from the host over USB passthrough; one GPIO line selects between them.
//! Two fixed command codes, mapped outside the normal key range, flip the
//! line from the keymap.

use crate::traits::EnableLine;

/// Command code: route the display to the keypad MCU
pub const KC_USB_TO_MCU: u16 = 32277;
/// Command code: route the display to USB passthrough
pub const KC_USB_TO_LCD: u16 = 32278;

/// Physical input source feeding the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Source {
    /// Keypad MCU drives the display (select line low)
    #[default]
    Mcu,
    /// Direct USB passthrough (select line high)
    Usb,
}

/// Driver for the source-select line
#[derive(Debug)]
pub struct SourceSwitch<E> {
    line: E,
    source: Source,
}

impl<E: EnableLine> SourceSwitch<E> {
    /// Create the switch and drive the line to the MCU source
    pub fn new(mut line: E) -> Self {
        line.set_low();
        Self {
            line,
            source: Source::Mcu,
        }
    }

    /// Currently selected source
    pub fn source(&self) -> Source {
        self.source
    }

    /// Select a source, driving the line accordingly
    pub fn select(&mut self, source: Source) {
        match source {
            Source::Mcu => self.line.set_low(),
            Source::Usb => self.line.set_high(),
        }
        self.source = source;
    }

    /// Handle a key event from the keymap
    ///
    /// Returns `true` when the keycode belongs to the switch and was
    /// consumed. The line is driven on press only; releases of the two
    /// codes are consumed without effect.
    pub fn process(&mut self, keycode: u16, pressed: bool) -> bool {
        match keycode {
            KC_USB_TO_MCU => {
                if pressed {
                    self.select(Source::Mcu);
                }
                true
            }
            KC_USB_TO_LCD => {
                if pressed {
                    self.select(Source::Usb);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MockLine {
        high: bool,
    }

    impl EnableLine for MockLine {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    #[test]
    fn test_initial_source_is_mcu() {
        let switch = SourceSwitch::new(MockLine { high: true });
        assert_eq!(switch.source(), Source::Mcu);
        assert!(!switch.line.high);
    }

    #[test]
    fn test_press_switches_source() {
        let mut switch = SourceSwitch::new(MockLine::default());

        assert!(switch.process(KC_USB_TO_LCD, true));
        assert_eq!(switch.source(), Source::Usb);
        assert!(switch.line.high);

        assert!(switch.process(KC_USB_TO_MCU, true));
        assert_eq!(switch.source(), Source::Mcu);
        assert!(!switch.line.high);
    }

    #[test]
    fn test_release_is_consumed_without_effect() {
        let mut switch = SourceSwitch::new(MockLine::default());
        assert!(switch.process(KC_USB_TO_LCD, false));
        assert_eq!(switch.source(), Source::Mcu);
    }

    #[test]
    fn test_other_keycodes_pass_through() {
        let mut switch = SourceSwitch::new(MockLine::default());
        assert!(!switch.process(0x0004, true));
        assert!(!switch.process(0, false));
        assert_eq!(switch.source(), Source::Mcu);
    }
}
