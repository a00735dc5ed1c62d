//! Change detection over keypad state
//!
//! The display only needs an update when something it shows actually
//! changed. [`ChangeDetector`] keeps the last-known value of each kind and
//! raises a per-kind dirty flag on difference. Detection runs every tick
//! regardless of link power state, so a change made while the link is
//! suspended is deferred, not lost.

/// Last-known values of the state the display shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObservedValues {
    /// Highest active layer index
    pub layer: u8,
    /// Num Lock indicator
    pub num_lock: bool,
    /// Battery percentage, -1 when unknown
    pub battery_percent: i8,
}

impl Default for ObservedValues {
    fn default() -> Self {
        Self {
            layer: 0,
            num_lock: false,
            battery_percent: 0,
        }
    }
}

/// Per-kind "latest value not yet transmitted" flags
///
/// A flag is set by the detector and cleared by the scheduler once the
/// corresponding frame was written. Multiple changes between two sends
/// collapse into one flag; only the latest value is ever transmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyFlags {
    pub layer: bool,
    pub num_lock: bool,
    pub battery: bool,
}

impl DirtyFlags {
    /// Any kind pending transmission
    pub fn any(&self) -> bool {
        self.layer || self.num_lock || self.battery
    }
}

/// Compares fresh observations against last-sent values
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChangeDetector {
    pub(crate) observed: ObservedValues,
    pub(crate) dirty: DirtyFlags,
}

impl ChangeDetector {
    /// Create a detector with default values (layer 0, lock off, battery 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the highest active layer, pushed on every layer-stack change
    pub fn observe_layer(&mut self, layer: u8) {
        if self.observed.layer != layer {
            self.observed.layer = layer;
            self.dirty.layer = true;
        }
    }

    /// Record the Num Lock state, pulled each tick
    pub fn poll_num_lock(&mut self, num_lock: bool) {
        if self.observed.num_lock != num_lock {
            self.observed.num_lock = num_lock;
            self.dirty.num_lock = true;
        }
    }

    /// Record the battery percentage, pulled each tick on battery builds
    pub fn poll_battery(&mut self, percent: i8) {
        if self.observed.battery_percent != percent {
            self.observed.battery_percent = percent;
            self.dirty.battery = true;
        }
    }

    /// Current last-known values
    pub fn observed(&self) -> &ObservedValues {
        &self.observed
    }

    /// Current pending-transmission flags
    pub fn dirty(&self) -> &DirtyFlags {
        &self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let detector = ChangeDetector::new();
        assert_eq!(detector.observed().layer, 0);
        assert!(!detector.observed().num_lock);
        assert_eq!(detector.observed().battery_percent, 0);
        assert!(!detector.dirty().any());
    }

    #[test]
    fn test_change_sets_flag() {
        let mut detector = ChangeDetector::new();
        detector.observe_layer(2);
        assert!(detector.dirty().layer);
        assert_eq!(detector.observed().layer, 2);
    }

    #[test]
    fn test_unchanged_value_sets_nothing() {
        let mut detector = ChangeDetector::new();
        detector.poll_num_lock(false);
        detector.poll_battery(0);
        detector.observe_layer(0);
        assert!(!detector.dirty().any());
    }

    #[test]
    fn test_toggle_back_keeps_flag_and_latest_value() {
        // Num Lock on then off before any send: one flag, final value off
        let mut detector = ChangeDetector::new();
        detector.poll_num_lock(true);
        detector.poll_num_lock(false);
        assert!(detector.dirty().num_lock);
        assert!(!detector.observed().num_lock);
    }

    #[test]
    fn test_battery_unknown() {
        let mut detector = ChangeDetector::new();
        detector.poll_battery(-1);
        assert!(detector.dirty().battery);
        assert_eq!(detector.observed().battery_percent, -1);
    }

    proptest! {
        #[test]
        fn stored_value_tracks_latest_poll(polls in proptest::collection::vec(any::<i8>(), 1..32)) {
            let mut detector = ChangeDetector::new();
            for &percent in &polls {
                detector.poll_battery(percent);
            }
            let last = *polls.last().unwrap();
            prop_assert_eq!(detector.observed().battery_percent, last);
            // Dirty exactly when some poll differed from the initial value
            prop_assert_eq!(detector.dirty().battery, polls.iter().any(|&p| p != 0));
        }
    }
}
