//! Host capability flags
//!
//! The original firmware selected battery and wireless behavior with
//! conditional compilation. Here the same choices are runtime flags the
//! controller queries, so one binary serves wired and wireless builds and
//! tests can exercise both paths.

/// Optional collaborators the link controller may use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkCapabilities {
    /// A battery source exists and its percentage should be reported
    pub has_battery: bool,
    /// Stop the transport while no sends are pending (wireless builds)
    pub link_idle: bool,
}

impl LinkCapabilities {
    /// Wired build: mains powered, transport left running
    pub const fn wired() -> Self {
        Self {
            has_battery: false,
            link_idle: false,
        }
    }

    /// Wireless build: battery reporting plus idle-suspend of the transport
    pub const fn wireless() -> Self {
        Self {
            has_battery: true,
            link_idle: true,
        }
    }
}
