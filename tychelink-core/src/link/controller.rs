//! Link power management and the send scheduler
//!
//! [`LinkController`] owns the display enable line, the serial transport,
//! the change detector and the handshake phase. The platform glue feeds it
//! observations and calls [`LinkController::tick`] from its periodic
//! housekeeping loop; nothing here blocks or busy-waits. Waiting is always
//! "guard fails this tick, re-checked next tick".
//!
//! Sends are decoupled from detection: the detector raises a dirty flag,
//! the scheduler later drains all pending flags behind a single transport
//! start/stop cycle. Draining is debounced by one tick so flags raised in
//! the same window batch into one cycle, and the drain order (layer,
//! battery, indicators) is fixed so output is deterministic for any
//! combination of simultaneously dirty flags.

use tychelink_protocol::Update;

use super::observed::ChangeDetector;
use super::startup::StartupPhase;
use crate::capabilities::LinkCapabilities;
use crate::traits::{EnableLine, LinkTransport};

/// Debounce between the first pending flag and the drain, in milliseconds
pub const SEND_DEBOUNCE_MS: u32 = 1;

/// Power state of the display link
///
/// Owned exclusively by the controller; other components only ever see it
/// as a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Display powered, link usable
    Active,
    /// Display and transport powered down
    Suspended,
}

/// Controller for the companion display link
#[derive(Debug)]
pub struct LinkController<T, E> {
    transport: T,
    enable: E,
    capabilities: LinkCapabilities,
    state: LinkState,
    detector: ChangeDetector,
    startup: StartupPhase,
    /// Timestamp of the last startup phase transition
    phase_stamp_ms: u32,
    /// Debounce arm time; `None` while no drain is pending
    debounce_ms: Option<u32>,
    transport_running: bool,
}

impl<T: LinkTransport, E: EnableLine> LinkController<T, E> {
    /// Create a suspended controller
    ///
    /// The platform calls [`power_on`](Self::power_on) once during init,
    /// after the transport hardware is configured.
    pub fn new(transport: T, enable: E, capabilities: LinkCapabilities) -> Self {
        Self {
            transport,
            enable,
            capabilities,
            state: LinkState::Suspended,
            detector: ChangeDetector::new(),
            startup: StartupPhase::default(),
            phase_stamp_ms: 0,
            debounce_ms: None,
            transport_running: false,
        }
    }

    /// Current link power state
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Current handshake phase
    pub fn startup_phase(&self) -> StartupPhase {
        self.startup
    }

    /// Access the transport (for platform glue that shares the peripheral)
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Power the display and re-arm the startup handshake
    ///
    /// `now_ms` becomes the handshake epoch: the first announcement goes
    /// out once the display's own reset window has passed.
    pub fn power_on(&mut self, now_ms: u32) {
        self.enable.set_high();
        self.state = LinkState::Active;
        self.startup = StartupPhase::AwaitFirstWindow;
        self.phase_stamp_ms = now_ms;
        self.transport.start();
        self.transport_running = true;
    }

    /// Power the display down and halt the transport
    ///
    /// Dirty flags survive: a kind still pending here is resent after the
    /// next power-on.
    pub fn power_off(&mut self) {
        self.enable.set_low();
        self.state = LinkState::Suspended;
        self.transport.stop();
        self.transport_running = false;
        self.debounce_ms = None;
    }

    /// Enter the host's reduced-power mode
    ///
    /// Returns `false` without side effects when the link is already
    /// suspended, so the caller can skip redundant teardown.
    pub fn enter_low_power(&mut self) -> bool {
        if self.state == LinkState::Suspended {
            return false;
        }
        self.power_off();
        true
    }

    /// Leave the host's reduced-power mode
    pub fn exit_low_power(&mut self, now_ms: u32) {
        self.power_on(now_ms);
    }

    /// Record the highest active layer, pushed on every layer-stack change
    pub fn observe_layer(&mut self, layer: u8) {
        self.detector.observe_layer(layer);
    }

    /// Record the Num Lock state, pulled each tick
    pub fn poll_num_lock(&mut self, num_lock: bool) {
        self.detector.poll_num_lock(num_lock);
    }

    /// Record the battery percentage, pulled each tick
    ///
    /// Ignored unless the battery capability is set.
    pub fn poll_battery(&mut self, percent: i8) {
        if self.capabilities.has_battery {
            self.detector.poll_battery(percent);
        }
    }

    /// Last-known observed values
    pub fn observed(&self) -> &super::observed::ObservedValues {
        self.detector.observed()
    }

    /// Kinds pending transmission
    pub fn dirty(&self) -> &super::observed::DirtyFlags {
        self.detector.dirty()
    }

    /// Run one scheduling tick
    ///
    /// `now_ms` is a monotonic millisecond counter; elapsed checks use
    /// wrapping arithmetic so counter rollover is harmless. No-op while
    /// suspended.
    pub fn tick(&mut self, now_ms: u32) {
        if self.state != LinkState::Active {
            return;
        }
        self.tick_startup(now_ms);
        self.tick_sends(now_ms);
    }

    /// Advance the handshake when its current window has elapsed
    fn tick_startup(&mut self, now_ms: u32) {
        let Some(window) = self.startup.window_ms() else {
            return;
        };
        if now_ms.wrapping_sub(self.phase_stamp_ms) <= window {
            return;
        }
        self.phase_stamp_ms = now_ms;

        let observed = *self.detector.observed();
        match self.startup {
            StartupPhase::AwaitFirstWindow => {
                self.transport.write_frame(&Update::Layer(observed.layer).to_frame());
            }
            StartupPhase::SendIndicators => {
                self.transport
                    .write_frame(&Update::Indicators(observed.num_lock).to_frame());
            }
            StartupPhase::SendBattery => {
                // Advance even without a battery source
                if self.capabilities.has_battery {
                    self.transport
                        .write_frame(&Update::Battery(observed.battery_percent).to_frame());
                }
            }
            StartupPhase::Done => {}
        }
        self.startup = self.startup.advance();
    }

    /// Drain pending dirty flags behind one transport start/stop cycle
    fn tick_sends(&mut self, now_ms: u32) {
        if self.detector.dirty.any() && self.debounce_ms.is_none() {
            if !self.transport_running {
                self.transport.start();
                self.transport_running = true;
            }
            self.debounce_ms = Some(now_ms);
        }

        if let Some(armed_ms) = self.debounce_ms {
            if now_ms.wrapping_sub(armed_ms) > SEND_DEBOUNCE_MS {
                self.drain_dirty();
                self.debounce_ms = None;
            }
        }

        // Idle the transport only once the handshake has gone out too
        if self.capabilities.link_idle
            && self.transport_running
            && self.startup.is_done()
            && !self.detector.dirty.any()
        {
            self.transport.stop();
            self.transport_running = false;
        }
    }

    /// Send each pending kind once, in fixed order, and clear its flag
    fn drain_dirty(&mut self) {
        let observed = *self.detector.observed();
        if self.detector.dirty.layer {
            self.transport.write_frame(&Update::Layer(observed.layer).to_frame());
            self.detector.dirty.layer = false;
        }
        if self.detector.dirty.battery {
            self.transport
                .write_frame(&Update::Battery(observed.battery_percent).to_frame());
            self.detector.dirty.battery = false;
        }
        if self.detector.dirty.num_lock {
            self.transport
                .write_frame(&Update::Indicators(observed.num_lock).to_frame());
            self.detector.dirty.num_lock = false;
        }
    }
}
