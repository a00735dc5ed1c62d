//! Display link controller
//!
//! Split the way the logic actually layers:
//!
//! - [`observed`]: last-known values and per-kind dirty flags
//! - [`startup`]: the staggered post-power-on handshake phases
//! - [`controller`]: link power management and the send scheduler

pub mod controller;
pub mod observed;
pub mod startup;

pub use controller::{LinkController, LinkState};
pub use observed::{ChangeDetector, DirtyFlags, ObservedValues};
pub use startup::StartupPhase;
