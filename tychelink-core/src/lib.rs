//! Board-agnostic link controller for the TychePad companion display
//!
//! The keypad drives a small status LCD over a shared half-duplex UART.
//! This crate contains everything about that link that does not touch
//! hardware directly:
//!
//! - Change detection over layer / Num Lock / battery state
//! - Link power management and low-power integration
//! - The staggered post-power-on handshake
//! - The debounced send scheduler and idle-suspend policy
//! - The USB source-switch keycode handler
//!
//! Hardware access goes through the traits in [`traits`]; the platform glue
//! implements them over its UART and GPIO drivers and calls
//! [`link::LinkController::tick`] from its periodic housekeeping loop.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod capabilities;
pub mod link;
pub mod source_switch;
pub mod traits;

pub use capabilities::LinkCapabilities;
pub use link::{ChangeDetector, DirtyFlags, LinkController, LinkState, ObservedValues, StartupPhase};
pub use source_switch::{Source, SourceSwitch};
pub use traits::{EnableLine, LinkTransport};
