//! Serial update protocol for the TychePad companion display
//!
//! The keypad pushes status updates (active layer, Num Lock, battery level)
//! to its LCD module over a unidirectional UART link. Every update uses the
//! same fixed binary frame:
//!
//! ```text
//! ┌────────┬──────────┬─────────┬───────┬──────┬───────┬─────────┐
//! │ HEADER │ RESERVED │ COMMAND │ CHECK │ FLAG │ VALUE │ TRAILER │
//! │ 0xFE   │ 0x02     │ 1B      │ 1B    │ 0x01 │ 1B    │ 1B      │
//! └────────┴──────────┴─────────┴───────┴──────┴───────┴─────────┘
//! ```
//!
//! The display firmware treats CHECK as a checksum but the convention is a
//! plain duplicate of VALUE, so it detects nothing. It is kept as-is for
//! wire compatibility.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod frame;

pub use commands::{Update, CMD_BATTERY, CMD_INDICATORS, CMD_LAYER};
pub use frame::{UpdateFrame, FrameError, FRAME_HEADER, FRAME_LEN};
