//! Hardware abstraction traits
//!
//! These traits define the interface between the link logic and the
//! platform's UART and GPIO drivers.

pub mod pins;
pub mod transport;

pub use pins::EnableLine;
pub use transport::LinkTransport;
