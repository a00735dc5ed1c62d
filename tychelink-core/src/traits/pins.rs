//! GPIO output trait

/// Trait for a push-pull output line
///
/// Used for the display enable line and the USB source-select line.
/// GPIO writes cannot fail observably, so the operations are infallible.
pub trait EnableLine {
    /// Drive the line high
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);
}
