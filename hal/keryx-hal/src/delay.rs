//! Blocking delay abstraction

/// Millisecond-resolution blocking delay
///
/// Used for reset-pulse hold times and the post-reset line settling
/// wait. Implementations may sleep or busy-wait.
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
