//! Serial bus abstraction
//!
//! The transport moves packets one byte position at a time: every byte
//! the host clocks out returns one byte from the peripheral in the same
//! bus cycle. That single full-duplex swap is the only bus primitive the
//! core needs.

/// Full-duplex byte exchange
///
/// One call is one bus cycle: `out` is shifted to the peripheral while
/// the peripheral's byte for the same position is shifted back.
///
/// The transport assumes the exchange is reliable and completes in
/// bounded time; there is no retry or timeout above this trait.
pub trait ByteExchange {
    /// Swap one byte with the peripheral
    fn exchange(&mut self, out: u8) -> u8;
}
