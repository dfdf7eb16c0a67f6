//! `embedded-hal` 1.0 adapters
//!
//! Boards that already expose their peripherals through `embedded-hal`
//! traits plug into the transport through these wrappers instead of
//! implementing the `keryx-hal` traits by hand.
//!
//! The keryx line and bus model is infallible (the radio protocol has
//! no recovery story below the packet layer), so a fallible
//! `embedded-hal` error here is treated as a broken board: the adapters
//! panic with a message rather than guess at a level or a byte. Wrap
//! the peripheral first if your platform's errors are real and
//! survivable.

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::spi::SpiBus;
use keryx_hal::{ByteExchange, DelayMs, InputPin, OutputPin};

/// Full-duplex byte exchange over an `embedded-hal` SPI bus
pub struct SpiExchange<T>(T);

impl<T: SpiBus<u8>> SpiExchange<T> {
    pub fn new(bus: T) -> Self {
        Self(bus)
    }

    /// Recover the wrapped bus
    pub fn release(self) -> T {
        self.0
    }
}

impl<T: SpiBus<u8>> ByteExchange for SpiExchange<T> {
    fn exchange(&mut self, out: u8) -> u8 {
        let mut word = [out];
        if self.0.transfer_in_place(&mut word).is_err() || self.0.flush().is_err() {
            panic!("spi byte exchange failed");
        }
        word[0]
    }
}

/// Output pin adapter tracking the driven level
///
/// `embedded-hal` has no shared-reference level query, so the adapter
/// remembers what it last drove.
pub struct OutputAdapter<T> {
    pin: T,
    level: bool,
}

impl<T: digital::OutputPin> OutputAdapter<T> {
    /// Wrap a pin, driving it to `initial_high` so the tracked level
    /// matches the hardware
    pub fn new(mut pin: T, initial_high: bool) -> Self {
        let driven = if initial_high {
            pin.set_high()
        } else {
            pin.set_low()
        };
        if driven.is_err() {
            panic!("gpio write failed");
        }
        Self {
            pin,
            level: initial_high,
        }
    }
}

impl<T: digital::OutputPin> OutputPin for OutputAdapter<T> {
    fn set_high(&mut self) {
        if self.pin.set_high().is_err() {
            panic!("gpio write failed");
        }
        self.level = true;
    }

    fn set_low(&mut self) {
        if self.pin.set_low().is_err() {
            panic!("gpio write failed");
        }
        self.level = false;
    }

    fn is_set_high(&self) -> bool {
        self.level
    }
}

/// Input pin adapter
///
/// `embedded-hal` reads take `&mut self`; a `RefCell` bridges the gap
/// to the shared-reference keryx read.
pub struct InputAdapter<T>(RefCell<T>);

impl<T: digital::InputPin> InputAdapter<T> {
    pub fn new(pin: T) -> Self {
        Self(RefCell::new(pin))
    }
}

impl<T: digital::InputPin> InputPin for InputAdapter<T> {
    fn is_high(&self) -> bool {
        match self.0.borrow_mut().is_high() {
            Ok(level) => level,
            Err(_) => panic!("gpio read failed"),
        }
    }
}

/// Millisecond delay over an `embedded-hal` delay source
pub struct DelayAdapter<T>(T);

impl<T: DelayNs> DelayAdapter<T> {
    pub fn new(delay: T) -> Self {
        Self(delay)
    }
}

impl<T: DelayNs> DelayMs for DelayAdapter<T> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
