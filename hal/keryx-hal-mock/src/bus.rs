//! Scripted radio peripheral
//!
//! Plays back a pre-programmed byte stream while recording everything
//! the host clocks out, one byte per full-duplex exchange - the same
//! shape as the real bus.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use keryx_hal::ByteExchange;

#[derive(Default)]
struct Inner {
    responses: VecDeque<u8>,
    sent: Vec<u8>,
}

/// Fake radio on the far end of the byte-exchange primitive
///
/// Once the scripted responses run out the peripheral answers zeros,
/// like a quiet radio would.
#[derive(Clone, Default)]
pub struct ScriptedPeripheral {
    inner: Rc<RefCell<Inner>>,
}

impl ScriptedPeripheral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes to the response stream
    pub fn script_bytes(&self, bytes: &[u8]) {
        self.inner.borrow_mut().responses.extend(bytes);
    }

    /// Append one event in wire order: status, length, payload
    pub fn script_event(&self, status: u8, payload: &[u8]) {
        let mut inner = self.inner.borrow_mut();
        inner.responses.push_back(status);
        inner.responses.push_back(payload.len() as u8);
        inner.responses.extend(payload);
    }

    /// Every byte the host has clocked out, in order
    pub fn sent(&self) -> Vec<u8> {
        self.inner.borrow().sent.clone()
    }

    /// Number of exchanges performed so far
    pub fn exchange_count(&self) -> usize {
        self.inner.borrow().sent.len()
    }

    /// True when the scripted responses have all been consumed
    pub fn script_exhausted(&self) -> bool {
        self.inner.borrow().responses.is_empty()
    }
}

impl ByteExchange for ScriptedPeripheral {
    fn exchange(&mut self, out: u8) -> u8 {
        let mut inner = self.inner.borrow_mut();
        inner.sent.push(out);
        inner.responses.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_playback() {
        let radio = ScriptedPeripheral::new();
        radio.script_bytes(&[0x10, 0x20]);

        let mut bus = radio.clone();
        assert_eq!(bus.exchange(0xA1), 0x10);
        assert_eq!(bus.exchange(0xA2), 0x20);
        // Exhausted script answers zeros
        assert_eq!(bus.exchange(0xA3), 0x00);

        assert_eq!(radio.sent(), vec![0xA1, 0xA2, 0xA3]);
        assert!(radio.script_exhausted());
    }

    #[test]
    fn test_script_event_wire_order() {
        let radio = ScriptedPeripheral::new();
        radio.script_event(0x81, &[0x01, 0x02]);

        let mut bus = radio.clone();
        assert_eq!(bus.exchange(0), 0x81); // status
        assert_eq!(bus.exchange(0), 2); // length
        assert_eq!(bus.exchange(0), 0x01);
        assert_eq!(bus.exchange(0), 0x02);
    }
}
