//! Mock delays

use std::cell::RefCell;
use std::rc::Rc;

use keryx_hal::DelayMs;

/// Delay that returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDelay;

impl DelayMs for NullDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

/// Delay recording every requested duration
#[derive(Clone, Default)]
pub struct RecordingDelay {
    calls: Rc<RefCell<Vec<u32>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested durations in call order, milliseconds
    pub fn calls(&self) -> Vec<u32> {
        self.calls.borrow().clone()
    }
}

impl DelayMs for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.borrow_mut().push(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_delay() {
        let mut delay = RecordingDelay::new();
        let handle = delay.clone();

        delay.delay_ms(100);
        delay.delay_ms(30);

        assert_eq!(handle.calls(), vec![100, 30]);
    }
}
