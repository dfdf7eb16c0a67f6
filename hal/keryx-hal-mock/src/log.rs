//! Recording debug sink

use std::cell::RefCell;
use std::rc::Rc;

use keryx_hal::DebugSink;

/// Sink collecting every written line
#[derive(Clone, Default)]
pub struct RecordingSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl DebugSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
