//! Mock pins and interrupt gate

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use keryx_hal::{InputPin, IrqGate, OutputPin};

/// Mock output pin recording every driven level
#[derive(Clone)]
pub struct MockOutputPin {
    level: Rc<Cell<bool>>,
    history: Rc<RefCell<Vec<bool>>>,
}

impl MockOutputPin {
    pub fn new(initial_high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(initial_high)),
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Current driven level
    pub fn level(&self) -> bool {
        self.level.get()
    }

    /// Every level driven since construction, in order
    pub fn history(&self) -> Vec<bool> {
        self.history.borrow().clone()
    }
}

impl OutputPin for MockOutputPin {
    fn set_high(&mut self) {
        self.level.set(true);
        self.history.borrow_mut().push(true);
    }

    fn set_low(&mut self) {
        self.level.set(false);
        self.history.borrow_mut().push(false);
    }

    fn is_set_high(&self) -> bool {
        self.level.get()
    }
}

/// Mock input pin whose level the test sets
#[derive(Clone)]
pub struct MockInputPin {
    level: Rc<Cell<bool>>,
}

impl MockInputPin {
    pub fn new(initial_high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(initial_high)),
        }
    }

    /// Simulate the external signal
    pub fn set_level(&self, high: bool) {
        self.level.set(high);
    }
}

impl InputPin for MockInputPin {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// Mock interrupt gate counting every enable/disable
#[derive(Clone)]
pub struct MockIrqGate {
    enabled: Rc<Cell<bool>>,
    enables: Rc<Cell<u32>>,
    disables: Rc<Cell<u32>>,
}

impl MockIrqGate {
    /// Starts closed, as a platform's interrupt does before attach
    pub fn new() -> Self {
        Self {
            enabled: Rc::new(Cell::new(false)),
            enables: Rc::new(Cell::new(0)),
            disables: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn enable_count(&self) -> u32 {
        self.enables.get()
    }

    pub fn disable_count(&self) -> u32 {
        self.disables.get()
    }
}

impl Default for MockIrqGate {
    fn default() -> Self {
        Self::new()
    }
}

impl IrqGate for MockIrqGate {
    fn enable(&mut self) {
        self.enabled.set(true);
        self.enables.set(self.enables.get() + 1);
    }

    fn disable(&mut self) {
        self.enabled.set(false);
        self.disables.set(self.disables.get() + 1);
    }
}
