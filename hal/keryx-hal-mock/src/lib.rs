//! Host-side fakes for every `keryx-hal` trait
//!
//! Each fake shares its state through `Rc`, so cloning one yields a
//! handle onto the same pin, bus or gate. Tests hand one clone to the
//! transport and keep another to script inputs and inspect what the
//! code under test did.

pub mod bus;
pub mod delay;
pub mod log;
pub mod pins;

pub use bus::ScriptedPeripheral;
pub use delay::{NullDelay, RecordingDelay};
pub use log::RecordingSink;
pub use pins::{MockInputPin, MockIrqGate, MockOutputPin};
