//! Keryx Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the transport core needs from a
//! board: digital pins for the handshake lines, the full-duplex
//! byte-exchange primitive, a millisecond delay, the ready-line interrupt
//! gate, and a debug text sink. Chip-specific HALs (or the host-side
//! mocks in `keryx-hal-mock`) implement these, so the same transport code
//! runs on any platform.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keryx-transport (queues + handshake)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keryx-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board HAL     │       │ keryx-hal-    │
//! │ (embedded)    │       │ mock (host)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Handshake and reset lines
//! - [`bus::ByteExchange`] - Single full-duplex byte swap
//! - [`delay::DelayMs`] - Blocking settle delays
//! - [`irq::IrqGate`] - Ready-line interrupt delivery gate
//! - [`log::DebugSink`] - Diagnostic text output

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod delay;
pub mod gpio;
pub mod irq;
pub mod log;

// Re-export key traits at crate root for convenience
pub use bus::ByteExchange;
pub use delay::DelayMs;
pub use gpio::{InputPin, OutputPin};
pub use irq::IrqGate;
pub use log::{DebugSink, NullSink};
