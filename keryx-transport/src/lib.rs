//! Packet transport between a host MCU and a companion radio chip
//!
//! The radio sits on a synchronous serial bus and adds a two-wire
//! handshake on top: the host drives REQUEST to ask for a transaction,
//! the chip drives READY (active low) when it is prepared to transact.
//! Every transaction is one full-duplex, length-prefixed exchange - a
//! command travels out while an event travels in:
//!
//! ```text
//!  host ──►  ┌────────┬─────────┬─────────┬─────┐
//!            │ LENGTH │ BYTE 0  │ BYTE 1  │ ... │
//!            └────────┴─────────┴─────────┴─────┘
//!  host ◄──  ┌────────┬─────────┬─────────┬─────┐
//!            │ STATUS │ LENGTH  │ BYTE 0  │ ... │
//!            └────────┴─────────┴─────────┴─────┘
//! ```
//!
//! The number of payload positions actually clocked is negotiated from
//! both sides' advertised lengths (see [`transaction`]). Packets are
//! opaque: this crate never interprets command or event contents.
//!
//! Outbound commands and inbound events each sit in a fixed-capacity
//! ring queue. The handshake controller only solicits a transaction
//! when there is a command to send *and* room to receive the resulting
//! event, so the radio is never offered more events than the host can
//! absorb. The same code path serves polled operation and an
//! interrupt-driven READY line; see [`transport::Transport`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod config;
pub mod handshake;
pub mod packet;
pub mod queue;
pub mod transaction;
pub mod transport;

pub use config::{Board, LinkConfig, ResetStep};
pub use handshake::{Handshake, LinkState};
pub use packet::{Packet, MAX_LENGTH};
pub use queue::PacketQueue;
pub use transport::{LinkPins, Transport, QUEUE_DEPTH};
