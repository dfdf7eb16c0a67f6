//! Two-wire handshake controller
//!
//! The host asks for a transaction by driving REQUEST low; the radio
//! answers by driving READY low, and may also drive READY low on its
//! own when it has an event to deliver. This module decides when the
//! REQUEST line may be asserted and gates READY-line interrupt delivery
//! around each transaction.
//!
//! Backpressure lives here: a transaction is only solicited when there
//! is a command to send *and* the inbound queue can absorb the event
//! the transaction will produce. When the inbound queue fills, the
//! READY interrupt stays masked until a consumer drains a slot.

use keryx_hal::{InputPin, IrqGate, OutputPin};

/// Observable handshake state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No transaction pending, REQUEST deasserted
    Idle,
    /// REQUEST asserted, waiting for the radio's READY
    Requesting,
    /// READY observed low, the exchange is running
    Transacting,
}

/// Handshake-line controller
///
/// Owns the REQUEST output, the READY input and the READY-line
/// interrupt gate. Both handshake lines are active low.
pub struct Handshake<REQ, RDY, IRQ> {
    request: REQ,
    ready: RDY,
    irq: IRQ,
    state: LinkState,
    interrupt_mode: bool,
}

impl<REQ, RDY, IRQ> Handshake<REQ, RDY, IRQ>
where
    REQ: OutputPin,
    RDY: InputPin,
    IRQ: IrqGate,
{
    pub fn new(request: REQ, ready: RDY, irq: IRQ, interrupt_mode: bool) -> Self {
        Self {
            request,
            ready,
            irq,
            state: LinkState::Idle,
            interrupt_mode,
        }
    }

    /// Current state, for diagnostics and tests
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Drive REQUEST to its deasserted (high) idle level
    pub fn idle_lines(&mut self) {
        self.request.set_high();
        self.state = LinkState::Idle;
    }

    /// Open the READY interrupt gate (interrupt mode only)
    pub fn arm(&mut self) {
        if self.interrupt_mode {
            self.irq.enable();
        }
    }

    /// Assert REQUEST if a transaction may be invited
    ///
    /// The flow-control rule: solicit only when a command is queued and
    /// the inbound queue has room for the event the exchange returns.
    /// Returns whether REQUEST was asserted.
    pub fn solicit(&mut self, tx_empty: bool, rx_full: bool) -> bool {
        if tx_empty || rx_full {
            return false;
        }
        self.request.set_low();
        if self.state == LinkState::Idle {
            self.state = LinkState::Requesting;
        }
        true
    }

    /// True when the radio holds READY low
    pub fn ready_asserted(&self) -> bool {
        self.ready.is_low()
    }

    /// Enter the transacting state
    ///
    /// Masks READY interrupt delivery so the exchange cannot re-enter
    /// itself.
    pub fn begin_transaction(&mut self) {
        if self.interrupt_mode {
            self.irq.disable();
        }
        self.state = LinkState::Transacting;
    }

    /// Leave the transacting state
    ///
    /// Re-opens the interrupt gate only when `rearm` is set; the caller
    /// passes `false` while the inbound queue is full, which leaves the
    /// level-triggered interrupt latched until a consumer drains a slot.
    pub fn finish_transaction(&mut self, rearm: bool) {
        self.state = LinkState::Idle;
        if self.interrupt_mode && rearm {
            self.irq.enable();
        }
    }

    /// Re-open the interrupt gate after the inbound queue went
    /// full → not-full
    pub fn rearm_after_drain(&mut self) {
        if self.interrupt_mode {
            self.irq.enable();
        }
    }

    /// Drive REQUEST low for the duration of an exchange
    pub(crate) fn assert_request(&mut self) {
        self.request.set_low();
    }

    /// Release REQUEST after an exchange
    pub(crate) fn release_request(&mut self) {
        self.request.set_high();
    }

    /// True while REQUEST is asserted (low)
    pub fn request_asserted(&self) -> bool {
        self.request.is_set_low()
    }
}
