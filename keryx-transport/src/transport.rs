//! Transport facade
//!
//! Public send/receive/peek surface over the two packet queues and the
//! handshake controller. One instance owns every piece of link state -
//! there are no globals, so multiple links (or a link talking to fakes
//! in a test) coexist freely.
//!
//! # Execution contexts
//!
//! Two contexts touch a transport: the foreground code calling the
//! public API, and the transaction context - either the READY-line
//! interrupt handler calling [`Transport::on_ready`], or the same
//! foreground thread pumping the handshake from inside `receive`/`peek`
//! in polled mode. Each queue is produced on one context and consumed
//! on the other, never both, which is what makes the lock-free queues
//! sound (see [`crate::queue`]).
//!
//! In interrupt mode, wire the platform's level-low interrupt on the
//! READY line to `on_ready`:
//!
//! ```ignore
//! fn ready_line_isr() {
//!     LINK.lock(|link| link.on_ready());
//! }
//! ```

use core::fmt::Write;

use heapless::String;
use keryx_hal::{ByteExchange, DebugSink, DelayMs, InputPin, IrqGate, OutputPin};

use crate::config::LinkConfig;
use crate::handshake::Handshake;
use crate::packet::{Packet, MAX_LENGTH};
use crate::queue::PacketQueue;
use crate::transaction::Engine;

/// Slots per queue; one stays empty, so 15 packets buffer per direction
pub const QUEUE_DEPTH: usize = 16;

/// Wait after reset for the radio to take control of its lines - they
/// float for a few milliseconds
const SETTLE_DELAY_MS: u32 = 30;

/// The physical lines of one link
///
/// Reset and active-sense are optional: boards without them pass `None`
/// and the corresponding init steps are skipped.
pub struct LinkPins<REQ, RDY, RST, ACT> {
    /// REQUEST output (active low)
    pub request: REQ,
    /// READY input (active low)
    pub ready: RDY,
    /// Radio reset output, pulsed during init
    pub reset: Option<RST>,
    /// Radio activity sense input, informational only
    pub active: Option<ACT>,
}

/// Packet transport over one radio link
pub struct Transport<SPI, REQ, RDY, RST, ACT, DLY, IRQ, LOG> {
    config: LinkConfig,
    handshake: Handshake<REQ, RDY, IRQ>,
    engine: Engine<SPI>,
    reset: Option<RST>,
    active: Option<ACT>,
    delay: DLY,
    sink: LOG,
    debug: bool,
    tx: PacketQueue<QUEUE_DEPTH>,
    rx: PacketQueue<QUEUE_DEPTH>,
}

impl<SPI, REQ, RDY, RST, ACT, DLY, IRQ, LOG> Transport<SPI, REQ, RDY, RST, ACT, DLY, IRQ, LOG>
where
    SPI: ByteExchange,
    REQ: OutputPin,
    RDY: InputPin,
    RST: OutputPin,
    ACT: InputPin,
    DLY: DelayMs,
    IRQ: IrqGate,
    LOG: DebugSink,
{
    pub fn new(
        bus: SPI,
        pins: LinkPins<REQ, RDY, RST, ACT>,
        irq: IRQ,
        delay: DLY,
        sink: LOG,
        config: LinkConfig,
    ) -> Self {
        Self {
            handshake: Handshake::new(pins.request, pins.ready, irq, config.interrupt_mode),
            engine: Engine::new(bus),
            reset: pins.reset,
            active: pins.active,
            delay,
            sink,
            debug: false,
            config,
            tx: PacketQueue::new(),
            rx: PacketQueue::new(),
        }
    }

    /// Bring the link to its known idle state
    ///
    /// Pulses the radio's reset pin per the board table, drives REQUEST
    /// to idle, empties both queues, waits for the radio's lines to
    /// settle and, in interrupt mode, opens the READY interrupt gate.
    /// The gate must be level-triggered: a READY line already low at
    /// this point still gets serviced.
    pub fn init(&mut self) {
        if let Some(reset) = &mut self.reset {
            for step in self.config.board.reset_sequence() {
                reset.set_state(step.level);
                if step.hold_ms > 0 {
                    self.delay.delay_ms(step.hold_ms);
                }
            }
        }

        self.handshake.idle_lines();
        self.tx.flush();
        self.rx.flush();

        self.delay.delay_ms(SETTLE_DELAY_MS);

        self.handshake.arm();
    }

    /// Queue a command and solicit a transaction
    ///
    /// Fails without side effect when the packet is oversized or the
    /// outbound queue is full; both are retryable. REQUEST is asserted
    /// only on successful enqueue, and only if the inbound queue has
    /// room for the answering event.
    pub fn send(&mut self, packet: &Packet) -> bool {
        if packet.len as usize > MAX_LENGTH {
            return false;
        }
        if !self.tx.enqueue(packet) {
            return false;
        }
        self.handshake.solicit(self.tx.is_empty(), self.rx.is_full());
        if self.debug {
            self.mirror("C", packet);
        }
        true
    }

    /// Take the oldest received event
    ///
    /// Polled mode pumps the handshake once first, so calling this in a
    /// loop is all a polled application needs. Returns `false` when no
    /// event is queued.
    pub fn receive(&mut self, out: &mut Packet) -> bool {
        if !self.config.interrupt_mode {
            self.pump();
        }

        let was_full = self.rx.is_full();
        if !self.rx.dequeue(Some(out)) {
            return false;
        }
        if was_full {
            // Full → not-full: the READY interrupt was left masked when
            // the queue filled; this dequeue makes room again
            self.handshake.rearm_after_drain();
        }
        if self.debug {
            self.mirror("E", out);
        }
        true
    }

    /// Copy the oldest received event without consuming it
    pub fn peek(&mut self, out: &mut Packet) -> bool {
        if !self.config.interrupt_mode {
            self.pump();
        }
        self.rx.peek(out)
    }

    /// READY-line interrupt entry point
    ///
    /// Call from the platform's level-low handler for the READY line.
    /// Runs one full exchange and queues the received event.
    pub fn on_ready(&mut self) {
        self.service_ready();
    }

    /// One handshake evaluation step (polled mode)
    ///
    /// READY low means the radio is prepared: run the exchange.
    /// Otherwise solicit a transaction if flow control allows one.
    fn pump(&mut self) {
        if self.handshake.ready_asserted() {
            self.service_ready();
            return;
        }
        self.handshake
            .solicit(self.tx.is_empty(), self.rx.is_full());
    }

    /// Run one transaction and absorb its event
    fn service_ready(&mut self) {
        self.handshake.begin_transaction();

        let event = *self.engine.run(&mut self.handshake, &mut self.tx);

        if event.len > 0 && !self.rx.enqueue(&event) {
            // Flow control guarantees room was reserved before the
            // transaction was invited; a full queue here means the
            // sizing contract with the radio is broken, and continuing
            // would corrupt the queue.
            panic!("inbound queue overflow: flow-control invariant violated");
        }

        let rx_full = self.rx.is_full();
        self.handshake.finish_transaction(!rx_full);

        // Pipeline the next transaction while commands are pending
        self.handshake.solicit(self.tx.is_empty(), rx_full);
    }

    /// True when no received event is waiting
    pub fn rx_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// True when the inbound queue cannot take another event
    pub fn rx_full(&self) -> bool {
        self.rx.is_full()
    }

    /// True when no command is waiting to go out
    pub fn tx_empty(&self) -> bool {
        self.tx.is_empty()
    }

    /// True when the outbound queue cannot take another command
    pub fn tx_full(&self) -> bool {
        self.tx.is_full()
    }

    /// Drop every queued packet in both directions
    pub fn flush(&mut self) {
        self.tx.flush();
        self.rx.flush();
    }

    /// Mirror queued commands and delivered events to the debug sink
    pub fn set_debug(&mut self, enable: bool) {
        self.debug = enable;
    }

    /// Radio activity line level, if the board wires one
    pub fn radio_active(&self) -> Option<bool> {
        self.active.as_ref().map(|pin| pin.is_high())
    }

    /// The configuration this link was built with
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Current handshake state, for diagnostics
    pub fn link_state(&self) -> crate::handshake::LinkState {
        self.handshake.state()
    }

    fn mirror(&mut self, tag: &str, packet: &Packet) {
        // Worst case: tag + 2-digit length + 31 * " XX"
        let mut line: String<128> = String::new();
        let _ = write!(line, "{} {}:", tag, packet.len);
        for byte in packet.payload() {
            let _ = write!(line, " {:02X}", byte);
        }
        self.sink.write_line(&line);
    }
}
