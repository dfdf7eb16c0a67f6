//! Full-duplex packet exchange
//!
//! One engine invocation is exactly one bus transaction. The wire
//! layout is fixed by the radio:
//!
//! - position 0: host length byte out, radio **status** byte in
//! - position 1: host payload byte 0 out, radio **length** byte in
//! - positions 2..: one payload byte in each direction per bus cycle
//!
//! The number of payload positions clocked after the headers is
//! negotiated from both advertised lengths (see [`negotiated_len`]), so
//! whichever side has more to say sets the pace and neither side's
//! packet is truncated.

use keryx_hal::{ByteExchange, InputPin, IrqGate, OutputPin};

use crate::handshake::Handshake;
use crate::packet::{Packet, MAX_LENGTH};
use crate::queue::PacketQueue;

/// Payload positions to clock after the two header exchanges
///
/// A host with nothing to send follows the radio's advertised length
/// exactly. Otherwise the larger side wins; the host's count is its
/// length minus one because payload byte 0 already went out with the
/// second header exchange. Clamped to [`MAX_LENGTH`].
pub fn negotiated_len(host_len: u8, radio_len: u8) -> usize {
    let n = if host_len == 0 {
        radio_len as usize
    } else {
        (radio_len as usize).max(host_len as usize - 1)
    };
    n.min(MAX_LENGTH)
}

/// Transaction engine
///
/// Owns the bus and a single reusable inbound packet buffer. The caller
/// must consume (enqueue) the returned packet before the next
/// transaction overwrites it.
pub struct Engine<SPI> {
    bus: SPI,
    inbound: Packet,
}

impl<SPI: ByteExchange> Engine<SPI> {
    pub fn new(bus: SPI) -> Self {
        Self {
            bus,
            inbound: Packet::empty(),
        }
    }

    /// Run one exchange
    ///
    /// Dequeues one outbound command (or sends the zero-length
    /// placeholder when the queue is empty) and clocks the negotiated
    /// number of positions, filling the inbound buffer. REQUEST is held
    /// asserted for the whole exchange and released afterward; deciding
    /// whether to solicit the next transaction is the caller's job, so
    /// the flow-control rule applies there too.
    pub fn run<REQ, RDY, IRQ, const N: usize>(
        &mut self,
        handshake: &mut Handshake<REQ, RDY, IRQ>,
        tx_queue: &mut PacketQueue<N>,
    ) -> &Packet
    where
        REQ: OutputPin,
        RDY: InputPin,
        IRQ: IrqGate,
    {
        handshake.assert_request();

        let mut out = Packet::empty();
        // Empty queue leaves the placeholder: length 0, "nothing to send"
        let _ = tx_queue.dequeue(Some(&mut out));

        self.inbound.status = self.bus.exchange(out.len);
        let advertised = self.bus.exchange(out_byte(&out, 0));
        // A misbehaving radio can advertise more than a packet holds;
        // the stored length must stay within the buffer.
        self.inbound.len = advertised.min(MAX_LENGTH as u8);

        let count = negotiated_len(out.len, advertised);
        for i in 0..count {
            self.inbound.data[i] = self.bus.exchange(out_byte(&out, i + 1));
        }

        handshake.release_request();

        &self.inbound
    }
}

/// Outbound byte for payload position `i`, zero once past the packet
///
/// The radio may negotiate more positions than the host packet holds;
/// the surplus positions carry zeros.
fn out_byte(packet: &Packet, i: usize) -> u8 {
    if i < MAX_LENGTH {
        packet.data[i]
    } else {
        0
    }
}
