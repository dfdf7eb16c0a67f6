//! Fixed-capacity packet ring queue
//!
//! One queue per direction, single producer and single consumer each:
//! the foreground produces into the outbound queue and consumes the
//! inbound one, the transaction context does the opposite. With that
//! discipline only the full/empty boundary checks can race across
//! contexts, so they are the only operations that take a critical
//! section - everything else runs unmasked.

use crate::packet::Packet;

/// Ring queue of `N` packet slots, `N - 1` usable
///
/// One slot stays empty to tell a full queue from an empty one:
/// empty ⇔ `head == tail`, full ⇔ `(tail + 1) % N == head`.
#[derive(Debug)]
pub struct PacketQueue<const N: usize> {
    /// Next slot to dequeue
    head: usize,
    /// Next slot to enqueue
    tail: usize,
    slots: [Packet; N],
}

impl<const N: usize> PacketQueue<N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            head: 0,
            tail: 0,
            slots: [Packet::empty(); N],
        }
    }

    /// Append a packet by copy
    ///
    /// Returns `false` without mutating anything iff the queue is full.
    /// The packet is stored verbatim, status byte included: the receive
    /// path routes events through here and their status must survive to
    /// the consumer.
    pub fn enqueue(&mut self, packet: &Packet) -> bool {
        let next = (self.tail + 1) % N;
        if next == self.head {
            return false;
        }
        self.slots[self.tail] = *packet;
        self.tail = next;
        true
    }

    /// Remove the oldest packet
    ///
    /// Returns `false` iff the queue is empty. Passing `None` discards
    /// the popped packet, which lets a consumer drop a message without
    /// inspecting it.
    pub fn dequeue(&mut self, out: Option<&mut Packet>) -> bool {
        if self.head == self.tail {
            return false;
        }
        if let Some(out) = out {
            *out = self.slots[self.head];
        }
        self.head = (self.head + 1) % N;
        true
    }

    /// Copy the oldest packet without removing it
    ///
    /// Returns `false` iff the queue is empty. Never moves `head`.
    pub fn peek(&self, out: &mut Packet) -> bool {
        if self.head == self.tail {
            return false;
        }
        *out = self.slots[self.head];
        true
    }

    /// True when no packet is queued
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True when a further enqueue would be rejected
    ///
    /// Safe to call while the producer on the other execution context
    /// may be moving `tail`: the index read and the comparison happen
    /// inside one critical section, so a torn observation is impossible.
    pub fn is_full(&self) -> bool {
        critical_section::with(|_| (self.tail + 1) % N == self.head)
    }

    /// Number of queued packets
    pub fn len(&self) -> usize {
        (self.tail + N - self.head) % N
    }

    /// Drop every queued packet
    pub fn flush(&mut self) {
        critical_section::with(|_| {
            self.head = 0;
            self.tail = 0;
        });
    }
}

impl<const N: usize> Default for PacketQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
