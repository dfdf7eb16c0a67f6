//! Length-prefixed packet type
//!
//! A packet is at most [`MAX_LENGTH`] payload bytes plus a one-byte
//! length prefix on the wire. Received packets additionally carry the
//! hardware status code the radio returns with the first exchanged byte.

/// Maximum payload length in bytes (chip-imposed)
pub const MAX_LENGTH: usize = 31;

/// One command or event packet
///
/// Value type: queue slots store packets by copy, so no two slots ever
/// alias. `status` is produced by the receive path; on outbound packets
/// it is ignored and never reaches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Payload length, `0..=MAX_LENGTH`
    pub len: u8,
    /// Payload bytes; only `data[..len]` is meaningful
    pub data: [u8; MAX_LENGTH],
    /// Hardware status code (receive direction only)
    pub status: u8,
}

impl Packet {
    /// The zero-length placeholder, sent when the host has nothing to say
    pub const fn empty() -> Self {
        Self {
            len: 0,
            data: [0; MAX_LENGTH],
            status: 0,
        }
    }

    /// Build a packet from a payload slice
    ///
    /// Returns `None` if the slice exceeds [`MAX_LENGTH`].
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() > MAX_LENGTH {
            return None;
        }
        let mut packet = Self::empty();
        packet.len = payload.len() as u8;
        packet.data[..payload.len()].copy_from_slice(payload);
        Some(packet)
    }

    /// The meaningful payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// True when the packet carries no payload
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Packet {
    fn default() -> Self {
        Self::empty()
    }
}
