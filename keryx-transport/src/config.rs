//! Link configuration and board reset tables
//!
//! Boards differ only in how the radio's reset pin must be pulsed, so a
//! board is a row in a data table rather than a branch in the reset
//! code: adding a board means adding a sequence, not editing logic.

/// One step of a reset pulse: drive the level, hold it for `hold_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetStep {
    /// Level to drive on the reset pin
    pub level: bool,
    /// Milliseconds to hold before the next step (0 = no hold)
    pub hold_ms: u32,
}

/// Supported carrier boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Board {
    /// Reset wired straight to the radio: direct high-low-high pulse
    #[default]
    Generic,
    /// Rev 1 shield: inverted reset behind a power-on-reset circuit
    /// that needs ~100 ms to trigger
    ShieldV1,
    /// Rev 2 shield: same inverted power-on-reset arrangement
    ShieldV2,
}

const DIRECT_PULSE: &[ResetStep] = &[
    ResetStep {
        level: true,
        hold_ms: 0,
    },
    ResetStep {
        level: false,
        hold_ms: 0,
    },
    ResetStep {
        level: true,
        hold_ms: 0,
    },
];

const INVERTED_POR_PULSE: &[ResetStep] = &[
    ResetStep {
        level: true,
        hold_ms: 100,
    },
    ResetStep {
        level: false,
        hold_ms: 0,
    },
];

impl Board {
    /// The reset-pin sequence this board requires
    pub fn reset_sequence(&self) -> &'static [ResetStep] {
        match self {
            Board::Generic => DIRECT_PULSE,
            Board::ShieldV1 | Board::ShieldV2 => INVERTED_POR_PULSE,
        }
    }
}

/// Transport configuration, immutable for the life of the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Carrier board, selects the reset-pulse variant
    pub board: Board,
    /// Bus clock divisor, applied by the board HAL when it constructs
    /// the bus (the radio tops out around 3 MHz)
    pub clock_divider: u8,
    /// READY-line interrupt drives transactions; otherwise the caller
    /// polls via the receive/peek entry points
    pub interrupt_mode: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            board: Board::Generic,
            clock_divider: 8,
            interrupt_mode: false,
        }
    }
}
