// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! 13-bit BLE-MIDI timing field
//!
//! BLE-MIDI carries a rolling millisecond counter in 13 bits, split across
//! two wire bytes:
//!
//! ```text
//! Header byte:    1 0 t12 t11 t10 t9 t8 t7
//! Timestamp byte: 1 t6 t5 t4 t3 t2 t1 t0
//! ```
//!
//! The field wraps every 8192 ms. Wraparound is handled purely by bitwise
//! truncation; the encoder does not detect or compensate for rollover.

/// Marker bit (bit 7) set on both the header byte and the timestamp byte
pub const TIMESTAMP_MARKER: u8 = 0x80;

/// Mask reducing the millisecond counter to the 13-bit wire field
pub const TIMESTAMP_MASK: u16 = 0x1FFF;

/// Mask for the high 6 bits carried by the header byte (bit 6 stays clear)
const HEADER_HIGH_MASK: u8 = 0x3F;

/// Mask for the low 7 bits carried by the per-message timestamp byte
const MESSAGE_LOW_MASK: u8 = 0x7F;

/// 13-bit BLE-MIDI timestamp
///
/// Constructed from a monotonic millisecond counter; the encoder only
/// consumes the value, it never reads a clock itself. Equality compares the
/// 13-bit wire field, so two readings ~8192 ms apart may alias -- inherent
/// to the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp(u16);

impl Timestamp {
    /// Reduce a millisecond counter reading to the 13-bit timing field
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis as u16 & TIMESTAMP_MASK)
    }

    /// Raw 13-bit field value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Packet header byte: bit7=1, bit6=0, bits 5-0 = timestamp bits 12-7
    pub const fn header_byte(self) -> u8 {
        TIMESTAMP_MARKER | ((self.0 >> 7) as u8 & HEADER_HIGH_MASK)
    }

    /// Per-message timestamp byte: bit7=1, bits 6-0 = timestamp bits 6-0
    pub const fn message_byte(self) -> u8 {
        TIMESTAMP_MARKER | (self.0 as u8 & MESSAGE_LOW_MASK)
    }
}
