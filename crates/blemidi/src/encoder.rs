// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! BLE-MIDI packet encoder
//!
//! Packs discrete MIDI messages into one fixed-capacity packet, deciding per
//! message how many timestamp/status bytes it actually needs:
//!
//! - empty packet: header byte + timestamp byte + status byte + data
//! - status changed: timestamp byte + status byte + data
//! - timestamp changed: timestamp byte + data (running status)
//! - neither changed: data only
//!
//! Capacity accounting is exact: the marginal cost of a message is computed
//! before any byte is written, so a rejected append never leaves a partial
//! message in the packet. The coarse [`PacketEncoder::is_full`] heuristic is
//! a fast pre-check only, never the sole guard.

use crate::error::{Error, Result};
use crate::message::MidiMessage;
use crate::timestamp::Timestamp;
use crate::transport::Transport;
use crate::DEFAULT_PACKET_SIZE;

/// Worst-case cost of the first message in a packet:
/// header + timestamp + status + 2 data bytes
const MAX_FIRST_MESSAGE_COST: usize = 5;

/// Worst-case cost of a subsequent message:
/// timestamp + status + 2 data bytes
const MAX_NEXT_MESSAGE_COST: usize = 4;

/// Stateful encoder for one in-flight BLE-MIDI packet
///
/// Owns a fixed `CAPACITY`-byte buffer plus the running status/timestamp of
/// the most recently appended message. Not reentrant: `&mut self` on every
/// mutating operation, no internal locking.
///
/// # Example
///
/// ```ignore
/// let mut encoder = BleMidiEncoder::new();
/// let now = Timestamp::from_millis(millis());
///
/// encoder.append_message(&MidiMessage::note_on(0, 60, 100), now)?;
/// encoder.append_message(&MidiMessage::note_on(0, 64, 100), now)?;
/// encoder.flush(&mut transport)?;
/// ```
#[derive(Debug, Clone)]
pub struct PacketEncoder<const CAPACITY: usize> {
    /// Packet bytes; `buf[..len]` is valid
    buf: [u8; CAPACITY],

    /// Number of valid bytes
    len: usize,

    /// Status byte of the last appended message (meaningful while len > 0)
    last_status: u8,

    /// Timestamp of the last appended message (meaningful while len > 0)
    last_timestamp: Timestamp,
}

/// Encoder sized for the standard 20-byte characteristic payload
pub type BleMidiEncoder = PacketEncoder<DEFAULT_PACKET_SIZE>;

impl<const CAPACITY: usize> PacketEncoder<CAPACITY> {
    /// A packet must hold at least one worst-case message
    const CAPACITY_CHECK: () = assert!(
        CAPACITY >= MAX_FIRST_MESSAGE_COST,
        "packet capacity must hold at least one full message"
    );

    /// Create an empty encoder
    pub const fn new() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            buf: [0; CAPACITY],
            len: 0,
            last_status: 0,
            last_timestamp: Timestamp::from_millis(0),
        }
    }

    /// True iff no bytes are buffered
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Coarse fullness check: remaining space is below the worst case a next
    /// message could need
    ///
    /// This is a conservative fast heuristic; [`Self::append_message`]
    /// computes the exact marginal cost before writing and is the
    /// authoritative guard.
    pub const fn is_full(&self) -> bool {
        self.len > CAPACITY - MAX_NEXT_MESSAGE_COST
    }

    /// Number of bytes currently buffered
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Buffered packet bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Append one message to the packet
    ///
    /// `now` is the caller-supplied timestamp for this message; the encoder
    /// never reads a clock itself.
    ///
    /// Returns [`Error::PacketFull`] if the message's marginal cost exceeds
    /// the remaining space. Rejection is atomic: no byte is written and the
    /// running state is unchanged, so the caller can flush and retry.
    pub fn append_message(&mut self, msg: &MidiMessage, now: Timestamp) -> Result<()> {
        let data = msg.data();
        let was_empty = self.is_empty();
        let new_status = was_empty || msg.status() != self.last_status;
        let new_timestamp = now != self.last_timestamp;

        let mut cost = data.len();
        if was_empty {
            cost += 1; // packet header byte
        }
        if new_status {
            cost += 2; // timestamp byte + status byte
        } else if new_timestamp {
            cost += 1; // timestamp byte only, status elided
        }

        if self.len + cost > CAPACITY {
            log::trace!(
                "[BLEMIDI] append rejected: {} buffered + {} needed > {}",
                self.len,
                cost,
                CAPACITY
            );
            return Err(Error::PacketFull);
        }

        if was_empty {
            self.push(now.header_byte());
        }
        if new_status {
            self.push(now.message_byte());
            self.push(msg.status());
        } else if new_timestamp {
            self.push(now.message_byte());
        }
        for &byte in data {
            self.push(byte);
        }

        self.last_status = msg.status();
        self.last_timestamp = now;
        Ok(())
    }

    /// Hand the buffered packet to the transport
    ///
    /// Returns [`Error::EmptyPacket`] if nothing is buffered. On transport
    /// failure the buffer is left byte-for-byte intact, so a later flush
    /// re-sends the identical packet. On success the packet is cleared.
    pub fn flush<T: Transport>(&mut self, transport: &mut T) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyPacket);
        }
        transport.transmit(&self.buf[..self.len])?;
        log::debug!("[BLEMIDI] sent {} byte packet", self.len);
        self.len = 0;
        Ok(())
    }

    /// Append one message and flush immediately
    ///
    /// If the append fails the transport is not touched; callers needing
    /// guaranteed delivery must flush the pending packet first and retry.
    pub fn send<T: Transport>(
        &mut self,
        msg: &MidiMessage,
        now: Timestamp,
        transport: &mut T,
    ) -> Result<()> {
        self.append_message(msg, now)?;
        self.flush(transport)
    }

    /// Write one byte; caller has already verified capacity
    fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }
}

impl<const CAPACITY: usize> Default for PacketEncoder<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}
