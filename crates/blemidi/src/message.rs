// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! MIDI message value type
//!
//! A [`MidiMessage`] is one discrete channel/system message: a status byte
//! plus one or two data bytes. The encoder does not validate MIDI semantics
//! (legal byte ranges, message length by status nibble); constructors here
//! only assemble bytes.

/// Note Off status nibble (channel 0)
pub const NOTE_OFF: u8 = 0x80;

/// Note On status nibble (channel 0)
pub const NOTE_ON: u8 = 0x90;

/// Control Change status nibble (channel 0)
pub const CONTROL_CHANGE: u8 = 0xB0;

/// Program Change status nibble (channel 0)
pub const PROGRAM_CHANGE: u8 = 0xC0;

/// Mask for the channel bits of a status byte
const CHANNEL_MASK: u8 = 0x0F;

/// A discrete MIDI message (status byte + 1-2 data bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiMessage {
    status: u8,
    data: [u8; 2],
    data_len: u8,
}

impl MidiMessage {
    /// Two-byte message (e.g. Program Change, Channel Pressure)
    pub const fn two_byte(status: u8, data1: u8) -> Self {
        Self {
            status,
            data: [data1, 0],
            data_len: 1,
        }
    }

    /// Three-byte message (e.g. Note On/Off, Control Change)
    pub const fn three_byte(status: u8, data1: u8, data2: u8) -> Self {
        Self {
            status,
            data: [data1, data2],
            data_len: 2,
        }
    }

    /// Note On for `channel` (0-15)
    pub const fn note_on(channel: u8, key: u8, velocity: u8) -> Self {
        Self::three_byte(NOTE_ON | (channel & CHANNEL_MASK), key, velocity)
    }

    /// Note Off for `channel` (0-15)
    pub const fn note_off(channel: u8, key: u8, velocity: u8) -> Self {
        Self::three_byte(NOTE_OFF | (channel & CHANNEL_MASK), key, velocity)
    }

    /// Control Change for `channel` (0-15)
    pub const fn control_change(channel: u8, controller: u8, value: u8) -> Self {
        Self::three_byte(CONTROL_CHANGE | (channel & CHANNEL_MASK), controller, value)
    }

    /// Program Change for `channel` (0-15)
    pub const fn program_change(channel: u8, program: u8) -> Self {
        Self::two_byte(PROGRAM_CHANGE | (channel & CHANNEL_MASK), program)
    }

    /// Status byte
    pub const fn status(&self) -> u8 {
        self.status
    }

    /// Data bytes (1-2)
    pub fn data(&self) -> &[u8] {
        &self.data[..self.data_len as usize]
    }

    /// Number of data bytes (1 or 2)
    pub const fn data_len(&self) -> usize {
        self.data_len as usize
    }
}
