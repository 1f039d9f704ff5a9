// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the BLE-MIDI encoder

use core::fmt;

/// Result type for BLE-MIDI operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for the BLE-MIDI encoder
///
/// Every failure is recoverable by caller-driven retry: a rejected append
/// leaves the packet untouched, a failed flush keeps the bytes queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Message does not fit in the remaining packet space
    PacketFull,

    /// Flush requested on an empty packet
    EmptyPacket,

    /// Transport rejected the packet
    Transport,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PacketFull => write!(f, "Packet full"),
            Error::EmptyPacket => write!(f, "Packet empty"),
            Error::Transport => write!(f, "Transport error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
