// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Transport abstraction for completed BLE-MIDI packets
//!
//! The encoder hands a whole packet to the transport in a single call: no
//! chunking, no protocol negotiation, no retry policy. Implementors are
//! typically GATT characteristic writes/notifies, but anything that can
//! deliver up to `CAPACITY` bytes at once will do.

use crate::error::Result;

/// Transport for completed packets
///
/// `transmit` may block (it ultimately performs link-layer I/O); its latency
/// is opaque to the encoder. Returning an error leaves the packet buffered
/// in the encoder for a later retry.
pub trait Transport {
    /// Deliver one completed packet
    fn transmit(&mut self, packet: &[u8]) -> Result<()>;
}

/// Null transport (for testing and wiring)
///
/// Accepts and discards every packet.
#[derive(Debug, Default)]
pub struct NullTransport;

impl NullTransport {
    /// Create a new null transport
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for NullTransport {
    fn transmit(&mut self, _packet: &[u8]) -> Result<()> {
        // Discard packet
        Ok(())
    }
}
