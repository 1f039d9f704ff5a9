// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # BLE-MIDI Packet Encoder
//!
//! A `no_std` encoder that packs discrete MIDI messages into the fixed-size
//! payload of the BLE-MIDI GATT characteristic, exploiting the protocol's
//! timestamp and running-status compression.
//!
//! ## Design Constraints
//!
//! - **No heap allocations** (const generics for fixed buffers)
//! - **`no_std` compatible** (the `std` feature is for host testing only)
//! - **No panics** in library paths (Result-based error handling)
//!
//! ## Packet Format
//!
//! ```text
//! +--------+----+--------+------+----+--------+------+----
//! | HEADER | TS | STATUS | DATA | TS | STATUS | DATA | ...
//! +--------+----+--------+------+----+--------+------+----
//!    1B      1B    1B     1-2B
//! ```
//!
//! - HEADER: bit7=1, bit6=0, bits 5-0 = timestamp bits 12-7; written once,
//!   as the first byte of every packet
//! - TS: bit7=1, bits 6-0 = timestamp bits 6-0; omitted when the timestamp
//!   is unchanged from the previous message in the packet
//! - STATUS: MIDI status byte; omitted under running status when both status
//!   and timestamp are unchanged
//! - DATA: 1-2 MIDI data bytes, written unchanged
//!
//! ## Feature Flags
//!
//! - `std` -- Enable std (host testing, `std::error::Error`, examples)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

/// The packet encoder (buffer, running state, capacity accounting)
pub mod encoder;

/// Error types for the BLE-MIDI encoder
pub mod error;

/// MIDI message value type and status constants
pub mod message;

/// 13-bit BLE-MIDI timing field
pub mod timestamp;

/// Transport abstraction for completed packets
pub mod transport;

// Re-exports for convenience
pub use crate::encoder::{BleMidiEncoder, PacketEncoder};
pub use crate::error::{Error, Result};
pub use crate::message::MidiMessage;
pub use crate::timestamp::Timestamp;
pub use crate::transport::{NullTransport, Transport};

/// Payload size (bytes) of the standard BLE-MIDI GATT characteristic
pub const DEFAULT_PACKET_SIZE: usize = 20;

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
