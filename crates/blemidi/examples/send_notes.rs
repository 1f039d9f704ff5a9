// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Note-Sending Example
//!
//! Encodes a short chord progression into BLE-MIDI packets and hex-dumps
//! each packet instead of writing a GATT characteristic.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --example send_notes --features std
//! ```

use std::time::Instant;

use blemidi::{BleMidiEncoder, MidiMessage, Result, Timestamp, Transport};

/// Transport that hex-dumps packets to stdout
struct HexDumpTransport;

impl Transport for HexDumpTransport {
    fn transmit(&mut self, packet: &[u8]) -> Result<()> {
        print!("packet ({:2} bytes):", packet.len());
        for byte in packet {
            print!(" {:02X}", byte);
        }
        println!();
        Ok(())
    }
}

fn main() -> Result<()> {
    let started = Instant::now();
    let mut encoder = BleMidiEncoder::new();
    let mut transport = HexDumpTransport;

    let chords: [&[u8]; 3] = [&[60, 64, 67], &[62, 65, 69], &[64, 67, 71]];

    for chord in chords {
        let now = Timestamp::from_millis(started.elapsed().as_millis() as u32);

        for &key in chord {
            encoder.append_message(&MidiMessage::note_on(0, key, 100), now)?;
        }
        for &key in chord {
            encoder.append_message(&MidiMessage::note_off(0, key, 0), now)?;
        }
        encoder.flush(&mut transport)?;

        std::thread::sleep(std::time::Duration::from_millis(250));
    }

    // Single-message convenience path
    let now = Timestamp::from_millis(started.elapsed().as_millis() as u32);
    encoder.send(&MidiMessage::program_change(0, 5), now, &mut transport)?;

    Ok(())
}
