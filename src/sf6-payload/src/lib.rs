// SPDX-FileCopyrightText: 2026 sf6mon contributors
//
// SPDX-License-Identifier: BSD-2-Clause

//! Decoder for the 10-byte SF₆ monitor LoRaWAN uplink payload.
//!
//! The payload carries five big-endian u16 registers: gas density, pressure
//! at 20 °C, temperature, pressure variance, and a Modbus request counter.
//! [`decode_hex`] takes the hex string as printed by the firmware;
//! [`decode`] takes the raw bytes. Both are pure functions returning a
//! [`Reading`] or a typed [`DecodeError`].

pub mod error;
pub mod math;
pub mod reading;
pub mod wire;

pub use error::{DecodeError, DecodeResult};
pub use reading::{RawValues, Reading};
pub use wire::{decode, decode_hex, RawFields, PAYLOAD_HEX_LEN, PAYLOAD_LEN};
