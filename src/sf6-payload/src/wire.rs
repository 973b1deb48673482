// SPDX-FileCopyrightText: 2026 sf6mon contributors
//
// SPDX-License-Identifier: BSD-2-Clause

//! Fixed 10-byte uplink layout and the decode entry points.
//!
//! Wire order, all fields big-endian u16:
//! bytes 0-1 density, 2-3 pressure @20 °C, 4-5 temperature,
//! 6-7 pressure variance, 8-9 Modbus counter.

use crate::error::{DecodeError, DecodeResult};
use crate::reading::Reading;

/// Payload size in bytes.
pub const PAYLOAD_LEN: usize = 10;

/// Payload size in hex characters, the unit length errors are reported in.
pub const PAYLOAD_HEX_LEN: usize = 2 * PAYLOAD_LEN;

/// The five u16 registers of one payload, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields {
    pub density: u16,
    pub pressure_20c: u16,
    pub temperature: u16,
    pub pressure_var: u16,
    pub counter: u16,
}

impl RawFields {
    /// Extract the registers from a full payload.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; PAYLOAD_LEN]) -> Self {
        let be = |i: usize| u16::from_be_bytes([bytes[i], bytes[i + 1]]);
        Self {
            density: be(0),
            pressure_20c: be(2),
            temperature: be(4),
            pressure_var: be(6),
            counter: be(8),
        }
    }

    /// Serialize back to wire form. Inverse of [`RawFields::from_bytes`].
    #[must_use]
    pub fn to_bytes(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0u8; PAYLOAD_LEN];
        out[0..2].copy_from_slice(&self.density.to_be_bytes());
        out[2..4].copy_from_slice(&self.pressure_20c.to_be_bytes());
        out[4..6].copy_from_slice(&self.temperature.to_be_bytes());
        out[6..8].copy_from_slice(&self.pressure_var.to_be_bytes());
        out[8..10].copy_from_slice(&self.counter.to_be_bytes());
        out
    }
}

/// Decode a raw payload buffer.
///
/// The buffer must be exactly [`PAYLOAD_LEN`] bytes; length errors are
/// reported in hex characters to keep one message format across both entry
/// points.
pub fn decode(bytes: &[u8]) -> DecodeResult<Reading> {
    let fixed: &[u8; PAYLOAD_LEN] =
        bytes
            .try_into()
            .map_err(|_| DecodeError::InvalidLength {
                expected: PAYLOAD_HEX_LEN,
                actual: 2 * bytes.len(),
            })?;
    Ok(Reading::from_fields(&RawFields::from_bytes(fixed)))
}

/// Decode a hex-encoded payload string.
///
/// Whitespace anywhere in the string and one leading `0x`/`0X` prefix are
/// stripped before validation. Length is checked before hex parsing, so any
/// wrong-sized input (empty, odd, truncated) fails as `InvalidLength` and
/// only correctly sized non-hex input fails as `InvalidEncoding`.
pub fn decode_hex(input: &str) -> DecodeResult<Reading> {
    let normalized = normalize(input);

    let count = normalized.chars().count();
    if count != PAYLOAD_HEX_LEN {
        return Err(DecodeError::InvalidLength {
            expected: PAYLOAD_HEX_LEN,
            actual: count,
        });
    }

    let bytes = hex::decode(&normalized).map_err(|e| DecodeError::InvalidEncoding {
        detail: e.to_string(),
    })?;
    decode(&bytes)
}

fn normalize(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    match stripped.strip_prefix("0x").or_else(|| stripped.strip_prefix("0X")) {
        Some(rest) => rest.to_string(),
        None => stripped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "09FA157C0B72157C002A";

    #[test]
    fn test_decode_canonical_example() {
        let reading = decode_hex(CANONICAL).unwrap();
        assert_eq!(reading.raw_values.sf6_density_raw, 2554);
        assert_eq!(reading.raw_values.sf6_pressure_20c_raw, 5500);
        assert_eq!(reading.raw_values.sf6_temperature_raw, 2930);
        assert_eq!(reading.raw_values.sf6_pressure_var_raw, 5500);
        assert_eq!(reading.modbus_counter, 42);
        assert_eq!(reading.sf6_density, 25.54);
        assert_eq!(reading.sf6_pressure_20c, 550.0);
        assert_eq!(reading.sf6_temperature_k, 293.0);
        assert_eq!(reading.sf6_temperature_c, 19.85);
        assert_eq!(reading.sf6_pressure_var, 550.0);
    }

    #[test]
    fn test_decode_bytes_matches_hex() {
        let bytes = [
            0x09, 0xFA, 0x15, 0x7C, 0x0B, 0x72, 0x15, 0x7C, 0x00, 0x2A,
        ];
        assert_eq!(decode(&bytes).unwrap(), decode_hex(CANONICAL).unwrap());
    }

    #[test]
    fn test_invalid_length() {
        for (input, actual) in [
            ("", 0),
            ("09FA157C0B72157C002", 19),
            ("09FA157C0B72157C002A00", 22),
            ("0x", 0),
        ] {
            assert_eq!(
                decode_hex(input),
                Err(DecodeError::InvalidLength {
                    expected: 20,
                    actual,
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_invalid_length_bytes() {
        assert_eq!(
            decode(&[0u8; 9]),
            Err(DecodeError::InvalidLength {
                expected: 20,
                actual: 18,
            })
        );
        assert_eq!(
            decode(&[0u8; 11]),
            Err(DecodeError::InvalidLength {
                expected: 20,
                actual: 22,
            })
        );
    }

    #[test]
    fn test_invalid_encoding() {
        let input = "GG".to_string() + &CANONICAL[2..];
        assert!(matches!(
            decode_hex(&input),
            Err(DecodeError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_normalization_equivalence() {
        let plain = decode_hex(CANONICAL).unwrap();
        assert_eq!(decode_hex("0x09FA157C0B72157C002A").unwrap(), plain);
        assert_eq!(decode_hex("0X09FA157C0B72157C002A").unwrap(), plain);
        assert_eq!(
            decode_hex("09 FA 15 7C 0B 72 15 7C 00 2A").unwrap(),
            plain
        );
        assert_eq!(
            decode_hex("  0x 09FA 157C 0B72 157C 002A\n").unwrap(),
            plain
        );
        assert_eq!(decode_hex("09fa157c0b72157c002a").unwrap(), plain);
    }

    #[test]
    fn test_extremes_round_trip_wire() {
        for fields in [
            RawFields {
                density: 0x0000,
                pressure_20c: 0x0000,
                temperature: 0x0000,
                pressure_var: 0x0000,
                counter: 0x0000,
            },
            RawFields {
                density: 0xFFFF,
                pressure_20c: 0xFFFF,
                temperature: 0xFFFF,
                pressure_var: 0xFFFF,
                counter: 0xFFFF,
            },
            RawFields {
                density: 0x09FA,
                pressure_20c: 0x157C,
                temperature: 0x0B72,
                pressure_var: 0x157C,
                counter: 0x002A,
            },
        ] {
            assert_eq!(RawFields::from_bytes(&fields.to_bytes()), fields);
        }
    }

    #[test]
    fn test_encode_canonical_bytes() {
        let fields = RawFields {
            density: 0x09FA,
            pressure_20c: 0x157C,
            temperature: 0x0B72,
            pressure_var: 0x157C,
            counter: 0x002A,
        };
        assert_eq!(hex::encode_upper(fields.to_bytes()), CANONICAL);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(decode_hex(CANONICAL).unwrap(), decode_hex(CANONICAL).unwrap());
    }
}
