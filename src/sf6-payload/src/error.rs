// SPDX-FileCopyrightText: 2026 sf6mon contributors
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fmt;

use serde::Serialize;

/// Error returned when a payload fails validation.
///
/// Both kinds are deterministic and derived purely from the caller's input;
/// nothing is retried and nothing is partially decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum DecodeError {
    /// The normalized input is not exactly 20 hex characters (10 bytes).
    ///
    /// `actual` is the observed hex-character count; for byte input it is
    /// twice the byte count, so the message always speaks the same unit.
    InvalidLength { expected: usize, actual: usize },
    /// The string input contains characters that are not hexadecimal digits.
    InvalidEncoding { detail: String },
}

pub type DecodeResult<T> = Result<T, DecodeError>;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidLength { expected, actual } => write!(
                f,
                "Invalid payload length: expected {expected} hex characters (10 bytes), got {actual}"
            ),
            DecodeError::InvalidEncoding { detail } => {
                write!(f, "Invalid hex string: {detail}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
