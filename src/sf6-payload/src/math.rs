// SPDX-FileCopyrightText: 2026 sf6mon contributors
//
// SPDX-License-Identifier: BSD-2-Clause

/// Round `value` to `dp` decimal places, ties to even.
///
/// Matches the rounding of the firmware's reference decoder; ties can only
/// occur on values that are exact binary ties after scaling.
#[must_use]
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round_ties_even() / factor
}
