// SPDX-FileCopyrightText: 2026 sf6mon contributors
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fmt::Write;

use sf6_payload::Reading;

/// Render a decoded reading as a human-readable block.
///
/// Raw register values are shown in decimal and hex so they can be checked
/// against the uplink bytes directly.
#[must_use]
pub fn render_text(reading: &Reading) -> String {
    let mut out = String::new();
    let raw = &reading.raw_values;

    // Writing to a String cannot fail.
    writeln!(out, "SF6 sensor data:").unwrap();
    writeln!(
        out,
        "  Density:            {:.2} {}",
        reading.sf6_density, reading.sf6_density_unit
    )
    .unwrap();
    writeln!(
        out,
        "  Pressure @20C:      {:.1} {}",
        reading.sf6_pressure_20c, reading.sf6_pressure_20c_unit
    )
    .unwrap();
    writeln!(
        out,
        "  Temperature:        {:.1} {} ({:.2} {})",
        reading.sf6_temperature_k,
        reading.sf6_temperature_k_unit,
        reading.sf6_temperature_c,
        reading.sf6_temperature_c_unit
    )
    .unwrap();
    writeln!(
        out,
        "  Pressure variance:  {:.1} {}",
        reading.sf6_pressure_var, reading.sf6_pressure_var_unit
    )
    .unwrap();
    writeln!(out, "Modbus counter:       {}", reading.modbus_counter).unwrap();
    writeln!(out, "Raw values:").unwrap();
    writeln!(
        out,
        "  Density:            {} (0x{:04X})",
        raw.sf6_density_raw, raw.sf6_density_raw
    )
    .unwrap();
    writeln!(
        out,
        "  Pressure @20C:      {} (0x{:04X})",
        raw.sf6_pressure_20c_raw, raw.sf6_pressure_20c_raw
    )
    .unwrap();
    writeln!(
        out,
        "  Temperature:        {} (0x{:04X})",
        raw.sf6_temperature_raw, raw.sf6_temperature_raw
    )
    .unwrap();
    writeln!(
        out,
        "  Pressure variance:  {} (0x{:04X})",
        raw.sf6_pressure_var_raw, raw.sf6_pressure_var_raw
    )
    .unwrap();

    out
}
