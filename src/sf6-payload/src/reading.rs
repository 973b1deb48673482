// SPDX-FileCopyrightText: 2026 sf6mon contributors
//
// SPDX-License-Identifier: BSD-2-Clause

use serde::Serialize;

use crate::math::round_dp;
use crate::wire::RawFields;

/// Unit labels carried alongside every scaled value.
pub const UNIT_DENSITY: &str = "kg/m³";
pub const UNIT_PRESSURE: &str = "kPa";
pub const UNIT_TEMPERATURE_K: &str = "K";
pub const UNIT_TEMPERATURE_C: &str = "°C";

/// Zero of the Celsius scale in kelvin.
const KELVIN_OFFSET: f64 = 273.15;

/// Raw 16-bit register values as transmitted on the wire.
///
/// The Modbus counter is not repeated here; it is unscaled and lives at the
/// top level of [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawValues {
    pub sf6_density_raw: u16,
    pub sf6_pressure_20c_raw: u16,
    pub sf6_temperature_raw: u16,
    pub sf6_pressure_var_raw: u16,
}

/// One decoded SF₆ monitor reading in engineering units.
///
/// Field names follow the uplink decoder contract used by the network-side
/// payload formatters, so the serialized form is a drop-in replacement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Gas density [kg/m³], raw × 0.01
    pub sf6_density: f64,
    pub sf6_density_unit: &'static str,
    /// Pressure normalized to 20 °C [kPa], raw × 0.1
    pub sf6_pressure_20c: f64,
    pub sf6_pressure_20c_unit: &'static str,
    /// Temperature [K], raw × 0.1
    pub sf6_temperature_k: f64,
    pub sf6_temperature_k_unit: &'static str,
    /// Temperature [°C], derived from the kelvin value
    pub sf6_temperature_c: f64,
    pub sf6_temperature_c_unit: &'static str,
    /// Pressure variance [kPa], raw × 0.1
    pub sf6_pressure_var: f64,
    pub sf6_pressure_var_unit: &'static str,
    /// Modbus request counter, unscaled passthrough
    pub modbus_counter: u16,
    pub raw_values: RawValues,
}

impl Reading {
    /// Apply the per-field scaling to raw register values.
    ///
    /// Celsius is computed from the unrounded kelvin value; the kelvin and
    /// celsius outputs are then rounded independently. Rounding kelvin
    /// first would shift some celsius outputs by 0.01.
    #[must_use]
    pub fn from_fields(fields: &RawFields) -> Self {
        let temperature_k = f64::from(fields.temperature) / 10.0;

        Self {
            sf6_density: round_dp(f64::from(fields.density) / 100.0, 2),
            sf6_density_unit: UNIT_DENSITY,
            sf6_pressure_20c: round_dp(f64::from(fields.pressure_20c) / 10.0, 1),
            sf6_pressure_20c_unit: UNIT_PRESSURE,
            sf6_temperature_k: round_dp(temperature_k, 1),
            sf6_temperature_k_unit: UNIT_TEMPERATURE_K,
            sf6_temperature_c: round_dp(temperature_k - KELVIN_OFFSET, 2),
            sf6_temperature_c_unit: UNIT_TEMPERATURE_C,
            sf6_pressure_var: round_dp(f64::from(fields.pressure_var) / 10.0, 1),
            sf6_pressure_var_unit: UNIT_PRESSURE,
            modbus_counter: fields.counter,
            raw_values: RawValues {
                sf6_density_raw: fields.density,
                sf6_pressure_20c_raw: fields.pressure_20c,
                sf6_temperature_raw: fields.temperature,
                sf6_pressure_var_raw: fields.pressure_var,
            },
        }
    }
}
