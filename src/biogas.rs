//! Biogas yield estimator

use std::fmt;

use tracing::debug;

use crate::models::{BiogasRequest, BiogasResult, WasteType};
use crate::numeric::round_half_up;

/// Methane is assumed to make up 60% of the biogas volume
pub const METHANE_SHARE: f64 = 0.6;

/// Energy content of methane, kWh per m³
pub const METHANE_ENERGY_KWH_PER_M3: f64 = 10.0;

impl WasteType {
    pub const DEFAULT_YIELD: f64 = 0.2;
    pub const DEFAULT_VS_FRACTION: f64 = 0.7;

    /// m³ of methane per kg of volatile solids
    pub fn methane_yield_per_kg(&self) -> f64 {
        match self {
            WasteType::Food => 0.3,
            WasteType::Manure => 0.25,
            WasteType::Green => 0.18,
            WasteType::Other(_) => Self::DEFAULT_YIELD,
        }
    }

    /// Share of the wet mass that is volatile solids
    pub fn volatile_solids_fraction(&self) -> f64 {
        match self {
            WasteType::Food => 0.9,
            WasteType::Manure => 0.8,
            WasteType::Green => 0.6,
            WasteType::Other(_) => Self::DEFAULT_VS_FRACTION,
        }
    }
}

/// Estimate methane, biogas and energy from a mass of waste.
///
/// Methane is rounded to 2 decimals before biogas and energy are derived
/// from it, so those two inherit that rounding.
pub fn estimate_biogas(waste_type: &WasteType, mass_kg: f64) -> BiogasResult {
    let yield_per_kg = waste_type.methane_yield_per_kg();
    let vs_fraction = waste_type.volatile_solids_fraction();

    let total_vs = mass_kg * vs_fraction;
    let methane = round_half_up(total_vs * yield_per_kg, 2);
    let biogas = round_half_up(methane / METHANE_SHARE, 2);
    let energy = round_half_up(methane * METHANE_ENERGY_KWH_PER_M3, 2);

    debug!(
        waste_type = %waste_type,
        mass_kg,
        yield_per_kg,
        vs_fraction,
        methane,
        "biogas estimate"
    );

    BiogasResult {
        waste_type: waste_type.clone(),
        mass_kg,
        total_volatile_solids_kg: total_vs,
        methane_m3: methane,
        biogas_m3: biogas,
        theoretical_energy_kwh: energy,
    }
}

impl BiogasRequest {
    /// Retention time is carried on the request only; it does not enter the
    /// calculation.
    pub fn estimate(&self) -> BiogasResult {
        estimate_biogas(&self.waste_type, self.mass_kg)
    }
}

impl fmt::Display for BiogasResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Biogas Estimate ===")?;
        writeln!(
            f,
            "Input:         {} kg {} ({} kg VS)",
            self.mass_kg,
            self.waste_type,
            round_half_up(self.total_volatile_solids_kg, 2)
        )?;
        writeln!(f, "Methane (CH4): {} m³", self.methane_m3)?;
        writeln!(f, "Total biogas:  {} m³", self.biogas_m3)?;
        writeln!(f, "Energy:        {} kWh", self.theoretical_energy_kwh)?;
        write!(
            f,
            "Note: rough estimate; real yield depends on temperature, pH and reactor design."
        )
    }
}
