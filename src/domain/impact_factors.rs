use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static conversion factors used to turn activity changes into estimated
/// kgCO2. Injected into the engine so alternate (e.g. regional) factor sets
/// can be swapped in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ImpactFactors {
    /// kgCO2 per completed mission, keyed by mission type.
    pub mission_impact_by_type: BTreeMap<String, f64>,
    /// Used for unknown mission types and for completed missions without an estimate.
    pub default_mission_impact_kgco2: f64,
    pub green_energy_kgco2_per_point: f64,
    pub sustainable_materials_kgco2_per_point: f64,
    pub foundation_offset_kgco2_per_currency_unit: f64,
}

impl Default for ImpactFactors {
    fn default() -> Self {
        let mission_impact_by_type = [
            ("household_behavior_change", 30.0),
            ("energy_efficiency", 80.0),
            ("sustainable_transport", 120.0),
            ("waste_reduction", 25.0),
            ("community_engagement", 60.0),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        Self {
            mission_impact_by_type,
            default_mission_impact_kgco2: 50.0,
            green_energy_kgco2_per_point: 200.0,
            sustainable_materials_kgco2_per_point: 150.0,
            foundation_offset_kgco2_per_currency_unit: 0.5,
        }
    }
}

impl ImpactFactors {
    pub fn mission_impact(&self, mission_type: Option<&str>) -> f64 {
        mission_type
            .and_then(|name| self.mission_impact_by_type.get(name))
            .copied()
            .unwrap_or(self.default_mission_impact_kgco2)
    }
}
