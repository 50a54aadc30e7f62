use serde::Serialize;

use crate::domain::scenario::{
    FoundationDelta, GoesGreenDelta, MissionsDelta, ProductMaterialShift, ScenarioDeltas,
    ScenarioInput,
};

/// Ready-made scenario inputs. `expected_impact` is illustrative text derived
/// from the default impact factors; it is never computed at runtime.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub time_horizon_months: i32,
    pub deltas: ScenarioDeltas,
    pub expected_impact: &'static str,
}

impl ScenarioPreset {
    pub fn to_input(&self, tenant_id: &str) -> ScenarioInput {
        ScenarioInput::new(tenant_id, self.time_horizon_months, self.deltas.clone())
    }
}

pub fn preset_catalog() -> Vec<ScenarioPreset> {
    vec![
        ScenarioPreset {
            id: "community_missions",
            name: "Community missions",
            description: "Run ten household behaviour change missions every month for a year.",
            time_horizon_months: 12,
            deltas: ScenarioDeltas {
                missions_delta: Some(MissionsDelta {
                    missions_per_month: 10.0,
                    mission_type: Some("household_behavior_change".to_string()),
                }),
                ..ScenarioDeltas::default()
            },
            expected_impact: "About 3,600 kgCO2 per year (120 missions at 30 kgCO2 each).",
        },
        ScenarioPreset {
            id: "green_energy_transition",
            name: "Green energy transition",
            description: "Raise the green energy share of all sites by 20 percentage points.",
            time_horizon_months: 12,
            deltas: ScenarioDeltas {
                goes_green_delta: Some(GoesGreenDelta {
                    green_energy_share_increase_percent: 20.0,
                }),
                ..ScenarioDeltas::default()
            },
            expected_impact: "Up to 4,000 kgCO2 per year (200 kgCO2 per point), less if the share is already near 100%.",
        },
        ScenarioPreset {
            id: "sustainable_materials",
            name: "Sustainable materials",
            description: "Shift 15% of the product catalog to recycled materials.",
            time_horizon_months: 12,
            deltas: ScenarioDeltas {
                product_material_shift: Some(ProductMaterialShift {
                    shift_percent: 15.0,
                    target_material: Some("recycled".to_string()),
                }),
                ..ScenarioDeltas::default()
            },
            expected_impact: "Up to 2,250 kgCO2 per year (150 kgCO2 per point).",
        },
        ScenarioPreset {
            id: "foundation_boost",
            name: "Foundation boost",
            description: "Increase foundation contributions by half.",
            time_horizon_months: 12,
            deltas: ScenarioDeltas {
                foundation_delta: Some(FoundationDelta {
                    contribution_increase_percent: 50.0,
                }),
                ..ScenarioDeltas::default()
            },
            expected_impact: "0.5 kgCO2 offset per additional currency unit; 1,000 in contributions becomes 1,500 and offsets 250 kgCO2 more.",
        },
        ScenarioPreset {
            id: "blended_impact",
            name: "Blended impact",
            description: "Combine energy efficiency missions, greener energy, sustainable materials and more foundation support over two years.",
            time_horizon_months: 24,
            deltas: ScenarioDeltas {
                missions_delta: Some(MissionsDelta {
                    missions_per_month: 5.0,
                    mission_type: Some("energy_efficiency".to_string()),
                }),
                goes_green_delta: Some(GoesGreenDelta {
                    green_energy_share_increase_percent: 10.0,
                }),
                product_material_shift: Some(ProductMaterialShift {
                    shift_percent: 10.0,
                    target_material: None,
                }),
                foundation_delta: Some(FoundationDelta {
                    contribution_increase_percent: 25.0,
                }),
            },
            expected_impact: "About 8,300 kgCO2 per year (4,800 from missions, 2,000 from energy, 1,500 from materials) plus foundation offsets.",
        },
    ]
}

pub fn find_preset(id: &str) -> Option<ScenarioPreset> {
    preset_catalog().into_iter().find(|preset| preset.id == id)
}
