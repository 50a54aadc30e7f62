use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MissionsDelta {
    pub missions_per_month: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoesGreenDelta {
    pub green_energy_share_increase_percent: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductMaterialShift {
    pub shift_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_material: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FoundationDelta {
    pub contribution_increase_percent: f64,
}

/// Four independent, optional intervention categories.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioDeltas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missions_delta: Option<MissionsDelta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goes_green_delta: Option<GoesGreenDelta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_material_shift: Option<ProductMaterialShift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foundation_delta: Option<FoundationDelta>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    #[serde(default)]
    pub tenant_id: String,
    pub time_horizon_months: i32,
    #[serde(default)]
    pub deltas: ScenarioDeltas,
}

#[derive(Error, Debug, PartialEq)]
pub enum ScenarioValidationError {
    #[error("time horizon must be greater than zero months, got {0}")]
    InvalidTimeHorizon(i32),
    #[error("scenario has no delta categories")]
    NoDeltas,
}

impl ScenarioDeltas {
    pub fn is_empty(&self) -> bool {
        self.active_categories().is_empty()
    }

    pub fn active_categories(&self) -> Vec<&'static str> {
        let mut categories = Vec::new();
        if self.missions_delta.is_some() {
            categories.push("missions_delta");
        }
        if self.goes_green_delta.is_some() {
            categories.push("goes_green_delta");
        }
        if self.product_material_shift.is_some() {
            categories.push("product_material_shift");
        }
        if self.foundation_delta.is_some() {
            categories.push("foundation_delta");
        }
        categories
    }
}

impl ScenarioInput {
    pub fn new(tenant_id: &str, time_horizon_months: i32, deltas: ScenarioDeltas) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            time_horizon_months,
            deltas,
        }
    }

    /// Caller-side check. The engine accepts degenerate inputs and simply
    /// returns the baseline unchanged for them.
    pub fn validate(&self) -> Result<(), ScenarioValidationError> {
        if self.time_horizon_months <= 0 {
            return Err(ScenarioValidationError::InvalidTimeHorizon(
                self.time_horizon_months,
            ));
        }
        if self.deltas.is_empty() {
            return Err(ScenarioValidationError::NoDeltas);
        }
        Ok(())
    }
}
