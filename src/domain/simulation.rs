use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::impact_factors::ImpactFactors;
use crate::domain::metrics::ImpactMetrics;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ImpactDeltas {
    pub co2_reduction_kgco2_per_year: f64,
    pub co2_reduction_percent: f64,
    pub foundation_impact_increase_kgco2: f64,
    pub foundation_impact_increase_percent: f64,
    /// Percentage points, not percent change.
    pub energy_green_increase_points: f64,
    pub materials_sustainable_increase_points: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MissionsContribution {
    pub mission_type: Option<String>,
    pub missions_per_month: f64,
    pub impact_per_mission_kgco2: f64,
    pub total_new_missions: f64,
    pub annual_kgco2: f64,
}

/// A saturating shift of a percentage share (green energy, sustainable materials).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShareShiftContribution {
    pub requested_increase_points: f64,
    pub applied_increase_points: f64,
    pub from_percent: f64,
    pub to_percent: f64,
    pub kgco2_per_point: f64,
    pub annual_kgco2: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MaterialShiftContribution {
    pub target_material: Option<String>,
    #[serde(flatten)]
    pub shift: ShareShiftContribution,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FoundationContribution {
    pub increase_percent: f64,
    pub contributions_before: f64,
    pub additional_contribution: f64,
    pub offset_kgco2_per_currency_unit: f64,
    pub additional_impact_kgco2: f64,
}

/// What each delta category added to the scenario. Produced by the projector
/// and only formatted by the explanation generator.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContributionBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missions: Option<MissionsContribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goes_green: Option<ShareShiftContribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<MaterialShiftContribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foundation: Option<FoundationContribution>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationCategory {
    Missions,
    GoesGreen,
    Materials,
    Foundation,
    Overall,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationExplanation {
    pub category: ExplanationCategory,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_kgco2: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfidence {
    pub level: ConfidenceLevel,
    pub data_completeness_percent: f64,
    pub notes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub tenant_id: String,
    pub time_horizon_months: i32,
    pub baseline: ImpactMetrics,
    pub scenario: ImpactMetrics,
    pub deltas: ImpactDeltas,
    pub contributions: ContributionBreakdown,
    pub explanations: Vec<SimulationExplanation>,
    pub confidence: SimulationConfidence,
    pub computed_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EngineInfo {
    pub version: String,
    pub supported_deltas: Vec<String>,
    pub impact_factors: ImpactFactors,
    pub presets_count: usize,
    pub notes: Vec<String>,
}

impl ConfidenceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl ExplanationCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ExplanationCategory::Missions => "missions",
            ExplanationCategory::GoesGreen => "goes_green",
            ExplanationCategory::Materials => "materials",
            ExplanationCategory::Foundation => "foundation",
            ExplanationCategory::Overall => "overall",
        }
    }
}
