//! Typed records returned by the activity store for a single tenant.
//!
//! Store payloads are loosely typed: energy profiles and product metadata may
//! carry one of two alternative flag names. Those are modelled as named
//! optional fields with explicit resolvers so the lookup order is fixed.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Planned,
    InProgress,
    #[serde(alias = "done")]
    Completed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MissionRecord {
    pub status: ActivityStatus,
    pub estimated_impact_kgco2: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EnergyProfile {
    pub green_percent: Option<f64>,
    pub renewable_percent: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EnergyProfileRecord {
    pub energy_profile: Option<EnergyProfile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EnergyActionRecord {
    pub status: ActivityStatus,
    pub estimated_savings_kgco2: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClimateMetadata {
    pub is_sustainable: Option<bool>,
    pub sustainable_materials: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProductRecord {
    pub climate_metadata: Option<ClimateMetadata>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContributionRecord {
    pub amount_cents: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImpactLogRecord {
    pub impact_kgco2: f64,
}

impl ActivityStatus {
    pub fn is_completed(self) -> bool {
        self == ActivityStatus::Completed
    }
}

/// Green share of an energy profile: a positive `green_percent` wins over
/// `renewable_percent`. A zero or negative `green_percent` falls through to
/// `renewable_percent` and is only returned when that key is absent.
pub fn resolve_green_percent(profile: &EnergyProfile) -> Option<f64> {
    profile
        .green_percent
        .filter(|percent| *percent > 0.0)
        .or(profile.renewable_percent)
        .or(profile.green_percent)
}

/// Sustainability flag of a product: either key set to `true` marks it
/// sustainable, `is_sustainable` checked first.
pub fn resolve_is_sustainable(metadata: &ClimateMetadata) -> Option<bool> {
    metadata
        .is_sustainable
        .filter(|flag| *flag)
        .or(metadata.sustainable_materials)
        .or(metadata.is_sustainable)
}
