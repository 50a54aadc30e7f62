use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::impact_factors::ImpactFactors;
use crate::domain::metrics::ImpactMetrics;
use crate::domain::preset::{ScenarioPreset, preset_catalog};
use crate::domain::scenario::ScenarioInput;
use crate::domain::simulation::{EngineInfo, SimulationResult};
use crate::services::baseline::compute_baseline;
use crate::services::confidence::assess;
use crate::services::data_source::{ActivityDataSource, DataSourceError};
use crate::services::deltas::diff;
use crate::services::explanation::explain;
use crate::services::projection::project;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("activity store unavailable: {0}")]
    Store(#[from] DataSourceError),
}

pub const SUPPORTED_DELTAS: [&str; 4] = [
    "missions_delta",
    "goes_green_delta",
    "product_material_shift",
    "foundation_delta",
];

pub struct SimulationEngine<D: ActivityDataSource> {
    data_source: D,
    factors: ImpactFactors,
}

impl<D: ActivityDataSource> SimulationEngine<D> {
    pub fn new(data_source: D, factors: ImpactFactors) -> Self {
        Self {
            data_source,
            factors,
        }
    }

    pub async fn compute_baseline(&self, tenant_id: &str) -> Result<ImpactMetrics, SimulationError> {
        Ok(compute_baseline(&self.data_source, tenant_id, &self.factors).await?)
    }

    /// Runs the full pipeline for one tenant. Only an unreachable store is an
    /// error; missing or broken categories lower the confidence instead.
    pub async fn run_simulation(
        &self,
        tenant_id: &str,
        input: &ScenarioInput,
    ) -> Result<SimulationResult, SimulationError> {
        if input.tenant_id != tenant_id {
            warn!(
                tenant_id,
                input_tenant_id = %input.tenant_id,
                "scenario tenant differs from requested tenant, using requested tenant"
            );
        }

        let baseline = self.compute_baseline(tenant_id).await?;
        let projection = project(&baseline, input, &self.factors);
        let deltas = diff(&baseline, &projection.metrics);
        let explanations = explain(
            input,
            &baseline,
            &projection.metrics,
            &deltas,
            &projection.contributions,
        );
        let confidence = assess(&baseline);

        info!(
            tenant_id,
            months = input.time_horizon_months,
            co2_delta = deltas.co2_reduction_kgco2_per_year,
            confidence = confidence.level.as_str(),
            "simulation complete"
        );

        Ok(SimulationResult {
            tenant_id: tenant_id.to_string(),
            time_horizon_months: input.time_horizon_months,
            baseline,
            scenario: projection.metrics,
            deltas,
            contributions: projection.contributions,
            explanations,
            confidence,
            computed_at: Utc::now(),
        })
    }
}

pub fn list_presets() -> Vec<ScenarioPreset> {
    preset_catalog()
}

/// Static self-description of the engine for a given factor set.
pub fn engine_info(factors: &ImpactFactors) -> EngineInfo {
    EngineInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_deltas: SUPPORTED_DELTAS.iter().map(|name| name.to_string()).collect(),
        impact_factors: factors.clone(),
        presets_count: list_presets().len(),
        notes: vec![
            "Estimates are order-of-magnitude figures derived from static impact factors.".to_string(),
            "Mission impact is annualized: horizons of any length yield a per-year rate.".to_string(),
            "Green energy and sustainable material shares saturate at 100%.".to_string(),
            "Foundation impact logs take precedence over contribution-derived estimates.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::{ActivityStatus, ContributionRecord};
    use crate::domain::preset::find_preset;
    use crate::domain::scenario::{FoundationDelta, ScenarioDeltas};
    use crate::domain::simulation::{ConfidenceLevel, ExplanationCategory};
    use crate::test_support::{StubActivitySource, mission};

    #[tokio::test]
    async fn run_simulation_merges_all_stages() {
        let source = StubActivitySource {
            missions: vec![mission(ActivityStatus::Completed, Some(100.0))],
            contributions: vec![ContributionRecord {
                amount_cents: 100_000,
            }],
            ..StubActivitySource::default()
        };
        let engine = SimulationEngine::new(source, ImpactFactors::default());
        let input = ScenarioInput::new(
            "acme",
            6,
            ScenarioDeltas {
                foundation_delta: Some(FoundationDelta {
                    contribution_increase_percent: 50.0,
                }),
                ..ScenarioDeltas::default()
            },
        );

        let result = engine.run_simulation("acme", &input).await.unwrap();

        assert_eq!(result.tenant_id, "acme");
        assert_eq!(result.time_horizon_months, 6);
        assert_eq!(result.baseline.foundation_impact_kgco2, 500.0);
        assert_eq!(result.scenario.foundation_contributions_total, 1500.0);
        assert_eq!(result.scenario.foundation_impact_kgco2, 750.0);
        assert_eq!(result.deltas.foundation_impact_increase_kgco2, 250.0);
        assert_eq!(result.deltas.foundation_impact_increase_percent, 50.0);
        assert_eq!(result.explanations.len(), 2);
        assert_eq!(result.explanations[0].category, ExplanationCategory::Foundation);
        assert_eq!(result.confidence.level, ConfidenceLevel::Medium);
        assert_eq!(result.confidence.data_completeness_percent, 40.0);
    }

    #[tokio::test]
    async fn failing_reads_degrade_to_low_confidence() {
        let source = StubActivitySource {
            failing: vec!["missions", "products", "energy_profiles"],
            ..StubActivitySource::default()
        };
        let engine = SimulationEngine::new(source, ImpactFactors::default());
        let input = find_preset("green_energy_transition")
            .unwrap()
            .to_input("acme");

        let result = engine.run_simulation("acme", &input).await.unwrap();

        assert_eq!(result.confidence.level, ConfidenceLevel::Low);
        assert_eq!(result.scenario.co2_kgco2_per_year, 4000.0);
        assert_eq!(result.deltas.co2_reduction_percent, 100.0);
    }

    #[tokio::test]
    async fn unreachable_store_is_an_error() {
        let source = StubActivitySource {
            unreachable: true,
            ..StubActivitySource::default()
        };
        let engine = SimulationEngine::new(source, ImpactFactors::default());
        let input = find_preset("community_missions").unwrap().to_input("acme");

        let error = engine.run_simulation("acme", &input).await.unwrap_err();
        assert!(matches!(
            error,
            SimulationError::Store(DataSourceError::Connection)
        ));
    }

    #[test]
    fn engine_info_describes_factors_and_presets() {
        let info = engine_info(&ImpactFactors::default());
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.supported_deltas.len(), 4);
        assert_eq!(info.presets_count, list_presets().len());
        assert_eq!(info.impact_factors, ImpactFactors::default());
        assert!(!info.notes.is_empty());
    }
}
