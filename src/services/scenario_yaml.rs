use std::io::{self, Write};

use thiserror::Error;

use crate::domain::scenario::ScenarioInput;
use crate::domain::simulation::SimulationResult;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<ScenarioInput, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<ScenarioInput, ScenarioYamlError> {
    Ok(serde_yaml::from_str(input)?)
}

pub fn serialize_result_to_yaml<W: Write>(
    writer: &mut W,
    result: &SimulationResult,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(result).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::impact_factors::ImpactFactors;
    use crate::domain::metrics::ImpactMetrics;
    use crate::services::confidence::assess;
    use crate::services::deltas::diff;
    use crate::services::explanation::explain;
    use crate::services::projection::project;

    #[test]
    fn deserialize_scenario_with_partial_deltas() {
        let yaml = r#"
tenant_id: acme
time_horizon_months: 6
deltas:
  missions_delta:
    missions_per_month: 2.5
    mission_type: waste_reduction
  foundation_delta:
    contribution_increase_percent: 10
"#;
        let input = deserialize_scenario_from_yaml_str(yaml).unwrap();
        assert_eq!(input.tenant_id, "acme");
        assert_eq!(input.time_horizon_months, 6);
        let missions = input.deltas.missions_delta.unwrap();
        assert_eq!(missions.missions_per_month, 2.5);
        assert_eq!(missions.mission_type.as_deref(), Some("waste_reduction"));
        assert!(input.deltas.goes_green_delta.is_none());
        assert_eq!(
            input.deltas.foundation_delta.unwrap().contribution_increase_percent,
            10.0
        );
    }

    #[test]
    fn deserialize_scenario_without_tenant_or_deltas() {
        let input = deserialize_scenario_from_yaml_str("time_horizon_months: 12\n").unwrap();
        assert_eq!(input.tenant_id, "");
        assert!(input.deltas.is_empty());
    }

    #[test]
    fn deserialize_scenario_rejects_missing_delta_field() {
        let yaml = r#"
time_horizon_months: 12
deltas:
  goes_green_delta: {}
"#;
        let error = deserialize_scenario_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(error, ScenarioYamlError::Parse(_)));
    }

    #[test]
    fn load_scenario_reports_missing_file() {
        let error = load_scenario_from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(error, ScenarioYamlError::Read(_)));
    }

    #[test]
    fn serialize_result_contains_sections() {
        let input = deserialize_scenario_from_yaml_str(
            "tenant_id: acme\ntime_horizon_months: 12\ndeltas:\n  goes_green_delta:\n    green_energy_share_increase_percent: 20\n",
        )
        .unwrap();
        let baseline = ImpactMetrics::default();
        let projection = project(&baseline, &input, &ImpactFactors::default());
        let deltas = diff(&baseline, &projection.metrics);
        let result = SimulationResult {
            tenant_id: input.tenant_id.clone(),
            time_horizon_months: input.time_horizon_months,
            explanations: explain(&input, &baseline, &projection.metrics, &deltas, &projection.contributions),
            confidence: assess(&baseline),
            baseline,
            scenario: projection.metrics,
            deltas,
            contributions: projection.contributions,
            computed_at: chrono::Utc::now(),
        };

        let mut buffer = Vec::new();
        serialize_result_to_yaml(&mut buffer, &result).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("tenant_id: acme"));
        assert!(output.contains("baseline:"));
        assert!(output.contains("scenario:"));
        assert!(output.contains("energy_green_percent: 20.0"));
        assert!(output.contains("category: goes_green"));
        assert!(output.contains("level: low"));
        assert!(output.contains("computed_at:"));
    }
}
