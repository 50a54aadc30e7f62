use std::io;

use thiserror::Error;

use crate::domain::impact_factors::ImpactFactors;

#[derive(Error, Debug)]
pub enum ConfigYamlError {
    #[error("failed to read config yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("impact factor {name} must be a finite, non-negative number, got {value}")]
    InvalidFactor { name: String, value: f64 },
}

/// Loads impact factors from YAML. Omitted fields keep their defaults; listed
/// mission types replace the default mission table.
pub fn load_impact_factors_from_yaml_file(path: &str) -> Result<ImpactFactors, ConfigYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_impact_factors_from_yaml_str(&contents)
}

pub fn deserialize_impact_factors_from_yaml_str(
    input: &str,
) -> Result<ImpactFactors, ConfigYamlError> {
    let factors: ImpactFactors = serde_yaml::from_str(input)?;
    validate_factors(&factors)?;
    Ok(factors)
}

fn validate_factors(factors: &ImpactFactors) -> Result<(), ConfigYamlError> {
    let scalars = [
        (
            "default_mission_impact_kgco2",
            factors.default_mission_impact_kgco2,
        ),
        (
            "green_energy_kgco2_per_point",
            factors.green_energy_kgco2_per_point,
        ),
        (
            "sustainable_materials_kgco2_per_point",
            factors.sustainable_materials_kgco2_per_point,
        ),
        (
            "foundation_offset_kgco2_per_currency_unit",
            factors.foundation_offset_kgco2_per_currency_unit,
        ),
    ];
    let missions = factors
        .mission_impact_by_type
        .iter()
        .map(|(name, value)| (name.as_str(), *value));

    for (name, value) in scalars.into_iter().chain(missions) {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigYamlError::InvalidFactor {
                name: name.to_string(),
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let factors =
            deserialize_impact_factors_from_yaml_str("green_energy_kgco2_per_point: 120\n").unwrap();
        assert_eq!(factors.green_energy_kgco2_per_point, 120.0);
        assert_eq!(factors.sustainable_materials_kgco2_per_point, 150.0);
        assert_eq!(factors.mission_impact(Some("household_behavior_change")), 30.0);
    }

    #[test]
    fn mission_table_override_replaces_defaults() {
        let yaml = r#"
mission_impact_by_type:
  tree_planting: 22
default_mission_impact_kgco2: 10
"#;
        let factors = deserialize_impact_factors_from_yaml_str(yaml).unwrap();
        assert_eq!(factors.mission_impact(Some("tree_planting")), 22.0);
        assert_eq!(factors.mission_impact(Some("household_behavior_change")), 10.0);
    }

    #[test]
    fn rejects_negative_factor() {
        let yaml = "foundation_offset_kgco2_per_currency_unit: -1\n";
        let error = deserialize_impact_factors_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            error,
            ConfigYamlError::InvalidFactor { ref name, .. } if name == "foundation_offset_kgco2_per_currency_unit"
        ));
    }

    #[test]
    fn load_from_file() {
        let file = assert_fs::NamedTempFile::new("factors.yaml").unwrap();
        std::fs::write(file.path(), "sustainable_materials_kgco2_per_point: 90\n").unwrap();
        let factors = load_impact_factors_from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(factors.sustainable_materials_kgco2_per_point, 90.0);
    }
}
