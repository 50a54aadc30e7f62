use std::process::ExitCode;

use thiserror::Error;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_report;
use crate::commands::store_args::load_factors;
use crate::domain::preset::find_preset;
use crate::domain::scenario::ScenarioInput;
use crate::services::engine::SimulationEngine;
use crate::services::scenario_yaml::{
    ScenarioYamlError, load_scenario_from_yaml_file, serialize_result_to_yaml,
};

#[derive(Error, Debug)]
enum ScenarioSourceError {
    #[error(transparent)]
    Yaml(#[from] ScenarioYamlError),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("either a scenario file or a preset is required")]
    Missing,
}

fn load_input(
    tenant: &str,
    scenario: Option<&str>,
    preset: Option<&str>,
) -> Result<ScenarioInput, ScenarioSourceError> {
    match (scenario, preset) {
        (Some(path), _) => Ok(load_scenario_from_yaml_file(path)?),
        (None, Some(id)) => find_preset(id)
            .map(|preset| preset.to_input(tenant))
            .ok_or_else(|| ScenarioSourceError::UnknownPreset(id.to_string())),
        (None, None) => Err(ScenarioSourceError::Missing),
    }
}

pub async fn simulate_command(cmd: Commands) -> ExitCode {
    let Commands::Simulate {
        tenant,
        scenario,
        preset,
        months,
        store,
        factors,
        output,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let mut input = match load_input(&tenant, scenario.as_deref(), preset.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to load scenario: {e}");
            return ExitCode::FAILURE;
        }
    };
    input.tenant_id = tenant.clone();
    if let Some(months) = months {
        input.time_horizon_months = months;
    }
    if let Err(e) = input.validate() {
        eprintln!("Invalid scenario: {e}");
        return ExitCode::FAILURE;
    }

    let factors = match load_factors(factors.as_deref()) {
        Ok(factors) => factors,
        Err(e) => {
            eprintln!("Failed to load impact factors: {e}");
            return ExitCode::FAILURE;
        }
    };
    let store = match store.open() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open activity store: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let engine = SimulationEngine::new(store, factors);
    let result = match engine.run_simulation(&tenant, &input).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to run simulation: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_simulation_report(&result));

    if let Some(output) = output {
        let mut buffer = Vec::new();
        if let Err(e) = serialize_result_to_yaml(&mut buffer, &result) {
            eprintln!("Failed to serialize simulation result: {e:?}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = tokio::fs::write(&output, buffer).await {
            eprintln!("Failed to write simulation result: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Simulation result written to {output}");
    }
    ExitCode::SUCCESS
}
