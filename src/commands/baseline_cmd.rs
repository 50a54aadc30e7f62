use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::store_args::load_factors;
use crate::services::confidence::assess;
use crate::services::engine::SimulationEngine;

pub async fn baseline_command(cmd: Commands) -> ExitCode {
    let Commands::Baseline {
        tenant,
        store,
        factors,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

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
    let baseline = match engine.compute_baseline(&tenant).await {
        Ok(baseline) => baseline,
        Err(e) => {
            eprintln!("Failed to compute baseline: {e}");
            return ExitCode::FAILURE;
        }
    };

    let yaml = match serde_yaml::to_string(&baseline) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize baseline: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let confidence = assess(&baseline);
    println!("Baseline for {tenant}");
    print!("{yaml}");
    println!(
        "Confidence: {} ({:.0}% data completeness)",
        confidence.level.as_str(),
        confidence.data_completeness_percent
    );
    ExitCode::SUCCESS
}
