use crate::domain::preset::ScenarioPreset;
use crate::domain::simulation::SimulationResult;

pub fn format_simulation_report(result: &SimulationResult) -> String {
    let baseline = &result.baseline;
    let scenario = &result.scenario;
    let deltas = &result.deltas;

    let mut lines = Vec::new();
    lines.push("Simulation Report".to_string());
    lines.push(format!("Tenant: {}", result.tenant_id));
    lines.push(format!("Time horizon: {} months", result.time_horizon_months));
    lines.push(format!(
        "Computed at: {}",
        result.computed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(format!(
        "Confidence: {} ({:.0}% data completeness)",
        result.confidence.level.as_str(),
        result.confidence.data_completeness_percent
    ));
    lines.push(String::new());
    lines.push("Metric | Baseline | Scenario | Change".to_string());
    lines.push("-------|----------|----------|-------".to_string());
    lines.push(format!(
        "CO2 reduction (kgCO2/yr) | {:.2} | {:.2} | {:+.2} ({:+.1}%)",
        baseline.co2_kgco2_per_year,
        scenario.co2_kgco2_per_year,
        deltas.co2_reduction_kgco2_per_year,
        deltas.co2_reduction_percent
    ));
    lines.push(format!(
        "Foundation impact (kgCO2) | {:.2} | {:.2} | {:+.2} ({:+.1}%)",
        baseline.foundation_impact_kgco2,
        scenario.foundation_impact_kgco2,
        deltas.foundation_impact_increase_kgco2,
        deltas.foundation_impact_increase_percent
    ));
    lines.push(format_row(
        "Green energy (%)",
        baseline.energy_green_percent,
        scenario.energy_green_percent,
    ));
    lines.push(format_row(
        "Sustainable materials (%)",
        baseline.materials_sustainable_percent,
        scenario.materials_sustainable_percent,
    ));
    lines.push(format_row(
        "Foundation contributions",
        baseline.foundation_contributions_total,
        scenario.foundation_contributions_total,
    ));
    lines.push(format_count_row(
        "Missions",
        baseline.missions_count,
        scenario.missions_count,
    ));
    lines.push(format_count_row(
        "Goes-green actions",
        baseline.goes_green_actions_count,
        scenario.goes_green_actions_count,
    ));
    lines.push(format_count_row(
        "Products",
        baseline.products_count,
        scenario.products_count,
    ));
    lines.push(String::new());
    lines.push("Explanations:".to_string());
    for explanation in &result.explanations {
        lines.push(format!(
            "- [{}] {}",
            explanation.category.as_str(),
            explanation.text
        ));
    }
    lines.push(String::new());
    lines.push("Confidence notes:".to_string());
    for note in &result.confidence.notes {
        lines.push(format!("- {note}"));
    }

    lines.join("\n")
}

fn format_row(label: &str, baseline: f64, scenario: f64) -> String {
    format!(
        "{label} | {baseline:.2} | {scenario:.2} | {change:+.2}",
        change = scenario - baseline
    )
}

fn format_count_row(label: &str, baseline: u64, scenario: u64) -> String {
    let change = i128::from(scenario) - i128::from(baseline);
    format!("{label} | {baseline} | {scenario} | {change:+}")
}

pub fn format_preset_list(presets: &[ScenarioPreset]) -> String {
    let mut lines = Vec::new();
    for preset in presets {
        lines.push(format!(
            "{} - {} ({} months)",
            preset.id, preset.name, preset.time_horizon_months
        ));
        lines.push(format!("  {}", preset.description));
        lines.push(format!(
            "  Deltas: {}",
            preset.deltas.active_categories().join(", ")
        ));
        lines.push(format!("  Expected impact: {}", preset.expected_impact));
    }
    lines.join("\n")
}
