use crate::domain::metrics::ImpactMetrics;
use crate::domain::simulation::{ConfidenceLevel, SimulationConfidence};

/// Rates how much real data backed a baseline from five presence signals.
pub fn assess(baseline: &ImpactMetrics) -> SimulationConfidence {
    let signals = [
        (
            baseline.missions_count > 0,
            "No missions recorded yet; mission impact estimates rely on default factors.",
        ),
        (
            baseline.energy_green_percent > 0.0,
            "No green energy data on profiles; energy estimates start from a 0% share.",
        ),
        (
            baseline.products_count > 0,
            "No products in the catalog; material shift estimates have no baseline to compare against.",
        ),
        (
            baseline.foundation_contributions_total > 0.0,
            "No foundation contributions recorded; foundation scenarios cannot scale from existing support.",
        ),
        (
            baseline.goes_green_actions_count > 0,
            "No goes-green actions recorded; baseline CO2 savings may be understated.",
        ),
    ];

    let present = signals.iter().filter(|(present, _)| *present).count();
    let data_completeness_percent = present as f64 / signals.len() as f64 * 100.0;
    let level = if data_completeness_percent >= 80.0 {
        ConfidenceLevel::High
    } else if data_completeness_percent >= 40.0 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };

    let mut notes: Vec<String> = signals
        .iter()
        .filter(|(present, _)| !*present)
        .map(|(_, note)| note.to_string())
        .collect();
    if notes.is_empty() {
        notes.push("Baseline is backed by data in every category.".to_string());
    }

    SimulationConfidence {
        level,
        data_completeness_percent,
        notes,
    }
}
