use crate::domain::metrics::ImpactMetrics;
use crate::domain::simulation::ImpactDeltas;

pub fn diff(baseline: &ImpactMetrics, scenario: &ImpactMetrics) -> ImpactDeltas {
    let co2_delta = scenario.co2_kgco2_per_year - baseline.co2_kgco2_per_year;
    let foundation_delta = scenario.foundation_impact_kgco2 - baseline.foundation_impact_kgco2;

    ImpactDeltas {
        co2_reduction_kgco2_per_year: co2_delta,
        co2_reduction_percent: percent_change(baseline.co2_kgco2_per_year, co2_delta),
        foundation_impact_increase_kgco2: foundation_delta,
        foundation_impact_increase_percent: percent_change(
            baseline.foundation_impact_kgco2,
            foundation_delta,
        ),
        energy_green_increase_points: scenario.energy_green_percent
            - baseline.energy_green_percent,
        materials_sustainable_increase_points: scenario.materials_sustainable_percent
            - baseline.materials_sustainable_percent,
    }
}

/// `delta` relative to `baseline`, in percent. From a zero baseline any gain
/// reads as 100% and anything else as 0%.
pub fn percent_change(baseline: f64, delta: f64) -> f64 {
    if baseline == 0.0 {
        if delta > 0.0 { 100.0 } else { 0.0 }
    } else {
        (delta / baseline) * 100.0
    }
}
