//! Turns a projection breakdown into readable sentences.
//!
//! Nothing here recomputes impact: every number comes from the
//! [`ContributionBreakdown`] produced by the projector or from the deltas.

use crate::domain::metrics::ImpactMetrics;
use crate::domain::scenario::ScenarioInput;
use crate::domain::simulation::{
    ContributionBreakdown, ExplanationCategory, FoundationContribution, ImpactDeltas,
    MaterialShiftContribution, MissionsContribution, ShareShiftContribution,
    SimulationExplanation,
};

/// One explanation per projected category (missions, goes green, materials,
/// foundation), followed by a single overall summary.
pub fn explain(
    input: &ScenarioInput,
    baseline: &ImpactMetrics,
    scenario: &ImpactMetrics,
    deltas: &ImpactDeltas,
    contributions: &ContributionBreakdown,
) -> Vec<SimulationExplanation> {
    let mut explanations = Vec::new();

    if let Some(missions) = &contributions.missions {
        explanations.push(explain_missions(missions, input.time_horizon_months));
    }
    if let Some(shift) = &contributions.goes_green {
        explanations.push(explain_goes_green(shift));
    }
    if let Some(materials) = &contributions.materials {
        explanations.push(explain_materials(materials));
    }
    if let Some(foundation) = &contributions.foundation {
        explanations.push(explain_foundation(foundation));
    }
    explanations.push(explain_overall(input, baseline, scenario, deltas));

    explanations
}

/// Whole numbers print without decimals, anything else with one.
fn quantity(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn explain_missions(missions: &MissionsContribution, months: i32) -> SimulationExplanation {
    let kind = match &missions.mission_type {
        Some(mission_type) => format!(" {}", mission_type.replace('_', " ")),
        None => String::new(),
    };
    let text = format!(
        "Adding {per_month}{kind} missions per month over {months} months means {total} new missions, \
         reducing emissions by about {annual:.0} kgCO2 per year. \
         This assumes an average impact of {per_mission} kgCO2 per completed mission.",
        per_month = quantity(missions.missions_per_month),
        total = quantity(missions.total_new_missions),
        annual = missions.annual_kgco2,
        per_mission = quantity(missions.impact_per_mission_kgco2),
    );
    SimulationExplanation {
        category: ExplanationCategory::Missions,
        text,
        impact_kgco2: Some(missions.annual_kgco2),
    }
}

fn explain_goes_green(shift: &ShareShiftContribution) -> SimulationExplanation {
    let text = format!(
        "Raising the green energy share from {from:.1}% to {to:.1}% (+{applied:.1} points) avoids about \
         {annual:.0} kgCO2 per year, assuming {per_point} kgCO2 per percentage point.{capped}",
        from = shift.from_percent,
        to = shift.to_percent,
        applied = shift.applied_increase_points,
        annual = shift.annual_kgco2,
        per_point = shift.kgco2_per_point,
        capped = capped_note(shift),
    );
    SimulationExplanation {
        category: ExplanationCategory::GoesGreen,
        text,
        impact_kgco2: Some(shift.annual_kgco2),
    }
}

fn explain_materials(materials: &MaterialShiftContribution) -> SimulationExplanation {
    let shift = &materials.shift;
    let target = match &materials.target_material {
        Some(material) => format!(" toward {material}"),
        None => String::new(),
    };
    let text = format!(
        "Shifting the product catalog{target} raises sustainable materials from {from:.1}% to {to:.1}% \
         (+{applied:.1} points), avoiding about {annual:.0} kgCO2 per year, assuming {per_point} kgCO2 \
         per percentage point.{capped}",
        from = shift.from_percent,
        to = shift.to_percent,
        applied = shift.applied_increase_points,
        annual = shift.annual_kgco2,
        per_point = shift.kgco2_per_point,
        capped = capped_note(shift),
    );
    SimulationExplanation {
        category: ExplanationCategory::Materials,
        text,
        impact_kgco2: Some(shift.annual_kgco2),
    }
}

fn capped_note(shift: &ShareShiftContribution) -> String {
    if shift.applied_increase_points < shift.requested_increase_points {
        format!(
            " The requested +{} points were capped at 100%.",
            shift.requested_increase_points
        )
    } else {
        String::new()
    }
}

fn explain_foundation(foundation: &FoundationContribution) -> SimulationExplanation {
    let mut text = format!(
        "Increasing foundation contributions by {percent}% adds {added:.2} (from {before:.2} to {after:.2}), \
         offsetting about {impact:.0} more kgCO2 at {rate} kgCO2 per currency unit.",
        percent = foundation.increase_percent,
        added = foundation.additional_contribution,
        before = foundation.contributions_before,
        after = foundation.contributions_before + foundation.additional_contribution,
        impact = foundation.additional_impact_kgco2,
        rate = foundation.offset_kgco2_per_currency_unit,
    );
    if foundation.contributions_before == 0.0 {
        text.push_str(" There are no existing contributions to scale, so this has no effect yet.");
    }
    SimulationExplanation {
        category: ExplanationCategory::Foundation,
        text,
        impact_kgco2: Some(foundation.additional_impact_kgco2),
    }
}

fn explain_overall(
    input: &ScenarioInput,
    baseline: &ImpactMetrics,
    scenario: &ImpactMetrics,
    deltas: &ImpactDeltas,
) -> SimulationExplanation {
    let total = deltas.co2_reduction_kgco2_per_year + deltas.foundation_impact_increase_kgco2;
    let text = format!(
        "Overall, this {months}-month scenario adds an estimated {total:.0} kgCO2e of impact: \
         {co2:.0} kgCO2 per year in reductions (from {before:.0} to {after:.0}) plus {foundation:.0} kgCO2 \
         in foundation offsets. These figures are order-of-magnitude estimates based on static impact \
         factors, not verified measurements.",
        months = input.time_horizon_months,
        co2 = deltas.co2_reduction_kgco2_per_year,
        before = baseline.co2_kgco2_per_year,
        after = scenario.co2_kgco2_per_year,
        foundation = deltas.foundation_impact_increase_kgco2,
    );
    SimulationExplanation {
        category: ExplanationCategory::Overall,
        text,
        impact_kgco2: Some(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::impact_factors::ImpactFactors;
    use crate::domain::preset::find_preset;
    use crate::domain::scenario::{GoesGreenDelta, MissionsDelta, ScenarioDeltas};
    use crate::services::deltas::diff;
    use crate::services::projection::project;
    use crate::test_support::populated_baseline;

    fn explain_input(baseline: &ImpactMetrics, input: &ScenarioInput) -> Vec<SimulationExplanation> {
        let projection = project(baseline, input, &ImpactFactors::default());
        let deltas = diff(baseline, &projection.metrics);
        explain(input, baseline, &projection.metrics, &deltas, &projection.contributions)
    }

    #[test]
    fn only_overall_for_empty_scenario() {
        let input = ScenarioInput::new("tenant", 12, ScenarioDeltas::default());
        let explanations = explain_input(&populated_baseline(), &input);
        assert_eq!(explanations.len(), 1);
        assert_eq!(explanations[0].category, ExplanationCategory::Overall);
        assert_eq!(explanations[0].impact_kgco2, Some(0.0));
    }

    #[test]
    fn one_explanation_per_category_then_overall() {
        let preset = find_preset("blended_impact").unwrap();
        let explanations = explain_input(&populated_baseline(), &preset.to_input("tenant"));
        let categories: Vec<_> = explanations.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                ExplanationCategory::Missions,
                ExplanationCategory::GoesGreen,
                ExplanationCategory::Materials,
                ExplanationCategory::Foundation,
                ExplanationCategory::Overall,
            ]
        );
    }

    #[test]
    fn missions_text_names_the_assumption() {
        let input = ScenarioInput::new(
            "tenant",
            12,
            ScenarioDeltas {
                missions_delta: Some(MissionsDelta {
                    missions_per_month: 10.0,
                    mission_type: Some("household_behavior_change".to_string()),
                }),
                ..ScenarioDeltas::default()
            },
        );
        let explanations = explain_input(&ImpactMetrics::default(), &input);
        let missions = &explanations[0];
        assert!(missions.text.contains("10 household behavior change missions per month"));
        assert!(missions.text.contains("120 new missions"));
        assert!(missions.text.contains("3600 kgCO2 per year"));
        assert!(missions.text.contains("average impact of 30 kgCO2 per completed mission"));
        assert_eq!(missions.impact_kgco2, Some(3600.0));
    }

    #[test]
    fn fractional_mission_rates_print_one_decimal() {
        let input = ScenarioInput::new(
            "tenant",
            9,
            ScenarioDeltas {
                missions_delta: Some(MissionsDelta {
                    missions_per_month: 3.3,
                    mission_type: None,
                }),
                ..ScenarioDeltas::default()
            },
        );
        let explanations = explain_input(&ImpactMetrics::default(), &input);
        let text = &explanations[0].text;
        assert!(text.contains("Adding 3.3 missions per month over 9 months means 29.7 new missions"));
        assert!(!text.contains("29.69999"));
    }

    #[test]
    fn explain_is_deterministic() {
        let preset = find_preset("blended_impact").unwrap();
        let input = preset.to_input("tenant");
        let baseline = populated_baseline();
        assert_eq!(explain_input(&baseline, &input), explain_input(&baseline, &input));
    }

    #[test]
    fn capped_green_increase_is_reported() {
        let baseline = ImpactMetrics {
            energy_green_percent: 90.0,
            ..ImpactMetrics::default()
        };
        let input = ScenarioInput::new(
            "tenant",
            12,
            ScenarioDeltas {
                goes_green_delta: Some(GoesGreenDelta {
                    green_energy_share_increase_percent: 20.0,
                }),
                ..ScenarioDeltas::default()
            },
        );
        let explanations = explain_input(&baseline, &input);
        assert!(explanations[0].text.contains("from 90.0% to 100.0% (+10.0 points)"));
        assert!(explanations[0].text.contains("capped at 100%"));
        assert_eq!(explanations[0].impact_kgco2, Some(2000.0));
    }

    #[test]
    fn overall_sums_co2_and_foundation_impact() {
        let preset = find_preset("blended_impact").unwrap();
        let baseline = populated_baseline();
        let explanations = explain_input(&baseline, &preset.to_input("tenant"));
        let overall = explanations.last().unwrap();
        // 4800 missions + 2000 energy + 1500 materials + 125 foundation
        assert_eq!(overall.impact_kgco2, Some(8425.0));
        assert!(overall.text.contains("estimates"));
    }
}
