//! Applies scenario deltas to a baseline.
//!
//! Each delta category touches its own fields, so the categories are
//! independent and their order does not matter. Zero or negative deltas
//! never reduce impact.

use crate::domain::impact_factors::ImpactFactors;
use crate::domain::metrics::ImpactMetrics;
use crate::domain::scenario::{FoundationDelta, MissionsDelta, ScenarioInput};
use crate::domain::simulation::{
    ContributionBreakdown, FoundationContribution, MaterialShiftContribution,
    MissionsContribution, ShareShiftContribution,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub metrics: ImpactMetrics,
    pub contributions: ContributionBreakdown,
}

/// Projects `input.deltas` onto `baseline`. A non-positive horizon yields the
/// baseline unchanged with an empty breakdown.
pub fn project(
    baseline: &ImpactMetrics,
    input: &ScenarioInput,
    factors: &ImpactFactors,
) -> Projection {
    let mut metrics = baseline.clone();
    let mut contributions = ContributionBreakdown::default();
    let months = input.time_horizon_months;
    if months <= 0 {
        return Projection {
            metrics,
            contributions,
        };
    }

    if let Some(delta) = &input.deltas.missions_delta {
        let missions = missions_contribution(delta, months, factors);
        metrics.missions_count = metrics
            .missions_count
            .saturating_add(missions.total_new_missions.round() as u64);
        metrics.co2_kgco2_per_year += missions.annual_kgco2;
        contributions.missions = Some(missions);
    }

    if let Some(delta) = &input.deltas.goes_green_delta {
        let shift = share_shift(
            baseline.energy_green_percent,
            delta.green_energy_share_increase_percent,
            factors.green_energy_kgco2_per_point,
        );
        metrics.energy_green_percent = shift.to_percent;
        metrics.co2_kgco2_per_year += shift.annual_kgco2;
        contributions.goes_green = Some(shift);
    }

    if let Some(delta) = &input.deltas.product_material_shift {
        let shift = share_shift(
            baseline.materials_sustainable_percent,
            delta.shift_percent,
            factors.sustainable_materials_kgco2_per_point,
        );
        metrics.materials_sustainable_percent = shift.to_percent;
        metrics.co2_kgco2_per_year += shift.annual_kgco2;
        contributions.materials = Some(MaterialShiftContribution {
            target_material: delta.target_material.clone(),
            shift,
        });
    }

    if let Some(delta) = &input.deltas.foundation_delta {
        let foundation = foundation_contribution(baseline, delta, factors);
        metrics.foundation_contributions_total += foundation.additional_contribution;
        metrics.foundation_impact_kgco2 += foundation.additional_impact_kgco2;
        contributions.foundation = Some(foundation);
    }

    Projection {
        metrics,
        contributions,
    }
}

/// New missions over the horizon, annualized so that horizons of different
/// length with the same monthly rate give the same yearly figure.
fn missions_contribution(
    delta: &MissionsDelta,
    months: i32,
    factors: &ImpactFactors,
) -> MissionsContribution {
    let impact_per_mission = factors.mission_impact(delta.mission_type.as_deref());
    let months = f64::from(months);
    let total_new_missions = if delta.missions_per_month > 0.0 {
        delta.missions_per_month * months
    } else {
        0.0
    };
    let annual_kgco2 = (total_new_missions * impact_per_mission * 12.0) / months;
    MissionsContribution {
        mission_type: delta.mission_type.clone(),
        missions_per_month: delta.missions_per_month,
        impact_per_mission_kgco2: impact_per_mission,
        total_new_missions,
        annual_kgco2,
    }
}

/// Raises a percentage share by `requested` points, saturating at 100. Only
/// the points actually applied count toward impact.
fn share_shift(from_percent: f64, requested: f64, kgco2_per_point: f64) -> ShareShiftContribution {
    let to_percent = if requested > 0.0 {
        (from_percent + requested).min(100.0).max(from_percent)
    } else {
        from_percent
    };
    let applied = to_percent - from_percent;
    ShareShiftContribution {
        requested_increase_points: requested,
        applied_increase_points: applied,
        from_percent,
        to_percent,
        kgco2_per_point,
        annual_kgco2: applied * kgco2_per_point,
    }
}

fn foundation_contribution(
    baseline: &ImpactMetrics,
    delta: &FoundationDelta,
    factors: &ImpactFactors,
) -> FoundationContribution {
    let percent = delta.contribution_increase_percent;
    let additional_contribution = if percent > 0.0 {
        baseline.foundation_contributions_total * (percent / 100.0)
    } else {
        0.0
    };
    let rate = factors.foundation_offset_kgco2_per_currency_unit;
    FoundationContribution {
        increase_percent: percent,
        contributions_before: baseline.foundation_contributions_total,
        additional_contribution,
        offset_kgco2_per_currency_unit: rate,
        additional_impact_kgco2: additional_contribution * rate,
    }
}
