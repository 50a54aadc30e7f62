//! Folds a tenant's stored activity into a baseline [`ImpactMetrics`].
//!
//! The six reads are independent and issued concurrently. A failed read is
//! logged and its category treated as empty, so partial data still yields a
//! fully populated baseline. Only an unreachable store is reported to the
//! caller.

use tracing::{debug, warn};

use crate::domain::activity::{
    ContributionRecord, EnergyActionRecord, EnergyProfileRecord, ImpactLogRecord, MissionRecord,
    ProductRecord, resolve_green_percent, resolve_is_sustainable,
};
use crate::domain::impact_factors::ImpactFactors;
use crate::domain::metrics::ImpactMetrics;
use crate::services::data_source::{ActivityDataSource, DataSourceError};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityTotals {
    pub count: u64,
    pub completed_kgco2: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FoundationTotals {
    pub contributions_total: f64,
    pub impact_kgco2: f64,
}

pub async fn compute_baseline<D: ActivityDataSource>(
    source: &D,
    tenant_id: &str,
    factors: &ImpactFactors,
) -> Result<ImpactMetrics, DataSourceError> {
    source.check_connection().await?;

    let (missions, profiles, actions, products, contributions, impact_logs) = tokio::join!(
        source.fetch_missions(tenant_id),
        source.fetch_energy_profiles(tenant_id),
        source.fetch_energy_actions(tenant_id),
        source.fetch_products(tenant_id),
        source.fetch_foundation_contributions(tenant_id),
        source.fetch_foundation_impact_logs(tenant_id),
    );

    let missions = fold_missions(&or_empty(tenant_id, "missions", missions), factors);
    let actions = fold_energy_actions(&or_empty(tenant_id, "energy_actions", actions));
    let (products_count, materials_sustainable_percent) =
        fold_products(&or_empty(tenant_id, "products", products));
    let foundation = fold_foundation(
        &or_empty(tenant_id, "foundation_contributions", contributions),
        &or_empty(tenant_id, "foundation_impact_logs", impact_logs),
        factors,
    );

    let baseline = ImpactMetrics {
        co2_kgco2_per_year: missions.completed_kgco2 + actions.completed_kgco2,
        energy_green_percent: fold_energy_profiles(&or_empty(
            tenant_id,
            "energy_profiles",
            profiles,
        )),
        materials_sustainable_percent,
        foundation_impact_kgco2: foundation.impact_kgco2,
        missions_count: missions.count,
        goes_green_actions_count: actions.count,
        products_count,
        foundation_contributions_total: foundation.contributions_total,
    };
    debug!(tenant_id, ?baseline, "computed baseline");
    Ok(baseline)
}

fn or_empty<T>(
    tenant_id: &str,
    category: &str,
    result: Result<Vec<T>, DataSourceError>,
) -> Vec<T> {
    result.unwrap_or_else(|err| {
        warn!(tenant_id, category, error = %err, "activity read failed, treating category as empty");
        Vec::new()
    })
}

/// All missions are counted; only completed ones contribute CO2, using the
/// default per-mission impact when no estimate was recorded.
pub fn fold_missions(records: &[MissionRecord], factors: &ImpactFactors) -> ActivityTotals {
    let completed_kgco2 = records
        .iter()
        .filter(|record| record.status.is_completed())
        .map(|record| {
            record
                .estimated_impact_kgco2
                .unwrap_or(factors.default_mission_impact_kgco2)
        })
        .sum();
    ActivityTotals {
        count: records.len() as u64,
        completed_kgco2,
    }
}

pub fn fold_energy_actions(records: &[EnergyActionRecord]) -> ActivityTotals {
    let completed_kgco2 = records
        .iter()
        .filter(|record| record.status.is_completed())
        .filter_map(|record| record.estimated_savings_kgco2)
        .sum();
    ActivityTotals {
        count: records.len() as u64,
        completed_kgco2,
    }
}

/// Average green share over profiles that report one. Profiles without energy
/// data (or reporting 0) are left out of the denominator.
pub fn fold_energy_profiles(records: &[EnergyProfileRecord]) -> f64 {
    let shares: Vec<f64> = records
        .iter()
        .filter_map(|record| record.energy_profile.as_ref())
        .filter_map(resolve_green_percent)
        .filter(|share| *share > 0.0)
        .map(|share| share.min(100.0))
        .collect();
    if shares.is_empty() {
        return 0.0;
    }
    shares.iter().sum::<f64>() / shares.len() as f64
}

/// Returns the product count and the percentage flagged sustainable.
pub fn fold_products(records: &[ProductRecord]) -> (u64, f64) {
    if records.is_empty() {
        return (0, 0.0);
    }
    let sustainable = records
        .iter()
        .filter_map(|record| record.climate_metadata.as_ref())
        .filter(|metadata| resolve_is_sustainable(metadata).unwrap_or(false))
        .count();
    let percent = sustainable as f64 / records.len() as f64 * 100.0;
    (records.len() as u64, percent)
}

/// Contributions are stored in cents. Impact logs, when any exist, replace the
/// impact derived from the contribution total.
pub fn fold_foundation(
    contributions: &[ContributionRecord],
    impact_logs: &[ImpactLogRecord],
    factors: &ImpactFactors,
) -> FoundationTotals {
    let total_cents: i128 = contributions
        .iter()
        .map(|record| i128::from(record.amount_cents))
        .sum();
    let contributions_total = (total_cents as f64 / 100.0).max(0.0);
    let impact_kgco2 = if impact_logs.is_empty() {
        contributions_total * factors.foundation_offset_kgco2_per_currency_unit
    } else {
        impact_logs.iter().map(|log| log.impact_kgco2).sum()
    };
    FoundationTotals {
        contributions_total,
        impact_kgco2,
    }
}
