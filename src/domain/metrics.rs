use serde::{Deserialize, Serialize};

/// Snapshot of a tenant's climate impact. Used both for the baseline derived
/// from stored activity and for the projected scenario.
///
/// Always fully populated: a tenant without data yields all zeros.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ImpactMetrics {
    pub co2_kgco2_per_year: f64,
    pub energy_green_percent: f64,
    pub materials_sustainable_percent: f64,
    pub foundation_impact_kgco2: f64,
    pub missions_count: u64,
    pub goes_green_actions_count: u64,
    pub products_count: u64,
    pub foundation_contributions_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_all_zero() {
        let metrics = ImpactMetrics::default();
        assert_eq!(metrics.co2_kgco2_per_year, 0.0);
        assert_eq!(metrics.energy_green_percent, 0.0);
        assert_eq!(metrics.materials_sustainable_percent, 0.0);
        assert_eq!(metrics.foundation_impact_kgco2, 0.0);
        assert_eq!(metrics.missions_count, 0);
        assert_eq!(metrics.goes_green_actions_count, 0);
        assert_eq!(metrics.products_count, 0);
        assert_eq!(metrics.foundation_contributions_total, 0.0);
    }
}
