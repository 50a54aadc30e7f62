use std::sync::Arc;

use tokio::sync::Notify;

use crate::domain::activity::{
    ActivityStatus, ClimateMetadata, ContributionRecord, EnergyActionRecord, EnergyProfile,
    EnergyProfileRecord, ImpactLogRecord, MissionRecord, ProductRecord,
};
use crate::domain::metrics::ImpactMetrics;
use crate::services::data_source::{ActivityDataSource, DataSourceError};

/// In-memory activity source. Categories listed in `failing` return an error
/// instead of their records; `unreachable` fails the connection check. With a
/// `missions_gate`, the missions read stalls until the impact logs read runs.
#[derive(Debug, Clone, Default)]
pub struct StubActivitySource {
    pub missions: Vec<MissionRecord>,
    pub energy_profiles: Vec<EnergyProfileRecord>,
    pub energy_actions: Vec<EnergyActionRecord>,
    pub products: Vec<ProductRecord>,
    pub contributions: Vec<ContributionRecord>,
    pub impact_logs: Vec<ImpactLogRecord>,
    pub failing: Vec<&'static str>,
    pub unreachable: bool,
    pub missions_gate: Option<Arc<Notify>>,
}

impl StubActivitySource {
    fn read<T: Clone>(&self, category: &str, records: &[T]) -> Result<Vec<T>, DataSourceError> {
        if self.failing.iter().any(|name| *name == category) {
            return Err(DataSourceError::Other(format!("{category} unavailable")));
        }
        Ok(records.to_vec())
    }
}

impl ActivityDataSource for StubActivitySource {
    async fn check_connection(&self) -> Result<(), DataSourceError> {
        if self.unreachable {
            Err(DataSourceError::Connection)
        } else {
            Ok(())
        }
    }

    async fn fetch_missions(&self, _tenant_id: &str) -> Result<Vec<MissionRecord>, DataSourceError> {
        if let Some(gate) = &self.missions_gate {
            gate.notified().await;
        }
        self.read("missions", &self.missions)
    }

    async fn fetch_energy_profiles(
        &self,
        _tenant_id: &str,
    ) -> Result<Vec<EnergyProfileRecord>, DataSourceError> {
        self.read("energy_profiles", &self.energy_profiles)
    }

    async fn fetch_energy_actions(
        &self,
        _tenant_id: &str,
    ) -> Result<Vec<EnergyActionRecord>, DataSourceError> {
        self.read("energy_actions", &self.energy_actions)
    }

    async fn fetch_products(&self, _tenant_id: &str) -> Result<Vec<ProductRecord>, DataSourceError> {
        self.read("products", &self.products)
    }

    async fn fetch_foundation_contributions(
        &self,
        _tenant_id: &str,
    ) -> Result<Vec<ContributionRecord>, DataSourceError> {
        self.read("foundation_contributions", &self.contributions)
    }

    async fn fetch_foundation_impact_logs(
        &self,
        _tenant_id: &str,
    ) -> Result<Vec<ImpactLogRecord>, DataSourceError> {
        if let Some(gate) = &self.missions_gate {
            gate.notify_one();
        }
        self.read("foundation_impact_logs", &self.impact_logs)
    }
}

pub fn mission(status: ActivityStatus, impact: Option<f64>) -> MissionRecord {
    MissionRecord {
        status,
        estimated_impact_kgco2: impact,
    }
}

pub fn energy_action(status: ActivityStatus, savings: Option<f64>) -> EnergyActionRecord {
    EnergyActionRecord {
        status,
        estimated_savings_kgco2: savings,
    }
}

pub fn green_profile(green: Option<f64>, renewable: Option<f64>) -> EnergyProfileRecord {
    EnergyProfileRecord {
        energy_profile: Some(EnergyProfile {
            green_percent: green,
            renewable_percent: renewable,
        }),
    }
}

pub fn product(is_sustainable: Option<bool>, sustainable_materials: Option<bool>) -> ProductRecord {
    ProductRecord {
        climate_metadata: Some(ClimateMetadata {
            is_sustainable,
            sustainable_materials,
        }),
    }
}

/// A baseline with every confidence signal present.
pub fn populated_baseline() -> ImpactMetrics {
    ImpactMetrics {
        co2_kgco2_per_year: 1200.0,
        energy_green_percent: 40.0,
        materials_sustainable_percent: 25.0,
        foundation_impact_kgco2: 500.0,
        missions_count: 8,
        goes_green_actions_count: 3,
        products_count: 12,
        foundation_contributions_total: 1000.0,
    }
}
