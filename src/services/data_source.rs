use thiserror::Error;

use crate::domain::activity::{
    ContributionRecord, EnergyActionRecord, EnergyProfileRecord, ImpactLogRecord, MissionRecord,
    ProductRecord,
};

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("resource not found")]
    NotFound,
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

/// Read-only, tenant-scoped access to stored activity. Every read may fail
/// independently of the others.
pub trait ActivityDataSource {
    /// Fails only when the store itself is unreachable.
    async fn check_connection(&self) -> Result<(), DataSourceError>;
    async fn fetch_missions(&self, tenant_id: &str) -> Result<Vec<MissionRecord>, DataSourceError>;
    async fn fetch_energy_profiles(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyProfileRecord>, DataSourceError>;
    async fn fetch_energy_actions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<EnergyActionRecord>, DataSourceError>;
    async fn fetch_products(&self, tenant_id: &str) -> Result<Vec<ProductRecord>, DataSourceError>;
    async fn fetch_foundation_contributions(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ContributionRecord>, DataSourceError>;
    async fn fetch_foundation_impact_logs(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<ImpactLogRecord>, DataSourceError>;
}
